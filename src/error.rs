use std::path::PathBuf;

use thiserror::Error;

use crate::entities::RoomId;

#[derive(Debug, Error)]
pub enum GameError {
    /// A door points at a room that was never built.  This is a level
    /// authoring bug and is fatal.
    #[error("door leads to unknown room {0}")]
    UnknownRoom(RoomId),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
