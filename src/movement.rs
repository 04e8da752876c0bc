//! Collision-resolved player movement.
//!
//! Movement is all-or-nothing: if the moved rectangle touches any wall the
//! player stays where it was for that frame.  There is no sliding along a
//! wall and no push-out.

use crate::entities::{Player, Wall};

/// Direction keys held this frame.  Any combination is allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionKeys {
    /// Summed per-axis delta for a step of `speed`.  Diagonals are not
    /// normalised, and opposite keys cancel.
    pub fn delta(&self, speed: i32) -> (i32, i32) {
        let mut dx = 0;
        let mut dy = 0;
        if self.left {
            dx -= speed;
        }
        if self.right {
            dx += speed;
        }
        if self.up {
            dy -= speed;
        }
        if self.down {
            dy += speed;
        }
        (dx, dy)
    }
}

/// Compute the player's position after one frame against `walls`.
pub fn step_player(player: &Player, keys: DirectionKeys, walls: &[Wall]) -> Player {
    let (dx, dy) = keys.delta(player.speed);
    if dx == 0 && dy == 0 {
        return player.clone();
    }

    let candidate = player.rect().moved_to(player.x + dx, player.y + dy);
    if walls.iter().any(|w| w.rect.intersects(&candidate)) {
        return player.clone();
    }

    Player {
        x: candidate.x,
        y: candidate.y,
        ..player.clone()
    }
}
