//! Terminal input → per-frame game input.
//!
//! Key handling keeps a `key_frame` map recording the frame number of the
//! last press/repeat event for every key.  Each frame the keys that are
//! still "fresh" (seen within `hold_window` frames) count as held, so
//! several keys can be held at once.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
//!   `Repeat` / `Release` events, so keys are dropped on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire after `hold_window` silent frames.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::geometry::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::movement::DirectionKeys;

/// Everything the games need from one frame of input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub keys: DirectionKeys,
    /// Space was pressed this frame.
    pub attack: bool,
    /// R was pressed this frame.
    pub restart: bool,
    pub quit: bool,
    /// Primary clicks in scene coordinates, oldest first.
    pub clicks: Vec<(i32, i32)>,
}

#[derive(Debug)]
pub struct InputState {
    key_frame: HashMap<KeyCode, u64>,
    hold_window: u64,
    frame: u64,
    /// Terminal size in cells, for mapping mouse events.
    grid: (u16, u16),
    pending: FrameInput,
}

impl InputState {
    pub fn new(hold_window: u64, grid: (u16, u16)) -> Self {
        InputState {
            key_frame: HashMap::new(),
            hold_window,
            frame: 0,
            grid,
            pending: FrameInput::default(),
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Start a new frame.  Call before feeding that frame's events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => self.grid = (*cols, *rows),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        match key.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(key.code, self.frame);
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.pending.quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.pending.quit = true;
                    }
                    KeyCode::Char(' ') => self.pending.attack = true,
                    KeyCode::Char('r') | KeyCode::Char('R') => self.pending.restart = true,
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(key.code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&key.code);
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let point = cell_to_scene(mouse.column, mouse.row, self.grid);
            self.pending.clicks.push(point);
        }
    }

    /// Whether `key` was seen within the last `hold_window` frames.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&k| self.is_held(k))
    }

    /// Held directions plus the one-shot events gathered since the last call.
    pub fn take_frame(&mut self) -> FrameInput {
        let keys = DirectionKeys {
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
            up: self.any_held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
            down: self.any_held(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
        };
        FrameInput {
            keys,
            ..std::mem::take(&mut self.pending)
        }
    }
}

/// Center of terminal cell `(column, row)` in scene coordinates.
pub fn cell_to_scene(column: u16, row: u16, grid: (u16, u16)) -> (i32, i32) {
    let cols = i32::from(grid.0.max(1));
    let rows = i32::from(grid.1.max(1));
    let x = (i32::from(column) * 2 + 1) * SCREEN_WIDTH / (cols * 2);
    let y = (i32::from(row) * 2 + 1) * SCREEN_HEIGHT / (rows * 2);
    (x, y)
}
