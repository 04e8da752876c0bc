//! Game entity types — pure data, no per-frame logic.

use crate::geometry::Rect;
use crate::timer::Countdown;

pub type RoomId = u32;

/// 24-bit colour, as the rooms store their background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ── Static geometry ───────────────────────────────────────────────────────────

/// Immovable obstacle.  Only walls block the player.
#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub rect: Rect,
}

/// Trigger rectangle that moves the player into `target_room_id`.
#[derive(Clone, Debug, PartialEq)]
pub struct Door {
    pub rect: Rect,
    pub target_room_id: RoomId,
    /// Top-left corner of the player after the transition.
    pub spawn_x: i32,
    pub spawn_y: i32,
}

// ── Interactive objects ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    /// Collected once; collected means the object is no longer visible.
    Pickup { item: String },
    /// Opened only by using a key on it.
    LockedBarrier { locked: bool },
    /// One-time open, may award a bonus.
    Container { opened: bool },
    /// Inert scenery; clicking it shows its description.
    PlainDoor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveObject {
    pub rect: Rect,
    pub name: String,
    pub description: String,
    pub visible: bool,
    pub interactive: bool,
    pub kind: ObjectKind,
}

impl InteractiveObject {
    fn new(rect: Rect, name: &str, description: &str, kind: ObjectKind) -> Self {
        InteractiveObject {
            rect,
            name: name.to_string(),
            description: description.to_string(),
            visible: true,
            interactive: true,
            kind,
        }
    }

    pub fn key(rect: Rect) -> Self {
        Self::new(
            rect,
            "Key",
            "A golden key. Wonder what it opens?",
            ObjectKind::Pickup { item: "key".to_string() },
        )
    }

    pub fn chest(rect: Rect) -> Self {
        Self::new(rect, "Chest", "A treasure chest.", ObjectKind::Container { opened: false })
    }

    pub fn locked_door(rect: Rect) -> Self {
        Self::new(
            rect,
            "Locked Door",
            "A wooden door. It looks locked.",
            ObjectKind::LockedBarrier { locked: true },
        )
    }

    pub fn plain_door(rect: Rect, description: &str) -> Self {
        Self::new(rect, "Door", description, ObjectKind::PlainDoor)
    }

    /// Whether a click at `(px, py)` lands on this object.
    pub fn is_clicked(&self, px: i32, py: i32) -> bool {
        self.visible && self.interactive && self.rect.contains_point(px, py)
    }

    pub fn is_locked_barrier(&self) -> bool {
        matches!(self.kind, ObjectKind::LockedBarrier { locked: true })
    }
}

// ── Collectibles ──────────────────────────────────────────────────────────────

/// Side length of the square gems scattered through the rooms.
pub const COLLECTIBLE_SIZE: i32 = 12;
/// Score awarded per collectible.
pub const COLLECTIBLE_SCORE: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub rect: Rect,
}

impl Collectible {
    pub fn at(x: i32, y: i32) -> Self {
        Collectible {
            rect: Rect::new(x, y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE),
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: i32 = 25;

/// Top-down player.  `(x, y)` is the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

impl Player {
    pub fn new(x: i32, y: i32, speed: i32) -> Self {
        Player {
            x,
            y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> (i32, i32) {
        self.rect().center()
    }
}

// ── Inventory ─────────────────────────────────────────────────────────────────

/// Left edge of the first inventory slot.
pub const INVENTORY_X: i32 = 10;
/// Top edge of the inventory slot band.
pub const INVENTORY_Y: i32 = crate::geometry::SCREEN_HEIGHT - 60;
pub const INVENTORY_SLOT_SIZE: i32 = 35;
/// Horizontal distance between consecutive slots.
pub const INVENTORY_SLOT_STRIDE: i32 = 40;

/// Ordered item list.  Every pickup is its own entry; nothing stacks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove the first entry equal to `item`.  Returns whether one was found.
    pub fn remove_first(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Click target of slot `index`.
    pub fn slot_rect(index: usize) -> Rect {
        Rect::new(
            INVENTORY_X + index as i32 * INVENTORY_SLOT_STRIDE,
            INVENTORY_Y,
            INVENTORY_SLOT_SIZE,
            INVENTORY_SLOT_SIZE,
        )
    }

    /// Index of the occupied slot under `(px, py)`, if any.
    pub fn slot_at(&self, px: i32, py: i32) -> Option<usize> {
        (0..self.items.len()).find(|&i| Self::slot_rect(i).contains_point(px, py))
    }
}

// ── Messages ──────────────────────────────────────────────────────────────────

/// Ticks a feedback message stays on screen (3 s at 60 FPS).
pub const MESSAGE_TICKS: u32 = 180;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Message {
    pub text: String,
    pub timer: Countdown,
}

impl Message {
    pub fn new(text: impl Into<String>, ticks: u32) -> Self {
        Message {
            text: text.into(),
            timer: Countdown::new(ticks),
        }
    }

    pub fn is_showing(&self) -> bool {
        self.timer.is_running()
    }
}
