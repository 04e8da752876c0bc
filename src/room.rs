//! Rooms: static walls and doors plus the objects and collectibles that
//! mutate during play.

use rand::Rng;
use tracing::debug;

use crate::entities::{
    Collectible, Door, InteractiveObject, Rgb, RoomId, Wall, COLLECTIBLE_SIZE,
};
use crate::geometry::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Total placement attempts per `spawn_random_collectibles` call.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Inclusive range for a collectible's top-left corner.
const PLACEMENT_MIN: i32 = 30;
const PLACEMENT_MAX_X: i32 = SCREEN_WIDTH - 50;
const PLACEMENT_MAX_Y: i32 = SCREEN_HEIGHT - 50;

#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub background: Rgb,
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub objects: Vec<InteractiveObject>,
    pub collectibles: Vec<Collectible>,
}

impl Room {
    pub fn new(id: RoomId, background: Rgb) -> Self {
        Room {
            id,
            background,
            walls: Vec::new(),
            doors: Vec::new(),
            objects: Vec::new(),
            collectibles: Vec::new(),
        }
    }

    // ── Level-authoring helpers ───────────────────────────────────────────────

    pub fn add_wall(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.walls.push(Wall {
            rect: Rect::new(x, y, width, height),
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_door(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        target_room_id: RoomId,
        spawn_x: i32,
        spawn_y: i32,
    ) {
        self.doors.push(Door {
            rect: Rect::new(x, y, width, height),
            target_room_id,
            spawn_x,
            spawn_y,
        });
    }

    pub fn add_object(&mut self, object: InteractiveObject) {
        self.objects.push(object);
    }

    pub fn add_collectible(&mut self, x: i32, y: i32) {
        self.collectibles.push(Collectible::at(x, y));
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn blocks(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|w| w.rect.intersects(rect))
    }

    /// Whether `rect` overlaps any wall, door or object.
    fn occupied(&self, rect: &Rect) -> bool {
        self.blocks(rect)
            || self.doors.iter().any(|d| d.rect.intersects(rect))
            || self.objects.iter().any(|o| o.rect.intersects(rect))
    }

    /// Scatter up to `count` collectibles on free floor.
    ///
    /// Gives up after `MAX_PLACEMENT_ATTEMPTS` candidates in total, so the
    /// room may end up with fewer than requested.  Returns how many were
    /// placed.
    pub fn spawn_random_collectibles(&mut self, count: usize, rng: &mut impl Rng) -> usize {
        let mut spawned = 0;
        let mut attempts = 0;

        while spawned < count && attempts < MAX_PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(PLACEMENT_MIN..=PLACEMENT_MAX_X);
            let y = rng.gen_range(PLACEMENT_MIN..=PLACEMENT_MAX_Y);
            let candidate = Rect::new(x, y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE);

            if !self.occupied(&candidate) {
                self.add_collectible(x, y);
                spawned += 1;
            }
            attempts += 1;
        }

        if spawned < count {
            debug!(room = self.id, requested = count, spawned, "collectible placement ran out of attempts");
        }
        spawned
    }
}
