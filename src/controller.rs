//! Room-based game controller shared by the explorer, adventure and hybrid
//! games.
//!
//! One `update` call is one frame: the message timer ticks for the frame
//! already drawn, clicks are dispatched, then the player
//! moves against the current room's walls, doors are checked, and finally
//! collectibles are picked up.  Drawing lives in `render` and never mutates
//! the controller.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::entities::{
    Inventory, Message, ObjectKind, Player, RoomId, COLLECTIBLE_SCORE, MESSAGE_TICKS,
};
use crate::error::{GameError, Result};
use crate::geometry::distance;
use crate::movement::{step_player, DirectionKeys};
use crate::room::Room;

/// Distance from the player's center within which a key unlocks a barrier.
pub const UNLOCK_RADIUS: f64 = 80.0;

// ── Per-game rules ────────────────────────────────────────────────────────────

/// Where the player has to be for a key to unlock a barrier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnlockRule {
    /// Any locked barrier in the current room.
    Anywhere,
    /// Only barriers whose center is strictly closer than the radius.
    WithinRadius(f64),
}

/// The knobs that differ between the three room-based games.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomGameRules {
    pub unlock_rule: UnlockRule,
    /// Score for opening a container.  Zero means no bonus.
    pub container_bonus: u32,
    /// "the" or "a" in the pickup message.
    pub pickup_article: &'static str,
    /// Show a message on room change and collectible pickup.
    pub announce: bool,
    /// Draw the inventory bar and accept slot clicks.
    pub has_inventory: bool,
    /// Doors drawn as plain dark openings instead of framed doorways.
    pub dark_doorways: bool,
    pub unlocked_door_text: &'static str,
    pub unlock_text: &'static str,
    pub unlocked_description: &'static str,
}

impl RoomGameRules {
    pub fn explorer() -> Self {
        RoomGameRules {
            unlock_rule: UnlockRule::WithinRadius(UNLOCK_RADIUS),
            container_bonus: 0,
            pickup_article: "a",
            announce: false,
            has_inventory: false,
            dark_doorways: true,
            unlocked_door_text: "The door is now unlocked!",
            unlock_text: "You unlocked the door!",
            unlocked_description: "An unlocked door.",
        }
    }

    pub fn adventure() -> Self {
        RoomGameRules {
            unlock_rule: UnlockRule::Anywhere,
            container_bonus: 0,
            pickup_article: "the",
            announce: false,
            has_inventory: true,
            dark_doorways: false,
            unlocked_door_text: "You opened the door! Victory!",
            unlock_text: "You unlocked the door with the key!",
            unlocked_description: "An unlocked door. Click to open!",
        }
    }

    pub fn hybrid() -> Self {
        RoomGameRules {
            unlock_rule: UnlockRule::WithinRadius(UNLOCK_RADIUS),
            container_bonus: 50,
            pickup_article: "a",
            announce: true,
            has_inventory: true,
            dark_doorways: false,
            unlocked_door_text: "The door is now unlocked!",
            unlock_text: "You unlocked the door!",
            unlocked_description: "An unlocked door.",
        }
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct RoomGame {
    pub rooms: HashMap<RoomId, Room>,
    pub current_room_id: RoomId,
    /// Absent in the click-only adventure scene.
    pub player: Option<Player>,
    pub inventory: Inventory,
    pub score: u32,
    pub message: Message,
    pub rules: RoomGameRules,
    /// Frames advanced so far.  Every frame but the first starts after a draw.
    frames: u64,
}

impl RoomGame {
    pub fn new(
        rooms: Vec<Room>,
        start_room: RoomId,
        player: Option<Player>,
        rules: RoomGameRules,
    ) -> Self {
        RoomGame {
            rooms: rooms.into_iter().map(|r| (r.id, r)).collect(),
            current_room_id: start_room,
            player,
            inventory: Inventory::new(),
            score: 0,
            message: Message::default(),
            rules,
            frames: 0,
        }
    }

    pub fn with_message(mut self, text: &str, ticks: u32) -> Self {
        self.message = Message::new(text, ticks);
        self
    }

    pub fn current_room(&self) -> Result<&Room> {
        self.rooms
            .get(&self.current_room_id)
            .ok_or(GameError::UnknownRoom(self.current_room_id))
    }

    fn current_room_mut(&mut self) -> Result<&mut Room> {
        let id = self.current_room_id;
        self.rooms.get_mut(&id).ok_or(GameError::UnknownRoom(id))
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.message = Message::new(text, MESSAGE_TICKS);
    }

    /// Advance one frame.
    pub fn update(&mut self, keys: DirectionKeys, clicks: &[(i32, i32)]) -> Result<()> {
        // The previous frame has been drawn, so its message used one tick.
        if self.frames > 0 {
            self.message.timer.tick();
        }
        self.frames += 1;

        for &(px, py) in clicks {
            self.handle_click(px, py)?;
        }

        if self.player.is_some() {
            self.move_player(keys)?;
            self.check_door_transitions()?;
            self.collect_collectibles()?;
        }
        Ok(())
    }

    pub fn move_player(&mut self, keys: DirectionKeys) -> Result<()> {
        let Some(player) = self.player.as_ref() else {
            return Ok(());
        };
        let moved = step_player(player, keys, &self.current_room()?.walls);
        self.player = Some(moved);
        Ok(())
    }

    /// Take the first door the player overlaps, if any.  At most one
    /// transition happens per call.
    pub fn check_door_transitions(&mut self) -> Result<Option<RoomId>> {
        let Some(player) = self.player.as_ref() else {
            return Ok(None);
        };
        let player_rect = player.rect();

        let Some(door) = self
            .current_room()?
            .doors
            .iter()
            .find(|d| d.rect.intersects(&player_rect))
            .cloned()
        else {
            return Ok(None);
        };

        if !self.rooms.contains_key(&door.target_room_id) {
            return Err(GameError::UnknownRoom(door.target_room_id));
        }

        info!(from = self.current_room_id, to = door.target_room_id, "room transition");
        self.current_room_id = door.target_room_id;
        if let Some(player) = self.player.as_mut() {
            player.x = door.spawn_x;
            player.y = door.spawn_y;
        }
        if self.rules.announce {
            self.show_message(format!("Entered Room {}", self.current_room_id));
        }
        Ok(Some(door.target_room_id))
    }

    /// Remove every collectible the player overlaps.  Returns how many were
    /// collected this frame.
    pub fn collect_collectibles(&mut self) -> Result<usize> {
        let Some(player_rect) = self.player.as_ref().map(Player::rect) else {
            return Ok(0);
        };

        let room = self.current_room_mut()?;
        let before = room.collectibles.len();
        room.collectibles.retain(|c| !c.rect.intersects(&player_rect));
        let collected = before - room.collectibles.len();

        if collected > 0 {
            self.score += collected as u32 * COLLECTIBLE_SCORE;
            debug!(collected, score = self.score, "collectibles picked up");
            if self.rules.announce {
                self.show_message(format!("Collected gem! +{} points", COLLECTIBLE_SCORE));
            }
        }
        Ok(collected)
    }

    // ── Point-and-click ───────────────────────────────────────────────────────

    /// Inventory slots take priority over scene objects.  Only the first
    /// matching object is interacted with.
    pub fn handle_click(&mut self, px: i32, py: i32) -> Result<()> {
        if let Some(slot) = self.inventory.slot_at(px, py) {
            return self.use_item(slot);
        }

        let hit = self
            .current_room()?
            .objects
            .iter()
            .position(|o| o.is_clicked(px, py));
        if let Some(index) = hit {
            self.interact_with_object(index)?;
        }
        Ok(())
    }

    pub fn interact_with_object(&mut self, index: usize) -> Result<()> {
        let article = self.rules.pickup_article;
        let unlocked_door_text = self.rules.unlocked_door_text;
        let bonus = self.rules.container_bonus;

        let room = self.current_room_mut()?;
        let Some(object) = room.objects.get_mut(index) else {
            return Ok(());
        };

        let mut picked_up = None;
        let mut opened_now = false;
        let text = match &mut object.kind {
            ObjectKind::Pickup { item } => {
                if !object.visible {
                    return Ok(());
                }
                object.visible = false;
                picked_up = Some(item.clone());
                format!("You picked up {} {}!", article, item)
            }
            ObjectKind::LockedBarrier { locked: true } => {
                "The door is locked. You need a key!".to_string()
            }
            ObjectKind::LockedBarrier { locked: false } => unlocked_door_text.to_string(),
            ObjectKind::Container { opened } => {
                if *opened {
                    "The chest is already open.".to_string()
                } else {
                    *opened = true;
                    opened_now = true;
                    if bonus > 0 {
                        format!("You opened the chest! +{} points!", bonus)
                    } else {
                        "You opened the chest! There's a shiny gem inside!".to_string()
                    }
                }
            }
            ObjectKind::PlainDoor => object.description.clone(),
        };
        let name = object.name.clone();

        if let Some(item) = picked_up {
            info!(%item, "picked up");
            self.inventory.push(item);
        }
        if opened_now {
            info!(object = %name, bonus, "container opened");
            self.score += bonus;
        }
        self.show_message(text);
        Ok(())
    }

    /// Use the item in inventory slot `slot`.  Only keys do anything; a
    /// failed use leaves the inventory untouched.
    pub fn use_item(&mut self, slot: usize) -> Result<()> {
        let Some(item) = self.inventory.items().get(slot).cloned() else {
            return Ok(());
        };

        if item != "key" {
            self.show_message(format!("You can't use the {} here.", item));
            return Ok(());
        }

        let rule = self.rules.unlock_rule;
        let player_center = self.player.as_ref().map(Player::center);
        let unlocked_description = self.rules.unlocked_description;

        let room = self.current_room_mut()?;
        let target = room.objects.iter().position(|o| {
            o.is_locked_barrier()
                && match (rule, player_center) {
                    (UnlockRule::Anywhere, _) => true,
                    (UnlockRule::WithinRadius(radius), Some(center)) => {
                        distance(center, o.rect.center()) < radius
                    }
                    (UnlockRule::WithinRadius(_), None) => false,
                }
        });

        match target {
            Some(index) => {
                let barrier = &mut room.objects[index];
                barrier.kind = ObjectKind::LockedBarrier { locked: false };
                barrier.description = unlocked_description.to_string();
                self.inventory.remove_first(&item);
                info!(room = self.current_room_id, "barrier unlocked");
                self.show_message(self.rules.unlock_text);
            }
            None => match rule {
                UnlockRule::WithinRadius(_) => {
                    self.show_message("No locked doors nearby to use the key on!")
                }
                UnlockRule::Anywhere => self.show_message(format!("You can't use the {} here.", item)),
            },
        }
        Ok(())
    }
}
