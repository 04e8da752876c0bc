//! Hand-authored level data for the three room-based games.

use rand::Rng;

use crate::controller::{RoomGame, RoomGameRules};
use crate::entities::{InteractiveObject, Player, Rgb};
use crate::geometry::{Rect, SCREEN_HEIGHT as H, SCREEN_WIDTH as W};
use crate::room::Room;

const WALL: i32 = 20;

pub const DARK_GREEN: Rgb = Rgb(0, 128, 0);
pub const PURPLE: Rgb = Rgb(100, 0, 100);
pub const BROWNISH: Rgb = Rgb(100, 100, 0);

// ── Border layouts ────────────────────────────────────────────────────────────
//
// Every four-room map uses the same skeleton: room 0 opens east to room 1
// and south to room 2, room 1 opens north to room 3.

fn start_room_borders(room: &mut Room) {
    room.add_wall(0, 0, W, WALL);
    room.add_wall(0, H - WALL, 350, WALL);
    room.add_wall(450, H - WALL, W - 450, WALL);
    room.add_wall(0, 0, WALL, H);
    room.add_wall(W - WALL, 0, WALL, 280);
    room.add_wall(W - WALL, 340, WALL, H - 340);
    room.add_door(W - WALL, 280, WALL, 60, 1, 30, 300);
    room.add_door(350, H - WALL, 100, WALL, 2, 400, 50);
}

fn east_room_borders(room: &mut Room) {
    room.add_wall(0, 0, 300, WALL);
    room.add_wall(380, 0, W - 380, WALL);
    room.add_wall(0, H - WALL, W, WALL);
    room.add_wall(0, 0, WALL, 280);
    room.add_wall(0, 340, WALL, H - 340);
    room.add_wall(W - WALL, 0, WALL, H);
    room.add_door(0, 280, WALL, 60, 0, W - 50, 300);
    room.add_door(300, 0, 80, WALL, 3, 350, H - 50);
}

fn south_room_borders(room: &mut Room) {
    room.add_wall(0, 0, 350, WALL);
    room.add_wall(450, 0, W - 450, WALL);
    room.add_wall(0, H - WALL, W, WALL);
    room.add_wall(0, 0, WALL, H);
    room.add_wall(W - WALL, 0, WALL, H);
    room.add_door(350, 0, 100, WALL, 0, 400, H - 50);
}

fn north_room_borders(room: &mut Room) {
    room.add_wall(0, 0, W, WALL);
    room.add_wall(0, H - WALL, 300, WALL);
    room.add_wall(380, H - WALL, W - 380, WALL);
    room.add_wall(0, 0, WALL, H);
    room.add_wall(W - WALL, 0, WALL, H);
    room.add_door(300, H - WALL, 80, WALL, 1, 350, 50);
}

// ── Explorer ──────────────────────────────────────────────────────────────────

pub fn explorer_rooms(rng: &mut impl Rng) -> Vec<Room> {
    let mut room0 = Room::new(0, DARK_GREEN);
    start_room_borders(&mut room0);
    room0.add_wall(200, 200, 80, 80);
    room0.add_wall(500, 100, 60, 120);
    room0.spawn_random_collectibles(3, rng);

    let mut room1 = Room::new(1, Rgb(0, 100, 0));
    east_room_borders(&mut room1);
    room1.add_wall(100, 300, 150, 20);
    room1.add_wall(400, 150, 20, 200);
    room1.add_wall(150, 100, 100, 60);
    room1.spawn_random_collectibles(4, rng);

    let mut room2 = Room::new(2, PURPLE);
    south_room_borders(&mut room2);
    room2.add_wall(300, 200, 200, 20);
    room2.add_wall(100, 350, 120, 80);
    room2.add_wall(600, 300, 80, 100);
    room2.spawn_random_collectibles(5, rng);

    let mut room3 = Room::new(3, BROWNISH);
    north_room_borders(&mut room3);
    room3.add_wall(200, 200, 400, 20);
    room3.add_wall(50, 300, 100, 100);
    room3.add_wall(650, 250, 80, 150);
    room3.spawn_random_collectibles(6, rng);

    vec![room0, room1, room2, room3]
}

pub fn explorer(rng: &mut impl Rng) -> RoomGame {
    RoomGame::new(
        explorer_rooms(rng),
        0,
        Some(Player::new(400, 300, 4)),
        RoomGameRules::explorer(),
    )
}

// ── Hybrid ────────────────────────────────────────────────────────────────────

pub fn hybrid_rooms(rng: &mut impl Rng) -> Vec<Room> {
    let mut room0 = Room::new(0, DARK_GREEN);
    start_room_borders(&mut room0);
    room0.add_wall(200, 150, 60, 60);
    room0.add_wall(500, 100, 40, 80);
    room0.add_object(InteractiveObject::key(Rect::new(150, 300, 20, 12)));
    room0.add_object(InteractiveObject::chest(Rect::new(600, 250, 40, 30)));
    room0.add_object(InteractiveObject::locked_door(Rect::new(350, 180, 60, 80)));
    room0.spawn_random_collectibles(3, rng);

    let mut room1 = Room::new(1, PURPLE);
    east_room_borders(&mut room1);
    room1.add_wall(100, 200, 150, 20);
    room1.add_wall(400, 120, 20, 150);
    room1.add_wall(150, 80, 80, 40);
    room1.add_object(InteractiveObject::key(Rect::new(500, 400, 20, 12)));
    room1.add_object(InteractiveObject::chest(Rect::new(100, 100, 40, 30)));
    room1.spawn_random_collectibles(4, rng);

    let mut room2 = Room::new(2, Rgb(0, 100, 100));
    south_room_borders(&mut room2);
    room2.add_wall(200, 200, 120, 20);
    room2.add_wall(400, 300, 60, 80);
    room2.add_object(InteractiveObject::chest(Rect::new(150, 350, 40, 30)));
    room2.add_object(InteractiveObject::key(Rect::new(650, 150, 20, 12)));
    room2.spawn_random_collectibles(6, rng);

    let mut room3 = Room::new(3, BROWNISH);
    north_room_borders(&mut room3);
    room3.add_wall(150, 150, 200, 20);
    room3.add_wall(450, 200, 20, 100);
    room3.add_object(InteractiveObject::chest(Rect::new(400, 300, 40, 30)));
    room3.add_object(InteractiveObject::locked_door(Rect::new(200, 250, 50, 70)));
    room3.spawn_random_collectibles(5, rng);

    vec![room0, room1, room2, room3]
}

pub fn hybrid(rng: &mut impl Rng) -> RoomGame {
    RoomGame::new(
        hybrid_rooms(rng),
        0,
        Some(Player::new(100, 100, 3)),
        RoomGameRules::hybrid(),
    )
    .with_message("Use WASD/Arrows to move, click objects to interact!", 300)
}

// ── Adventure ─────────────────────────────────────────────────────────────────

/// The single static scene: a locked door, a key and a chest.
pub fn adventure_scene() -> Room {
    let mut scene = Room::new(0, Rgb(255, 255, 255));
    let mut door = InteractiveObject::locked_door(Rect::new(350, 200, 80, 120));
    door.name = "Door".to_string();
    scene.add_object(door);
    scene.add_object(InteractiveObject::key(Rect::new(150, 400, 30, 15)));
    scene.add_object(InteractiveObject::chest(Rect::new(600, 350, 60, 40)));
    scene
}

pub fn adventure() -> RoomGame {
    // The intro text is set but starts with an expired timer, so nothing is
    // shown until the first interaction.
    RoomGame::new(vec![adventure_scene()], 0, None, RoomGameRules::adventure())
        .with_message("Click on objects to interact with them!", 0)
}
