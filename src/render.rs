//! Draw passes for every game.
//!
//! The renderer only issues `Surface` calls in back-to-front order and never
//! touches game state.  The surface decides how a scene-space primitive
//! ends up on screen.

use std::io;

use crate::combat::{Arena, ArenaStatus, Enemy, EnemyState, Fighter, DEATH_TICKS};
use crate::controller::RoomGame;
use crate::entities::{
    Collectible, Door, InteractiveObject, Inventory, ObjectKind, Player, Rgb, Wall,
};
use crate::error::Result;
use crate::geometry::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::room::Room;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const GRAY: Rgb = Rgb(128, 128, 128);
pub const BROWN: Rgb = Rgb(139, 69, 19);
const DARK_BROWN: Rgb = Rgb(100, 50, 0);
const DOOR_FRAME: Rgb = Rgb(50, 50, 50);
const DARK_GREEN: Rgb = Rgb(0, 128, 0);
const ENEMY_RED: Rgb = Rgb(200, 0, 0);

/// The rendering collaborator.  Coordinates are scene coordinates.
pub trait Surface {
    fn fill_background(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn outline_rect(&mut self, rect: Rect, color: Rgb);
    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Rgb);
    fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb);
    fn draw_text(&mut self, pos: (i32, i32), text: &str, color: Rgb);
    /// Finish the frame.
    fn present(&mut self) -> io::Result<()>;
}

// ── Room games ────────────────────────────────────────────────────────────────

pub fn render_room_game<S: Surface>(surface: &mut S, game: &RoomGame) -> Result<()> {
    let room = game.current_room()?;
    draw_room(surface, room, game.rules.dark_doorways);

    if let Some(player) = &game.player {
        draw_player(surface, player);
    }
    if game.rules.has_inventory {
        let bar_width = if game.player.is_some() { 200 } else { SCREEN_WIDTH - 10 };
        draw_inventory(surface, &game.inventory, bar_width);
    }
    draw_message(surface, game);
    if game.player.is_some() {
        draw_room_hud(surface, game);
    } else {
        draw_adventure_instructions(surface);
    }

    surface.present()?;
    Ok(())
}

/// Background, walls, doors, objects, collectibles.
pub fn draw_room<S: Surface>(surface: &mut S, room: &Room, dark_doorways: bool) {
    surface.fill_background(room.background);
    if room.walls.is_empty() && room.doors.is_empty() {
        // Static scenes get a back wall and a floor instead.
        surface.fill_rect(Rect::new(0, 0, SCREEN_WIDTH, 500), Rgb(220, 220, 220));
        surface.fill_rect(Rect::new(0, 500, SCREEN_WIDTH, 100), Rgb(200, 200, 200));
    }

    for wall in &room.walls {
        draw_wall(surface, wall);
    }
    for door in &room.doors {
        draw_door(surface, door, dark_doorways);
    }
    for object in room.objects.iter().filter(|o| o.visible) {
        draw_object(surface, object);
    }
    for collectible in &room.collectibles {
        draw_collectible(surface, collectible);
    }
}

fn draw_wall<S: Surface>(surface: &mut S, wall: &Wall) {
    surface.fill_rect(wall.rect, BROWN);
}

fn draw_door<S: Surface>(surface: &mut S, door: &Door, dark_doorway: bool) {
    let r = door.rect;
    if dark_doorway {
        surface.fill_rect(r, BLACK);
        return;
    }
    surface.fill_rect(r, DOOR_FRAME);
    surface.fill_rect(Rect::new(r.x + 2, r.y + 2, r.width - 4, r.height - 4), BLACK);
}

fn draw_object<S: Surface>(surface: &mut S, object: &InteractiveObject) {
    let r = object.rect;
    match &object.kind {
        ObjectKind::Pickup { .. } => {
            // Bow plus teeth.
            surface.fill_rect(r, YELLOW);
            let teeth_x = r.x + r.width * 2 / 3;
            surface.fill_rect(Rect::new(teeth_x, r.y + r.height / 3, r.width / 4, r.height / 2), YELLOW);
        }
        ObjectKind::Container { opened } => {
            surface.fill_rect(r, BROWN);
            let lid = r.height * 3 / 8;
            if *opened {
                surface.fill_polygon(
                    &[
                        (r.x, r.y),
                        (r.right(), r.y - lid - 3),
                        (r.right(), r.y - 3),
                        (r.x, r.y + lid),
                    ],
                    DARK_BROWN,
                );
            } else {
                surface.fill_rect(Rect::new(r.x, r.y, r.width, lid), DARK_BROWN);
            }
        }
        ObjectKind::LockedBarrier { .. } | ObjectKind::PlainDoor => {
            surface.fill_rect(r, BROWN);
            let handle = (r.right() - r.width / 5, r.y + r.height / 2);
            surface.fill_circle(handle, 3, YELLOW);
        }
    }
}

fn draw_collectible<S: Surface>(surface: &mut S, collectible: &Collectible) {
    let r = collectible.rect;
    surface.fill_rect(r, YELLOW);
    surface.fill_rect(Rect::new(r.x + 2, r.y + 2, r.width - 4, r.height - 4), RED);
}

fn draw_player<S: Surface>(surface: &mut S, player: &Player) {
    surface.fill_rect(player.rect(), BLUE);
    surface.fill_circle((player.x + 6, player.y + 8), 2, WHITE);
    surface.fill_circle((player.x + 19, player.y + 8), 2, WHITE);
}

fn draw_inventory<S: Surface>(surface: &mut S, inventory: &Inventory, bar_width: i32) {
    let bar = Rect::new(5, SCREEN_HEIGHT - 65, bar_width, 60);
    surface.fill_rect(bar, GRAY);
    surface.outline_rect(bar, BLACK);
    surface.draw_text((10, SCREEN_HEIGHT - 62), "Inventory:", BLACK);

    for (i, item) in inventory.items().iter().enumerate() {
        let slot = Inventory::slot_rect(i);
        surface.fill_rect(slot, WHITE);
        surface.outline_rect(slot, BLACK);
        if item == "key" {
            surface.fill_rect(Rect::new(slot.x + 8, slot.y + 15, 12, 6), YELLOW);
            surface.fill_rect(Rect::new(slot.x + 18, slot.y + 17, 3, 2), YELLOW);
        } else {
            surface.draw_text((slot.x + 2, slot.y + 12), item, BLACK);
        }
    }
}

fn draw_message<S: Surface>(surface: &mut S, game: &RoomGame) {
    if !game.message.is_showing() {
        return;
    }
    let text = &game.message.text;
    // Roughly 9 scene units per glyph keeps the box around the text.
    let width = text.chars().count() as i32 * 9 + 20;
    let bg = Rect::new(SCREEN_WIDTH / 2 - width / 2, 5, width, 30);
    let (fill, ink) = if game.player.is_some() { (BLACK, WHITE) } else { (WHITE, BLACK) };
    surface.fill_rect(bg, fill);
    surface.outline_rect(bg, ink);
    surface.draw_text((bg.x + 10, bg.y + 10), text, ink);
}

fn draw_room_hud<S: Surface>(surface: &mut S, game: &RoomGame) {
    if game.rules.has_inventory {
        surface.draw_text((SCREEN_WIDTH - 120, 10), &format!("Score: {}", game.score), WHITE);
        surface.draw_text((SCREEN_WIDTH - 80, 35), &format!("Room {}", game.current_room_id), WHITE);
        return;
    }

    surface.draw_text((10, 10), &format!("Score: {}", game.score), WHITE);
    surface.draw_text((10, 50), &format!("Room: {}", game.current_room_id), WHITE);
    surface.draw_text(
        (10, SCREEN_HEIGHT - 30),
        "Use WASD/Arrows to move. Walk into dark doorways to change rooms!",
        WHITE,
    );
}

fn draw_adventure_instructions<S: Surface>(surface: &mut S) {
    let lines = [
        "Instructions:",
        "- Click objects to examine/interact",
        "- Click inventory items to use them",
        "- Find the key to unlock the door!",
    ];
    for (i, line) in lines.iter().enumerate() {
        let color = if i == 0 { BLACK } else { GRAY };
        surface.draw_text((10, 80 + i as i32 * 20), line, color);
    }
}

// ── Combat arena ──────────────────────────────────────────────────────────────

pub fn render_arena<S: Surface>(surface: &mut S, arena: &Arena) -> io::Result<()> {
    surface.fill_background(DARK_GREEN);

    for enemy in &arena.enemies {
        draw_enemy(surface, enemy);
    }
    draw_fighter(surface, &arena.fighter);
    draw_arena_hud(surface, arena);

    if arena.is_over() {
        draw_arena_over(surface, arena);
    }

    surface.present()
}

fn draw_enemy<S: Surface>(surface: &mut S, enemy: &Enemy) {
    match enemy.state {
        EnemyState::Dead => {}
        EnemyState::Dying(timer) => {
            let radius = (f64::from(enemy.size) * timer.fraction_of(DEATH_TICKS)).round() as i32;
            if radius > 0 {
                surface.fill_circle(enemy.center(), radius, ENEMY_RED);
            }
        }
        EnemyState::Alive => {
            let (x, y) = enemy.center();
            surface.fill_circle((x, y), enemy.size, ENEMY_RED);
            surface.fill_circle((x - 5, y - 5), 3, WHITE);
            surface.fill_circle((x + 5, y - 5), 3, WHITE);
            surface.fill_circle((x - 5, y - 5), 1, BLACK);
            surface.fill_circle((x + 5, y - 5), 1, BLACK);
        }
    }
}

fn draw_fighter<S: Surface>(surface: &mut S, fighter: &Fighter) {
    let attacking = fighter.is_attacking();
    if attacking {
        // Range ring first so the body stays on top.
        surface.fill_circle(fighter.center(), fighter.attack_range as i32, Rgb(120, 0, 0));
    }
    let color = if attacking { RED } else { BLUE };
    surface.fill_circle(fighter.center(), fighter.size, color);
    surface.fill_circle(fighter.center(), 3, WHITE);
}

fn draw_arena_hud<S: Surface>(surface: &mut S, arena: &Arena) {
    surface.draw_text(
        (10, 10),
        &format!("Enemies Defeated: {}", arena.fighter.enemies_defeated),
        WHITE,
    );
    surface.draw_text((10, 50), &format!("Enemies left: {}", arena.enemies_left()), WHITE);
    if arena.fighter.attack_cooldown.is_running() {
        surface.draw_text((10, 80), "Attacking!", RED);
    }

    let lines = [
        "Use WASD or Arrow keys to move",
        "Press SPACE to attack nearby enemies",
        "Defeat all enemies to win!",
    ];
    for (i, line) in lines.iter().enumerate() {
        surface.draw_text((10, SCREEN_HEIGHT - 80 + i as i32 * 20), line, GRAY);
    }
}

fn draw_arena_over<S: Surface>(surface: &mut S, arena: &Arena) {
    let (title, color) = match arena.status {
        ArenaStatus::Won => ("YOU WIN!", GREEN),
        _ => ("GAME OVER", RED),
    };
    let score = format!("Enemies Defeated: {}", arena.fighter.enemies_defeated);
    let hint = "Press R to restart or ESC to quit";

    let box_rect = Rect::new(SCREEN_WIDTH / 2 - 180, SCREEN_HEIGHT / 2 - 80, 360, 160);
    surface.fill_rect(box_rect, BLACK);
    surface.outline_rect(box_rect, WHITE);

    let cx = SCREEN_WIDTH / 2;
    let cy = SCREEN_HEIGHT / 2;
    for (text, y, ink) in [(title, cy - 50, color), (score.as_str(), cy, WHITE), (hint, cy + 50, WHITE)] {
        let half = text.chars().count() as i32 * 9 / 2;
        surface.draw_text((cx - half, y), text, ink);
    }
}
