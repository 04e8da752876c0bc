use room_games::entities::*;
use room_games::geometry::Rect;

// ── Inventory ─────────────────────────────────────────────────────────────────

fn make_inventory(items: &[&str]) -> Inventory {
    let mut inv = Inventory::new();
    for item in items {
        inv.push(*item);
    }
    inv
}

#[test]
fn duplicates_are_separate_entries() {
    let inv = make_inventory(&["key", "key"]);
    assert_eq!(inv.len(), 2);
}

#[test]
fn remove_first_takes_one_entry() {
    let mut inv = make_inventory(&["coin", "key", "coin", "key"]);
    assert!(inv.remove_first("key"));
    assert_eq!(inv.items(), ["coin", "coin", "key"].map(String::from));
    assert!(!inv.remove_first("map"));
    assert_eq!(inv.len(), 3);
}

#[test]
fn slots_are_laid_out_left_to_right() {
    assert_eq!(Inventory::slot_rect(0), Rect::new(10, 540, 35, 35));
    assert_eq!(Inventory::slot_rect(2), Rect::new(90, 540, 35, 35));
}

#[test]
fn slot_at_only_reports_occupied_slots() {
    let inv = make_inventory(&["key", "coin"]);
    assert_eq!(inv.slot_at(10, 540), Some(0));
    assert_eq!(inv.slot_at(60, 560), Some(1));
    assert_eq!(inv.slot_at(100, 560), None); // slot 2, empty
    assert_eq!(inv.slot_at(47, 560), None); // gap between slots
    assert_eq!(inv.slot_at(45, 540), None); // right edge is exclusive
}

// ── Objects ───────────────────────────────────────────────────────────────────

#[test]
fn clicks_need_visible_interactive_object() {
    let mut key = InteractiveObject::key(Rect::new(150, 300, 20, 12));
    assert!(key.is_clicked(150, 300));
    assert!(!key.is_clicked(170, 300));

    key.visible = false;
    assert!(!key.is_clicked(155, 305));
    key.visible = true;
    key.interactive = false;
    assert!(!key.is_clicked(155, 305));
}

#[test]
fn only_locked_barriers_count_as_locked() {
    let mut door = InteractiveObject::locked_door(Rect::new(0, 0, 10, 10));
    assert!(door.is_locked_barrier());
    door.kind = ObjectKind::LockedBarrier { locked: false };
    assert!(!door.is_locked_barrier());
    assert!(!InteractiveObject::chest(Rect::new(0, 0, 10, 10)).is_locked_barrier());
}

// ── Player and messages ───────────────────────────────────────────────────────

#[test]
fn player_is_a_fixed_square() {
    let p = Player::new(100, 200, 3);
    assert_eq!(p.rect(), Rect::new(100, 200, PLAYER_SIZE, PLAYER_SIZE));
    assert_eq!(p.center(), (112, 212));
}

#[test]
fn message_with_zero_ticks_is_hidden() {
    assert!(!Message::new("hi", 0).is_showing());
    assert!(Message::new("hi", 1).is_showing());
    assert!(!Message::default().is_showing());
}
