use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use room_games::input::*;

fn make_input() -> InputState {
    let mut input = InputState::new(8, (80, 60));
    input.begin_frame();
    input
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
}

fn click(column: u16, row: u16, kind: MouseEventKind) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ── Held keys ─────────────────────────────────────────────────────────────────

#[test]
fn key_stays_held_for_hold_window() {
    let mut input = make_input();
    input.handle_event(&press(KeyCode::Right));
    assert!(input.take_frame().keys.right);

    for _ in 0..8 {
        input.begin_frame();
    }
    assert!(input.is_held(KeyCode::Right));
    assert!(input.take_frame().keys.right);

    input.begin_frame();
    assert!(!input.is_held(KeyCode::Right));
    assert!(!input.take_frame().keys.right);
}

#[test]
fn repeat_refreshes_hold() {
    let mut input = make_input();
    input.handle_event(&press(KeyCode::Up));
    for _ in 0..6 {
        input.begin_frame();
    }
    input.handle_event(&Event::Key(KeyEvent::new_with_kind(
        KeyCode::Up,
        KeyModifiers::NONE,
        KeyEventKind::Repeat,
    )));
    for _ in 0..8 {
        input.begin_frame();
    }
    assert!(input.take_frame().keys.up);
}

#[test]
fn release_drops_key_at_once() {
    let mut input = make_input();
    input.handle_event(&press(KeyCode::Char('a')));
    input.handle_event(&release(KeyCode::Char('a')));
    assert!(!input.take_frame().keys.left);
}

#[test]
fn wasd_in_either_case_and_arrows_combine() {
    let mut input = make_input();
    input.handle_event(&press(KeyCode::Char('W')));
    input.handle_event(&press(KeyCode::Char('d')));
    input.handle_event(&press(KeyCode::Down));
    let keys = input.take_frame().keys;
    assert!(keys.up && keys.right && keys.down);
    assert!(!keys.left);
}

// ── One-shot events ───────────────────────────────────────────────────────────

#[test]
fn quit_keys() {
    for event in [
        press(KeyCode::Esc),
        press(KeyCode::Char('q')),
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    ] {
        let mut input = make_input();
        input.handle_event(&event);
        assert!(input.take_frame().quit, "{:?}", event);
    }

    let mut input = make_input();
    input.handle_event(&press(KeyCode::Char('c')));
    assert!(!input.take_frame().quit);
}

#[test]
fn attack_and_restart_last_one_frame() {
    let mut input = make_input();
    input.handle_event(&press(KeyCode::Char(' ')));
    input.handle_event(&press(KeyCode::Char('R')));
    let frame = input.take_frame();
    assert!(frame.attack && frame.restart);

    input.begin_frame();
    let frame = input.take_frame();
    assert!(!frame.attack && !frame.restart);
}

// ── Mouse ─────────────────────────────────────────────────────────────────────

#[test]
fn left_click_maps_to_cell_center() {
    let mut input = make_input();
    input.handle_event(&click(40, 30, MouseEventKind::Down(MouseButton::Left)));
    input.handle_event(&click(0, 0, MouseEventKind::Down(MouseButton::Left)));
    assert_eq!(input.take_frame().clicks, vec![(405, 305), (5, 5)]);
    assert!(input.take_frame().clicks.is_empty());
}

#[test]
fn other_mouse_events_ignored() {
    let mut input = make_input();
    input.handle_event(&click(10, 10, MouseEventKind::Down(MouseButton::Right)));
    input.handle_event(&click(10, 10, MouseEventKind::Up(MouseButton::Left)));
    input.handle_event(&click(10, 10, MouseEventKind::Moved));
    assert!(input.take_frame().clicks.is_empty());
}

#[test]
fn resize_changes_click_mapping() {
    let mut input = make_input();
    input.handle_event(&Event::Resize(40, 30));
    input.handle_event(&click(20, 15, MouseEventKind::Down(MouseButton::Left)));
    assert_eq!(input.take_frame().clicks, vec![(410, 310)]);
}

#[test]
fn cell_mapping_covers_whole_scene() {
    assert_eq!(cell_to_scene(0, 0, (1, 1)), (400, 300));
    assert_eq!(cell_to_scene(79, 59, (80, 60)), (795, 595));
    // A zero-sized grid does not divide by zero.
    assert_eq!(cell_to_scene(0, 0, (0, 0)), (400, 300));
}
