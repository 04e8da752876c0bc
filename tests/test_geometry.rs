use room_games::geometry::*;
use room_games::timer::Countdown;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10))); // right edge
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10))); // bottom edge
    assert!(!a.intersects(&Rect::new(10, 10, 5, 5))); // corner
}

#[test]
fn overlap_on_one_axis_only_is_not_intersection() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(5, 20, 10, 10)));
}

#[test]
fn contained_rect_intersects() {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = Rect::new(40, 40, 5, 5);
    assert!(outer.intersects(&inner));
}

#[test]
fn contains_point_is_half_open() {
    let r = Rect::new(10, 20, 30, 40);
    assert!(r.contains_point(10, 20));
    assert!(r.contains_point(39, 59));
    assert!(!r.contains_point(40, 30));
    assert!(!r.contains_point(20, 60));
    assert!(!r.contains_point(9, 30));
}

#[test]
fn empty_rect_never_intersects() {
    let empty = Rect::new(10, 10, 0, 0);
    let big = Rect::new(0, 0, 100, 100);
    assert!(!empty.intersects(&big));
    assert!(!big.intersects(&empty));
}

#[test]
fn negative_size_clamps_to_zero() {
    let r = Rect::new(5, 5, -3, 7);
    assert_eq!(r.width, 0);
    assert_eq!(r.height, 7);
}

#[test]
fn center_uses_integer_halves() {
    assert_eq!(Rect::new(350, 180, 60, 80).center(), (380, 220));
    assert_eq!(Rect::new(0, 0, 25, 25).center(), (12, 12));
}

#[test]
fn distance_is_euclidean() {
    assert_eq!(distance((0, 0), (3, 4)), 5.0);
    assert_eq!(distance((10, 10), (10, 10)), 0.0);
}

// ── Countdown ─────────────────────────────────────────────────────────────────

#[test]
fn countdown_reports_only_the_expiring_tick() {
    let mut c = Countdown::new(2);
    assert!(!c.tick());
    assert!(c.tick());
    assert!(!c.tick());
    assert_eq!(c.remaining(), 0);
}

#[test]
fn idle_countdown_is_not_running() {
    assert!(!Countdown::idle().is_running());
    assert!(Countdown::new(1).is_running());
}

#[test]
fn countdown_fraction() {
    let c = Countdown::new(10);
    assert_eq!(c.fraction_of(20), 0.5);
    assert_eq!(c.fraction_of(0), 0.0);
}
