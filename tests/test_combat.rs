use rand::rngs::StdRng;
use rand::SeedableRng;

use room_games::combat::*;
use room_games::geometry::distance;
use room_games::movement::DirectionKeys;
use room_games::timer::Countdown;

const NONE: DirectionKeys = DirectionKeys { left: false, right: false, up: false, down: false };
const LEFT: DirectionKeys = DirectionKeys { left: true, right: false, up: false, down: false };
const RIGHT: DirectionKeys = DirectionKeys { left: false, right: true, up: false, down: false };

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn make_arena(enemies: Vec<Enemy>) -> Arena {
    Arena::with_enemies(Fighter::new(400, 300), enemies)
}

/// An enemy parked in the top-left corner, well away from the fighter.
fn far_enemy() -> Enemy {
    Enemy::new(100, 100, -1, -1)
}

// ── Fighter ───────────────────────────────────────────────────────────────────

#[test]
fn fighter_stays_on_screen() {
    let mut f = Fighter::new(22, 300);
    f.move_by(LEFT);
    assert_eq!(f.x, 20);

    let mut f = Fighter::new(778, 300);
    f.move_by(RIGHT);
    assert_eq!(f.x, 780);
}

#[test]
fn attack_respects_cooldown() {
    let mut f = Fighter::new(400, 300);
    assert!(f.attack());
    assert_eq!(f.attack_cooldown.remaining(), ATTACK_COOLDOWN);
    assert!(f.is_attacking());
    assert!(!f.attack());
}

#[test]
fn attack_window_and_cooldown_over_frames() {
    let mut arena = make_arena(vec![far_enemy()]);
    arena.update(NONE, true);
    assert!(arena.fighter.is_attacking()); // 29 left

    for _ in 0..4 {
        arena.update(NONE, false);
    }
    assert_eq!(arena.fighter.attack_cooldown.remaining(), 25);
    assert!(!arena.fighter.is_attacking());

    arena.update(NONE, true); // still cooling down
    assert_eq!(arena.fighter.attack_cooldown.remaining(), 24);

    for _ in 0..24 {
        arena.update(NONE, false);
    }
    assert!(!arena.fighter.attack_cooldown.is_running());
    arena.update(NONE, true);
    assert!(arena.fighter.is_attacking());
    assert_eq!(arena.status, ArenaStatus::Playing);
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[test]
fn enemy_bounces_off_right_edge() {
    let mut e = Enemy::new(784, 300, 1, 1);
    e.update();
    assert_eq!(e.x, 785);
    assert_eq!(e.dir_x, -1);
    assert_eq!(e.y, 302);
    assert_eq!(e.dir_y, 1);
}

#[test]
fn enemy_bounces_off_top_left_corner() {
    let mut e = Enemy::new(16, 16, -1, -1);
    e.update();
    assert_eq!((e.x, e.y), (15, 15));
    assert_eq!((e.dir_x, e.dir_y), (1, 1));
}

#[test]
fn damage_only_affects_living_enemies() {
    let mut e = Enemy::new(100, 100, 1, 1);
    e.take_damage();
    assert_eq!(e.state, EnemyState::Dying(Countdown::new(DEATH_TICKS)));
    e.update();
    e.take_damage();
    assert_eq!(e.state, EnemyState::Dying(Countdown::new(DEATH_TICKS - 1)));
}

#[test]
fn dying_enemy_does_not_move() {
    let mut e = Enemy::new(100, 100, 1, 1);
    e.take_damage();
    e.update();
    assert_eq!((e.x, e.y), (100, 100));
}

// ── Collisions and outcome ────────────────────────────────────────────────────

#[test]
fn attack_hit_then_death_effect() {
    let mut arena = make_arena(vec![Enemy::new(430, 300, 1, 0)]);
    arena.fighter.attack_cooldown = Countdown::new(28);

    arena.check_collisions();
    assert_eq!(arena.enemies[0].state, EnemyState::Dying(Countdown::new(DEATH_TICKS)));
    assert_eq!(arena.fighter.enemies_defeated, 1);
    assert_eq!(arena.status, ArenaStatus::Won);

    let enemy = &mut arena.enemies[0];
    for _ in 0..DEATH_TICKS - 1 {
        enemy.update();
    }
    assert!(matches!(enemy.state, EnemyState::Dying(_)));
    enemy.update();
    assert_eq!(enemy.state, EnemyState::Dead);
}

#[test]
fn range_edge_counts_as_hit() {
    let mut arena = make_arena(vec![Enemy::new(440, 300, 1, 0), far_enemy()]);
    arena.fighter.attack_cooldown = Countdown::new(28);
    arena.check_collisions();
    assert!(!arena.enemies[0].is_alive());
    assert!(arena.enemies[1].is_alive());
    assert_eq!(arena.status, ArenaStatus::Playing);
    assert_eq!(arena.enemies_left(), 1);
}

#[test]
fn no_hit_outside_active_window() {
    let mut arena = make_arena(vec![Enemy::new(440, 300, 1, 0)]);
    arena.fighter.attack_cooldown = Countdown::new(ATTACK_ACTIVE_ABOVE);
    arena.check_collisions();
    assert!(arena.enemies[0].is_alive());
}

#[test]
fn attack_through_update_wins_round() {
    // The enemy steps to x = 432 before the hit check.
    let mut arena = make_arena(vec![Enemy::new(430, 300, 1, 0)]);
    arena.update(NONE, true);
    assert_eq!(arena.status, ArenaStatus::Won);
    assert_eq!(arena.fighter.enemies_defeated, 1);
}

#[test]
fn touching_living_enemy_loses() {
    let mut arena = make_arena(vec![Enemy::new(425, 300, 1, 0)]);
    arena.check_collisions();
    assert_eq!(arena.status, ArenaStatus::Lost);
}

#[test]
fn dying_enemies_never_hurt() {
    let mut dying = Enemy::new(400, 300, 1, 0);
    dying.state = EnemyState::Dying(Countdown::new(10));
    let mut arena = make_arena(vec![dying, far_enemy()]);
    arena.check_collisions();
    assert_eq!(arena.status, ArenaStatus::Playing);
}

#[test]
fn finished_round_is_frozen() {
    let mut arena = make_arena(vec![Enemy::new(425, 300, 1, 0)]);
    arena.check_collisions();
    let frozen = arena.clone();

    arena.update(RIGHT, true);
    assert_eq!(arena.fighter, frozen.fighter);
    assert_eq!(arena.enemies, frozen.enemies);
    assert_eq!(arena.status, ArenaStatus::Lost);
}

// ── Spawning and restart ──────────────────────────────────────────────────────

#[test]
fn spawned_enemies_keep_clear_of_fighter() {
    for seed in 0..20 {
        let arena = Arena::new(&mut seeded_rng(seed));
        assert_eq!(arena.enemies.len(), ENEMY_COUNT);
        for e in &arena.enemies {
            assert!(distance(e.center(), arena.fighter.center()) >= 100.0);
            assert!((50..=750).contains(&e.x) && (50..=550).contains(&e.y));
            assert!(e.dir_x.abs() == 1 && e.dir_y.abs() == 1);
            assert!(e.is_alive());
        }
    }
}

#[test]
fn same_seed_same_round() {
    let a = Arena::new(&mut seeded_rng(7));
    let b = Arena::new(&mut seeded_rng(7));
    assert_eq!(a.enemies, b.enemies);
}

#[test]
fn restart_only_after_round_ends() {
    let mut rng = seeded_rng(3);
    let mut arena = make_arena(vec![far_enemy()]);
    assert!(!arena.restart(&mut rng));
    assert_eq!(arena.enemies.len(), 1);

    arena.status = ArenaStatus::Lost;
    arena.fighter.enemies_defeated = 5;
    assert!(arena.restart(&mut rng));
    assert_eq!(arena.status, ArenaStatus::Playing);
    assert_eq!(arena.enemies.len(), ENEMY_COUNT);
    assert_eq!(arena.fighter, Fighter::new(400, 300));
}
