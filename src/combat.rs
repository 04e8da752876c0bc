//! Top-down combat arena.
//!
//! Enemies bounce freely around the screen edges; the fighter clears them
//! with a short-range attack.  Touching a living enemy loses the round,
//! clearing all of them wins it.

use rand::Rng;
use tracing::info;

use crate::geometry::{distance, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::movement::DirectionKeys;
use crate::timer::Countdown;

pub const ENEMY_COUNT: usize = 8;
/// Frames between attacks (0.5 s at 60 FPS).
pub const ATTACK_COOLDOWN: u32 = 30;
/// The attack hits while the cooldown is above this value.
pub const ATTACK_ACTIVE_ABOVE: u32 = 25;
/// Frames of the shrinking death effect.
pub const DEATH_TICKS: u32 = 20;
/// Enemies never spawn closer than this to the fighter.
const SPAWN_CLEARANCE: f64 = 100.0;
const SPAWN_MARGIN: i32 = 50;

// ── Fighter ───────────────────────────────────────────────────────────────────

/// Combat player.  `(x, y)` is the center and `size` the half-extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Fighter {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub speed: i32,
    pub attack_range: f64,
    pub attack_cooldown: Countdown,
    pub enemies_defeated: u32,
}

impl Fighter {
    pub fn new(x: i32, y: i32) -> Self {
        Fighter {
            x,
            y,
            size: 20,
            speed: 5,
            attack_range: 40.0,
            attack_cooldown: Countdown::idle(),
            enemies_defeated: 0,
        }
    }

    /// Start an attack unless one is cooling down.
    pub fn attack(&mut self) -> bool {
        if self.attack_cooldown.is_running() {
            return false;
        }
        self.attack_cooldown.restart(ATTACK_COOLDOWN);
        true
    }

    pub fn is_attacking(&self) -> bool {
        self.attack_cooldown.remaining() > ATTACK_ACTIVE_ABOVE
    }

    /// Move by the held keys, keeping the whole body on screen.
    pub fn move_by(&mut self, keys: DirectionKeys) {
        let (dx, dy) = keys.delta(self.speed);
        self.x = (self.x + dx).clamp(self.size, SCREEN_WIDTH - self.size);
        self.y = (self.y + dy).clamp(self.size, SCREEN_HEIGHT - self.size);
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x - self.size, self.y - self.size, self.size * 2, self.size * 2)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    Alive,
    /// Playing the death effect; no longer collidable.
    Dying(Countdown),
    Dead,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub speed: i32,
    /// Either -1 or 1.
    pub dir_x: i32,
    pub dir_y: i32,
    pub state: EnemyState,
}

impl Enemy {
    pub fn new(x: i32, y: i32, dir_x: i32, dir_y: i32) -> Self {
        Enemy {
            x,
            y,
            size: 15,
            speed: 2,
            dir_x,
            dir_y,
            state: EnemyState::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == EnemyState::Alive
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x - self.size, self.y - self.size, self.size * 2, self.size * 2)
    }

    pub fn take_damage(&mut self) {
        if self.is_alive() {
            self.state = EnemyState::Dying(Countdown::new(DEATH_TICKS));
        }
    }

    /// One frame: advance the death effect, or move and bounce.
    pub fn update(&mut self) {
        match &mut self.state {
            EnemyState::Dead => {}
            EnemyState::Dying(timer) => {
                if timer.tick() || !timer.is_running() {
                    self.state = EnemyState::Dead;
                }
            }
            EnemyState::Alive => {
                self.x += self.speed * self.dir_x;
                self.y += self.speed * self.dir_y;

                if self.x <= self.size || self.x >= SCREEN_WIDTH - self.size {
                    self.dir_x = -self.dir_x;
                }
                if self.y <= self.size || self.y >= SCREEN_HEIGHT - self.size {
                    self.dir_y = -self.dir_y;
                }

                self.x = self.x.clamp(self.size, SCREEN_WIDTH - self.size);
                self.y = self.y.clamp(self.size, SCREEN_HEIGHT - self.size);
            }
        }
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaStatus {
    Playing,
    Lost,
    Won,
}

#[derive(Clone, Debug)]
pub struct Arena {
    pub fighter: Fighter,
    pub enemies: Vec<Enemy>,
    pub status: ArenaStatus,
}

impl Arena {
    /// Fresh round with the fighter centered and `ENEMY_COUNT` enemies.
    pub fn new(rng: &mut impl Rng) -> Self {
        let fighter = Fighter::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);
        let enemies = spawn_enemies(&fighter, ENEMY_COUNT, rng);
        Self::with_enemies(fighter, enemies)
    }

    pub fn with_enemies(fighter: Fighter, enemies: Vec<Enemy>) -> Self {
        Arena {
            fighter,
            enemies,
            status: ArenaStatus::Playing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != ArenaStatus::Playing
    }

    pub fn enemies_left(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    /// Advance one frame.  Does nothing once the round is over.
    pub fn update(&mut self, keys: DirectionKeys, attack_pressed: bool) {
        if self.is_over() {
            return;
        }
        if attack_pressed {
            self.fighter.attack();
        }

        self.fighter.attack_cooldown.tick();
        self.fighter.move_by(keys);
        for enemy in &mut self.enemies {
            enemy.update();
        }

        self.check_collisions();
    }

    /// Apply attack damage, then the loss check, then the win check.
    pub fn check_collisions(&mut self) {
        if self.fighter.is_attacking() {
            let center = self.fighter.center();
            let range = self.fighter.attack_range;
            for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
                if distance(center, enemy.center()) <= range {
                    enemy.take_damage();
                    self.fighter.enemies_defeated += 1;
                    info!(defeated = self.fighter.enemies_defeated, "enemy defeated");
                }
            }
        }

        let fighter_rect = self.fighter.rect();
        if self
            .enemies
            .iter()
            .any(|e| e.is_alive() && e.rect().intersects(&fighter_rect))
        {
            self.status = ArenaStatus::Lost;
            info!(defeated = self.fighter.enemies_defeated, "round lost");
            return;
        }

        if self.enemies.iter().all(|e| !e.is_alive()) {
            self.status = ArenaStatus::Won;
            info!(defeated = self.fighter.enemies_defeated, "round won");
        }
    }

    /// Replace the whole round.  Only allowed after a win or loss.
    pub fn restart(&mut self, rng: &mut impl Rng) -> bool {
        if !self.is_over() {
            return false;
        }
        *self = Arena::new(rng);
        info!("round restarted");
        true
    }
}

/// Random enemies at least `SPAWN_CLEARANCE` away from the fighter.
pub fn spawn_enemies(fighter: &Fighter, count: usize, rng: &mut impl Rng) -> Vec<Enemy> {
    (0..count)
        .map(|_| {
            let mut pos = random_spawn_point(rng);
            while distance(pos, fighter.center()) < SPAWN_CLEARANCE {
                pos = random_spawn_point(rng);
            }
            let dir_x = if rng.gen_bool(0.5) { -1 } else { 1 };
            let dir_y = if rng.gen_bool(0.5) { -1 } else { 1 };
            Enemy::new(pos.0, pos.1, dir_x, dir_y)
        })
        .collect()
}

fn random_spawn_point(rng: &mut impl Rng) -> (i32, i32) {
    (
        rng.gen_range(SPAWN_MARGIN..=SCREEN_WIDTH - SPAWN_MARGIN),
        rng.gen_range(SPAWN_MARGIN..=SCREEN_HEIGHT - SPAWN_MARGIN),
    )
}
