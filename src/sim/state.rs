//! Game entities and core simulation state
//!
//! Every actor is an axis-aligned `Rect` plus whatever behavior it needs.
//! Shots are exclusively owned by the actor that fired them and are swept
//! out with a retain pass once off-screen or deactivated.

use glam::Vec2;

use super::rect::Rect;
use super::starfield::Starfield;
use super::wave::Wave;
use super::animation::{Animation, PlayMode};
use crate::consts::*;

/// Which side fired a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOwner {
    Player,
    Alien,
}

/// Events the simulation emits for the shell (audio, logging, UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired { owner: ShotOwner },
    /// One formation row stepped; `sound` cycles 0..MOVE_SOUND_STEPS
    FormationStep { sound: u8 },
    AlienKilled { kind: AlienKind },
    PlayerHit { hp_left: u32 },
    PlayerKilled,
    /// Deployment finished and the attack phase began
    WaveDeployed,
    /// Every alien in the wave is dead
    WaveCleared,
}

/// A projectile in flight
#[derive(Debug, Clone)]
pub struct Shot {
    pub rect: Rect,
    pub vel: Vec2,
    /// Cleared on first collision; inactive shots are swept next retain pass
    pub active: bool,
}

impl Shot {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self {
            rect,
            vel,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.rect.pos += self.vel * dt;
    }
}

/// Alien roster of the standard wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienKind {
    Octopus,
    Crab,
    Squid,
}

/// A single alien invader
#[derive(Debug, Clone)]
pub struct Alien {
    pub kind: AlienKind,
    pub rect: Rect,
    pub anim: Animation,
    alive: bool,
    /// Shots this alien has fired and still owns
    pub shots: Vec<Shot>,
}

impl Alien {
    pub fn new(kind: AlienKind) -> Self {
        Self {
            kind,
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            anim: Animation::new(2, ALIEN_ANIM_FRAME_TIME, PlayMode::Loop),
            alive: true,
            shots: Vec::new(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Death is permanent within a wave
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Fire a shot downward from the alien's bottom center
    pub fn fire_shot(&mut self) {
        let (w, h) = ALIEN_SHOT_SIZE;
        let mut rect = Rect::new(0.0, 0.0, w, h);
        rect.set_center(Vec2::new(
            self.rect.center().x,
            self.rect.bottom(),
        ));
        self.shots.push(Shot::new(rect, Vec2::new(0.0, ALIEN_SHOT_SPEED)));
    }

    /// Advance animation (alive only) and shots (always, so shots fired
    /// before death keep flying)
    pub fn update(&mut self, dt: f32, area: &Rect) {
        if self.alive {
            self.anim.update(dt);
        }

        for shot in &mut self.shots {
            shot.update(dt);
        }
        self.shots.retain(|s| s.active && !s.rect.outside(area));
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub rect: Rect,
    hp: u32,
    pub speed: f32,
    /// -1, 0 or +1; consumed each update
    move_dir: f32,
    pub shots: Vec<Shot>,
    max_shots: usize,
    cooldown: f32,
    cooldown_timer: f32,
}

impl Ship {
    /// Create the ship centered at the bottom of the given playfield
    pub fn new(area: &Rect) -> Self {
        let x = (area.size.x - SHIP_SIZE) / 2.0;
        let y = area.size.y - SHIP_SIZE;
        Self {
            rect: Rect::new(x, y, SHIP_SIZE, SHIP_SIZE),
            hp: SHIP_HP,
            speed: SHIP_SPEED,
            move_dir: 0.0,
            shots: Vec::new(),
            max_shots: SHIP_MAX_SHOTS,
            cooldown: SHIP_FIRE_COOLDOWN,
            cooldown_timer: SHIP_FIRE_COOLDOWN,
        }
    }

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Never drops hit points below zero
    pub fn reduce_hp(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn set_move_dir(&mut self, dir: f32) {
        self.move_dir = dir.clamp(-1.0, 1.0);
    }

    /// Fire a shot upward if the cooldown has expired and the live shot cap
    /// is not reached. Returns true if a shot was fired.
    pub fn fire(&mut self) -> bool {
        if self.shots.len() >= self.max_shots || self.cooldown_timer > 0.0 {
            return false;
        }

        let (w, h) = SHIP_SHOT_SIZE;
        let mut rect = Rect::new(0.0, 0.0, w, h);
        rect.set_center(Vec2::new(self.rect.center().x, self.rect.top()));
        self.shots.push(Shot::new(rect, Vec2::new(0.0, SHIP_SHOT_SPEED)));
        self.cooldown_timer = self.cooldown;
        true
    }

    pub fn update(&mut self, dt: f32, area: &Rect) {
        // Movement: direction is an intent that lasts one frame
        if self.move_dir != 0.0 {
            self.rect.pos.x += self.speed * dt * self.move_dir;
        }
        self.move_dir = 0.0;

        // Keep the ship inside the playfield
        if self.rect.left() < area.left() {
            self.rect.pos.x = area.left();
        }
        if self.rect.right() > area.right() {
            self.rect.pos.x = area.right() - self.rect.size.x;
        }

        for shot in &mut self.shots {
            shot.update(dt);
        }
        self.shots.retain(|s| s.active && !s.rect.outside(area));

        if self.cooldown_timer > 0.0 {
            self.cooldown_timer -= dt;
        }
    }
}

/// A timed explosion overlay spawned on collision events
///
/// The effect plays its animation a configured number of full cycles within
/// a configured total duration. Per-frame time is duration / cycles / frames
/// and is recomputed whenever any of the three changes.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub rect: Rect,
    anim: Animation,
    total_cycles: u32,
    cycles_done: u32,
    total_duration: f32,
}

impl Explosion {
    /// Standard explosion covering the given bounds
    pub fn at(rect: Rect) -> Self {
        let mut e = Self {
            rect,
            anim: Animation::new(EXPLOSION_FRAMES, 0.0, PlayMode::Once),
            total_cycles: EXPLOSION_CYCLES,
            cycles_done: 0,
            total_duration: EXPLOSION_DURATION,
        };
        e.retime_animation();
        e
    }

    /// Rewind to the beginning of the first cycle
    pub fn start(&mut self) {
        self.cycles_done = 0;
        self.anim.reset();
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cycles_done >= self.total_cycles
    }

    pub fn anim(&self) -> &Animation {
        &self.anim
    }

    pub fn set_total_duration(&mut self, duration: f32) {
        self.total_duration = duration;
        self.retime_animation();
    }

    pub fn set_animation_cycles(&mut self, cycles: u32) {
        self.total_cycles = cycles;
        self.retime_animation();
    }

    pub fn set_animation(&mut self, anim: Animation) {
        self.anim = anim;
        self.retime_animation();
    }

    fn retime_animation(&mut self) {
        if self.anim.is_empty() {
            return;
        }
        let cycle_duration = if self.total_cycles > 0 {
            self.total_duration / self.total_cycles as f32
        } else {
            0.0
        };
        let frame_duration = cycle_duration / self.anim.total_frames() as f32;
        self.anim.set_frame_duration(frame_duration);
    }

    /// Advance the animation, counting each completed play-through as one
    /// cycle and rewinding for the next. No-op once finished.
    pub fn update(&mut self, dt: f32) {
        if self.is_finished() || self.anim.is_empty() {
            return;
        }

        self.anim.update(dt);
        if self.anim.is_finished() {
            self.cycles_done += 1;
            self.anim.reset();
        }
    }
}

/// Complete game state for one play session
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Visible playfield bounds
    pub area: Rect,
    pub ship: Ship,
    pub wave: Wave,
    pub starfield: Starfield,
    pub explosions: Vec<Explosion>,
    /// Events since the last drain, in emission order
    pub events: Vec<GameEvent>,
    /// Latch so WaveCleared fires exactly once
    pub(super) wave_cleared: bool,
}

impl GameState {
    /// Assemble a session around an already-configured wave. The wave is not
    /// started here; see `tick::new_game` for the standard setup.
    pub fn with_wave(seed: u64, area: Rect, wave: Wave) -> Self {
        Self {
            seed,
            time_ticks: 0,
            ship: Ship::new(&area),
            starfield: Starfield::new(seed, &area, STAR_COUNT),
            wave,
            area,
            explosions: Vec::new(),
            events: Vec::new(),
            wave_cleared: false,
        }
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    #[test]
    fn test_ship_fire_cooldown() {
        let mut ship = Ship::new(&area());
        // Cooldown timer starts full: no shot until it runs down
        assert!(!ship.fire());
        ship.update(SHIP_FIRE_COOLDOWN + 0.01, &area());
        assert!(ship.fire());
        assert_eq!(ship.shots.len(), 1);
        // Immediately after firing the cooldown blocks again
        assert!(!ship.fire());
    }

    #[test]
    fn test_ship_shot_cap() {
        let mut ship = Ship::new(&area());
        for _ in 0..SHIP_MAX_SHOTS {
            ship.update(1.0, &area());
            // Keep shots near the ship so they are not swept off-screen
            assert!(ship.fire());
            for shot in &mut ship.shots {
                shot.vel = glam::Vec2::ZERO;
            }
        }
        ship.update(1.0, &area());
        assert!(!ship.fire());
        assert_eq!(ship.shots.len(), SHIP_MAX_SHOTS);
    }

    #[test]
    fn test_ship_hp_floor() {
        let mut ship = Ship::new(&area());
        ship.reduce_hp(2);
        assert_eq!(ship.hp(), 1);
        ship.reduce_hp(1);
        ship.reduce_hp(1);
        ship.reduce_hp(5);
        assert_eq!(ship.hp(), 0);
        assert!(!ship.is_alive());
    }

    #[test]
    fn test_ship_clamped_to_area() {
        let mut ship = Ship::new(&area());
        ship.set_move_dir(-1.0);
        ship.update(10.0, &area());
        assert_eq!(ship.rect.left(), 0.0);
        ship.set_move_dir(1.0);
        ship.update(10.0, &area());
        assert_eq!(ship.rect.right(), SCREEN_WIDTH);
    }

    #[test]
    fn test_offscreen_shots_swept() {
        let mut ship = Ship::new(&area());
        ship.update(SHIP_FIRE_COOLDOWN + 0.01, &area());
        assert!(ship.fire());
        // Player shots travel fast; one big step puts them above the screen
        ship.update(1.0, &area());
        assert!(ship.shots.is_empty());
    }

    #[test]
    fn test_alien_shots_outlive_death() {
        let mut alien = Alien::new(AlienKind::Crab);
        alien.rect = Rect::new(100.0, 100.0, 30.0, 30.0);
        alien.fire_shot();
        alien.kill();
        let before = alien.shots[0].rect.pos.y;
        alien.update(0.1, &area());
        assert_eq!(alien.shots.len(), 1);
        assert!(alien.shots[0].rect.pos.y > before);
    }

    #[test]
    fn test_explosion_frame_timing() {
        // 0.5s total, 1 cycle, 5 frames => 0.1s per frame
        let e = Explosion::at(Rect::new(0.0, 0.0, 30.0, 30.0));
        assert!((e.anim().frame_duration() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_explosion_finishes_after_five_updates() {
        let mut e = Explosion::at(Rect::new(0.0, 0.0, 30.0, 30.0));
        for _ in 0..4 {
            e.update(0.1);
            assert!(!e.is_finished());
        }
        e.update(0.1);
        assert!(e.is_finished());
        // Further updates are no-ops
        e.update(1.0);
        assert!(e.is_finished());
    }

    #[test]
    fn test_explosion_retimes_on_reconfigure() {
        let mut e = Explosion::at(Rect::new(0.0, 0.0, 30.0, 30.0));
        e.set_total_duration(1.0);
        assert!((e.anim().frame_duration() - 0.2).abs() < 1e-6);
        e.set_animation_cycles(2);
        assert!((e.anim().frame_duration() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_explosion_multi_cycle() {
        let mut e = Explosion::at(Rect::new(0.0, 0.0, 30.0, 30.0));
        e.set_animation_cycles(2);
        e.start();
        // 0.5s / 2 cycles / 5 frames = 0.05s per frame; 10 updates finish
        for _ in 0..9 {
            e.update(0.05);
            assert!(!e.is_finished());
        }
        e.update(0.05);
        assert!(e.is_finished());
    }
}
