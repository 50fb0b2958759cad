//! The game engine
//!
//! Owns all mutable game state and the two wall-clock responsibilities: the
//! one-second countdown and the spawn gate. An external render driver calls
//! `update` then `draw` once per display frame; the pose pipeline calls
//! `set_player_pose` at its own cadence.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{item_caught, item_missed};
use super::spawn;
use super::state::{FallingItem, GameState, Lane, ScoreParticle};
use crate::audio::SoundEffect;
use crate::clock::{GameClock, default_clock};
use crate::consts::*;
use crate::lane_center;
use crate::render::Surface2d;

/// Fixed-at-construction engine configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield size in pixels; lane layout derives from width / 3
    pub width: f32,
    pub height: f32,
    /// Countdown length for a run
    pub session_secs: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 800.0,
            session_secs: SESSION_SECS,
        }
    }
}

type ScoreChangeFn = Box<dyn FnMut(u32, u32, i32)>;
type GameEndFn = Box<dyn FnMut(u32, u32)>;

/// Authoritative game simulation.
///
/// Single-threaded and event-driven: all mutation happens on the caller's
/// logical thread, and both callbacks fire synchronously on the engine's own
/// call stack. Every public method is a safe no-op in the wrong lifecycle
/// state rather than an error.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: Pcg32,
    clock: Box<dyn GameClock>,
    /// Next 1s countdown tick; `None` means the timer is cancelled
    countdown_deadline_ms: Option<f64>,
    last_spawn_ms: f64,
    spawn_interval_ms: f64,
    on_score_change: Option<ScoreChangeFn>,
    on_game_end: Option<GameEndFn>,
    /// Sound triggers queued for the host to drain each frame
    sounds: Vec<SoundEffect>,
}

impl GameEngine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_clock(config, seed, default_clock())
    }

    /// Engine over an injected clock, used by tests and headless runs
    pub fn with_clock(config: GameConfig, seed: u64, clock: Box<dyn GameClock>) -> Self {
        Self {
            config,
            state: GameState::new(config.width, config.height, config.session_secs),
            rng: Pcg32::seed_from_u64(seed),
            clock,
            countdown_deadline_ms: None,
            last_spawn_ms: 0.0,
            spawn_interval_ms: INITIAL_SPAWN_INTERVAL_MS,
            on_score_change: None,
            on_game_end: None,
            sounds: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// HUD callback: `(score, level, time_remaining)`
    pub fn set_on_score_change(&mut self, f: impl FnMut(u32, u32, i32) + 'static) {
        self.on_score_change = Some(Box::new(f));
    }

    /// Terminal callback: `(final_score, final_level)`
    pub fn set_on_game_end(&mut self, f: impl FnMut(u32, u32) + 'static) {
        self.on_game_end = Some(Box::new(f));
    }

    /// Drain queued sound triggers
    pub fn take_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    /// Begin a run. Resets all state, re-arms the countdown and the spawn
    /// gate, and fires the first HUD update. Re-entrant: starting over a
    /// previous run replaces its countdown deadline, so timers never stack.
    pub fn start(&mut self) {
        let now = self.clock.now_ms();

        self.state = GameState::new(self.config.width, self.config.height, self.config.session_secs);
        self.state.is_active = true;

        self.countdown_deadline_ms = Some(now + COUNTDOWN_TICK_MS);
        // Back-date the spawn clock so the first update spawns immediately
        self.spawn_interval_ms = INITIAL_SPAWN_INTERVAL_MS;
        self.last_spawn_ms = now - self.spawn_interval_ms - 1.0;
        self.sounds.clear();

        log::info!("run started ({}s session)", self.config.session_secs);
        self.fire_score_change();
    }

    /// Caller-initiated stop: deactivates and cancels the countdown without
    /// firing `on_game_end`.
    pub fn stop(&mut self) {
        self.state.is_active = false;
        self.countdown_deadline_ms = None;
        log::info!("run stopped");
    }

    /// Consume a stabilized pose label. The sole write path for the player's
    /// lane; unrecognized labels and idle-state calls are ignored.
    pub fn set_player_pose(&mut self, label: &str) {
        if !self.state.is_active {
            return;
        }
        if let Some(lane) = Lane::from_pose_label(label) {
            self.state.player.lane = lane;
        }
    }

    /// Advance the simulation one display frame. No-op while idle.
    pub fn update(&mut self) {
        if !self.state.is_active {
            return;
        }

        self.drain_countdown();
        if !self.state.is_active {
            // The countdown just expired the session
            return;
        }

        // 1. Ease the basket toward its target lane center
        let target = lane_center(self.state.player.lane.index(), self.config.width);
        let player = &mut self.state.player;
        player.x += (target - player.x) * PLAYER_LERP;

        // 2. Spawn gate on wall-clock time
        let now = self.clock.now_ms();
        if now - self.last_spawn_ms > self.spawn_interval_ms {
            let item = spawn::spawn_item(&mut self.rng, self.state.level, self.config.width);
            log::debug!("spawned {:?} in lane x={}", item.kind, item.x);
            self.state.items.push(item);
            self.last_spawn_ms = now;
            self.spawn_interval_ms = spawn::spawn_interval_ms(self.state.level);
        }

        // 3. Advance, cull, and collide items. Back-to-front so removal
        // mid-pass never skips an entry.
        let mut i = self.state.items.len();
        while i > 0 {
            i -= 1;
            let entry = &mut self.state.items[i];
            entry.y += entry.fall_speed;
            let item = *entry;

            if item_missed(&item, self.config.height) {
                // Silent miss, no penalty
                self.state.items.remove(i);
                continue;
            }
            if item_caught(&item, &self.state.player) {
                self.state.items.remove(i);
                self.resolve_catch(item);
                if !self.state.is_active {
                    // Bomb ended the run mid-pass
                    return;
                }
            }
        }

        // 4. Particles rise and fade, removed eagerly at zero life
        self.state.particles.retain_mut(|p| {
            p.pos.y -= PARTICLE_RISE;
            p.life -= PARTICLE_FADE;
            p.life > 0.0
        });
    }

    /// Render the current state. Pure read; safe while idle (draws the
    /// frozen last frame).
    pub fn draw(&self, surface: &mut dyn Surface2d) {
        crate::render::draw_frame(&self.state, self.config.width, self.config.height, surface);
    }

    /// Fire every countdown tick that has come due, catching up if frames
    /// stalled past more than one deadline.
    fn drain_countdown(&mut self) {
        let now = self.clock.now_ms();
        while let Some(deadline) = self.countdown_deadline_ms {
            if deadline > now || !self.state.is_active {
                break;
            }
            self.countdown_deadline_ms = Some(deadline + COUNTDOWN_TICK_MS);
            self.state.time_remaining -= 1;
            self.fire_score_change();
            if self.state.time_remaining <= 0 {
                self.game_over();
            }
        }
    }

    fn resolve_catch(&mut self, item: FallingItem) {
        if item.kind.is_bomb() {
            self.sounds.push(SoundEffect::Bomb);
            self.game_over();
            return;
        }

        self.state.score += item.score_value;
        self.sounds.push(SoundEffect::Coin);

        let pos = Vec2::new(self.state.player.x, self.state.player.y);
        self.state
            .particles
            .push(ScoreParticle::score_popup(pos, item.score_value));

        let implied = GameState::level_for_score(self.state.score);
        if implied > self.state.level {
            self.state.level = implied;
            log::info!("level up: {}", implied);
        }

        // Immediate HUD update so scoring doesn't wait for the next tick
        self.fire_score_change();
    }

    /// Terminal path shared by time expiry and bomb hits
    fn game_over(&mut self) {
        self.state.is_active = false;
        self.countdown_deadline_ms = None;

        let (score, level) = (self.state.score, self.state.level);
        log::info!("game over: score {score}, level {level}");
        if let Some(cb) = self.on_game_end.as_mut() {
            cb(score, level);
        }
    }

    fn fire_score_change(&mut self) {
        let (score, level, time) = (
            self.state.score,
            self.state.level,
            self.state.time_remaining,
        );
        if let Some(cb) = self.on_score_change.as_mut() {
            cb(score, level, time);
        }
    }
}
