//! Fruit Catcher - a pose-controlled arcade game
//!
//! The player leans left/center/right in front of a webcam; an external pose
//! classifier turns that into lane labels, and the basket chases falling
//! fruit across three lanes while dodging bombs.
//!
//! Core modules:
//! - `sim`: Game engine (state, spawning, collisions, countdown)
//! - `render`: Render pass over an abstract 2D surface
//! - `audio`: Web Audio sound effects
//! - `clock`: Injectable wall-clock so tests can simulate time
//! - `settings`: Player preferences

pub mod audio;
pub mod clock;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of playfield lanes
    pub const LANE_COUNT: usize = 3;

    /// Session length in seconds
    pub const SESSION_SECS: i32 = 60;

    /// Player basket bounding box
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// How far above the bottom edge the basket sits
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Per-frame easing factor toward the target lane center.
    /// Deliberately not dt-corrected: effective speed scales with call rate.
    pub const PLAYER_LERP: f32 = 0.2;

    /// Items spawn just above the top edge
    pub const ITEM_SPAWN_Y: f32 = -50.0;

    /// Base fall speed, plus per-level ramp (pixels per frame)
    pub const BASE_FALL_SPEED: f32 = 3.0;
    pub const FALL_SPEED_PER_LEVEL: f32 = 0.5;

    /// Spawn interval schedule: 1500ms shrinking 100ms per level, floored at 500ms
    pub const INITIAL_SPAWN_INTERVAL_MS: f64 = 1500.0;
    pub const SPAWN_INTERVAL_STEP_MS: f64 = 100.0;
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 500.0;

    /// Catch test: vertical band reach and horizontal center distance.
    /// Looser than a true AABB on purpose - tightening it changes game feel.
    pub const CATCH_BAND: f32 = 30.0;
    pub const CATCH_RADIUS: f32 = 50.0;

    /// Level advances every 1000 points
    pub const LEVEL_SCORE_STEP: u32 = 1000;

    /// Score particle motion per frame
    pub const PARTICLE_RISE: f32 = 2.0;
    pub const PARTICLE_FADE: f32 = 0.02;

    /// Countdown tick period
    pub const COUNTDOWN_TICK_MS: f64 = 1000.0;
}

/// Center x of a lane given the playfield width
#[inline]
pub fn lane_center(lane_index: usize, width: f32) -> f32 {
    let lane_width = width / consts::LANE_COUNT as f32;
    lane_width * (lane_index as f32 + 0.5)
}
