//! Game simulation module
//!
//! All gameplay logic lives here, and none of it touches the browser:
//! - Wall-clock time comes in through the injected `GameClock`
//! - Randomness comes from a seeded RNG
//! - Sound and HUD output leave as queued events and callbacks
//!
//! That keeps every rule unit-testable natively, without a canvas or camera.

pub mod collision;
pub mod engine;
pub mod spawn;
pub mod state;

pub use collision::{item_caught, item_missed};
pub use engine::{GameConfig, GameEngine};
pub use spawn::{fall_speed, kind_for_roll, spawn_interval_ms};
pub use state::{FallingItem, GameState, ItemKind, Lane, Player, ScoreParticle};
