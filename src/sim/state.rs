//! Game state and core simulation types
//!
//! Everything the render pass reads and the update loop mutates lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lane_center;

/// One of the three playfield columns the player can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    /// Lane index 0..3, left to right
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Map a stabilized pose label to a lane.
    ///
    /// "Center" and "Neutral" are synonyms; anything unrecognized is `None`
    /// and leaves the current lane untouched.
    pub fn from_pose_label(label: &str) -> Option<Self> {
        match label {
            "Left" => Some(Lane::Left),
            "Center" | "Neutral" => Some(Lane::Center),
            "Right" => Some(Lane::Right),
            _ => None,
        }
    }
}

/// What falls out of the sky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Apple,
    Banana,
    Orange,
    Bomb,
}

impl ItemKind {
    pub fn glyph(self) -> &'static str {
        match self {
            ItemKind::Apple => "\u{1F34E}",
            ItemKind::Banana => "\u{1F34C}",
            ItemKind::Orange => "\u{1F34A}",
            ItemKind::Bomb => "\u{1F4A3}",
        }
    }

    /// Points for catching this item (bombs score nothing)
    pub fn score_value(self) -> u32 {
        match self {
            ItemKind::Apple => 100,
            ItemKind::Banana => 200,
            ItemKind::Orange => 300,
            ItemKind::Bomb => 0,
        }
    }

    /// Added on top of the level-scaled base fall speed
    pub fn speed_modifier(self) -> f32 {
        match self {
            ItemKind::Apple | ItemKind::Banana => 0.0,
            ItemKind::Orange => 1.0,
            ItemKind::Bomb => 2.0,
        }
    }

    pub fn is_bomb(self) -> bool {
        self == ItemKind::Bomb
    }
}

/// A falling item. `x` is fixed to a lane center at spawn; only `y` moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FallingItem {
    pub x: f32,
    pub y: f32,
    pub kind: ItemKind,
    pub score_value: u32,
    pub fall_speed: f32,
}

/// The player's basket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Authoritative target lane, written only by pose input
    pub lane: Lane,
    /// Smoothed position, eased toward the target lane center each frame
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    /// Basket glyph
    pub const GLYPH: &'static str = "\u{1F6D2}";

    /// New player centered in the middle lane
    pub fn new(playfield_width: f32, playfield_height: f32) -> Self {
        Self {
            lane: Lane::Center,
            x: lane_center(Lane::Center.index(), playfield_width),
            y: playfield_height - PLAYER_BOTTOM_OFFSET,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

/// Floating score text, purely visual
#[derive(Debug, Clone)]
pub struct ScoreParticle {
    pub pos: Vec2,
    pub text: String,
    /// CSS color for the fill
    pub color: &'static str,
    /// 1.0 at spawn, fades to 0 and the particle is removed
    pub life: f32,
}

impl ScoreParticle {
    pub const GOLD: &'static str = "#FFD700";

    /// "+N" particle at the given position
    pub fn score_popup(pos: Vec2, value: u32) -> Self {
        Self {
            pos,
            text: format!("+{value}"),
            color: Self::GOLD,
            life: 1.0,
        }
    }
}

/// Complete game state, owned by the engine and reset on every `start`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub level: u32,
    /// Seconds left in the session; the run ends when it reaches 0
    pub time_remaining: i32,
    /// True between `start` and a terminal event (time expiry or bomb hit)
    pub is_active: bool,
    pub player: Player,
    pub items: Vec<FallingItem>,
    /// Visual only, not worth serializing
    #[serde(skip)]
    pub particles: Vec<ScoreParticle>,
}

impl GameState {
    pub fn new(playfield_width: f32, playfield_height: f32, session_secs: i32) -> Self {
        Self {
            score: 0,
            level: 1,
            time_remaining: session_secs,
            is_active: false,
            player: Player::new(playfield_width, playfield_height),
            items: Vec::new(),
            particles: Vec::new(),
        }
    }

    /// Level implied by the current score (1000 points per level)
    pub fn level_for_score(score: u32) -> u32 {
        score / LEVEL_SCORE_STEP + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_label_mapping() {
        assert_eq!(Lane::from_pose_label("Left"), Some(Lane::Left));
        assert_eq!(Lane::from_pose_label("Center"), Some(Lane::Center));
        assert_eq!(Lane::from_pose_label("Neutral"), Some(Lane::Center));
        assert_eq!(Lane::from_pose_label("Right"), Some(Lane::Right));
        assert_eq!(Lane::from_pose_label("Unknown"), None);
        assert_eq!(Lane::from_pose_label(""), None);
        // Case sensitive - classifier labels are exact
        assert_eq!(Lane::from_pose_label("left"), None);
    }

    #[test]
    fn test_item_kind_table() {
        assert_eq!(ItemKind::Apple.score_value(), 100);
        assert_eq!(ItemKind::Banana.score_value(), 200);
        assert_eq!(ItemKind::Orange.score_value(), 300);
        assert_eq!(ItemKind::Bomb.score_value(), 0);
        assert_eq!(ItemKind::Bomb.speed_modifier(), 2.0);
        assert_eq!(ItemKind::Orange.speed_modifier(), 1.0);
        assert!(ItemKind::Bomb.is_bomb());
        assert!(!ItemKind::Banana.is_bomb());
    }

    #[test]
    fn test_level_for_score() {
        assert_eq!(GameState::level_for_score(0), 1);
        assert_eq!(GameState::level_for_score(999), 1);
        assert_eq!(GameState::level_for_score(1000), 2);
        assert_eq!(GameState::level_for_score(1150), 2);
        assert_eq!(GameState::level_for_score(9999), 10);
    }

    #[test]
    fn test_new_player_centered() {
        let player = Player::new(600.0, 800.0);
        assert_eq!(player.lane, Lane::Center);
        assert_eq!(player.x, 300.0);
        assert_eq!(player.y, 700.0);
    }
}
