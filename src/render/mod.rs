//! Render pass
//!
//! A pure function of the current game state onto an abstract surface. No
//! state mutation happens here, and drawing a stopped game is fine - it just
//! shows the frozen last frame.

pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use surface::Surface2d;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::LANE_COUNT;
use crate::sim::state::{GameState, Player};

/// Sky gradient colors
const SKY_TOP: &str = "#87CEEB";
const SKY_BOTTOM: &str = "#E0F7FA";
/// Lane divider style
const LANE_LINE: &str = "rgba(255, 255, 255, 0.5)";
const LANE_LINE_WIDTH: f32 = 4.0;

/// Glyph sizes in px
const PLAYER_FONT: f32 = 60.0;
const ITEM_FONT: f32 = 50.0;

/// Draw one frame of the given state
pub fn draw_frame(state: &GameState, width: f32, height: f32, surface: &mut dyn Surface2d) {
    surface.clear();
    surface.fill_vertical_gradient(SKY_TOP, SKY_BOTTOM);

    // Lane dividers
    let lane_width = width / LANE_COUNT as f32;
    for i in 1..LANE_COUNT {
        let x = i as f32 * lane_width;
        surface.stroke_line(x, 0.0, x, height, LANE_LINE, LANE_LINE_WIDTH);
    }

    // Basket, drop the glyph toward the middle of its box
    surface.draw_glyph(
        Player::GLYPH,
        state.player.x,
        state.player.y + state.player.height / 2.0,
        PLAYER_FONT,
    );

    for item in &state.items {
        surface.draw_glyph(item.kind.glyph(), item.x, item.y, ITEM_FONT);
    }

    for particle in &state.particles {
        surface.draw_label(
            &particle.text,
            particle.pos.x,
            particle.pos.y,
            particle.color,
            particle.life,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{FallingItem, ItemKind, ScoreParticle};
    use glam::Vec2;

    /// Records commands instead of producing pixels
    #[derive(Default)]
    struct RecordingSurface {
        commands: Vec<String>,
    }

    impl Surface2d for RecordingSurface {
        fn clear(&mut self) {
            self.commands.push("clear".into());
        }
        fn fill_vertical_gradient(&mut self, top: &str, bottom: &str) {
            self.commands.push(format!("gradient {top}->{bottom}"));
        }
        fn stroke_line(&mut self, x1: f32, _y1: f32, _x2: f32, _y2: f32, _color: &str, _w: f32) {
            self.commands.push(format!("line x={x1}"));
        }
        fn draw_glyph(&mut self, glyph: &str, x: f32, y: f32, _size: f32) {
            self.commands.push(format!("glyph {glyph} {x},{y}"));
        }
        fn draw_label(&mut self, text: &str, _x: f32, _y: f32, _color: &str, alpha: f32) {
            self.commands.push(format!("label {text} a={alpha}"));
        }
    }

    #[test]
    fn test_draw_frame_reads_all_state() {
        let mut state = GameState::new(600.0, 800.0, 60);
        state.items.push(FallingItem {
            x: 100.0,
            y: 40.0,
            kind: ItemKind::Banana,
            score_value: 200,
            fall_speed: 3.5,
        });
        state.particles.push(ScoreParticle {
            pos: Vec2::new(300.0, 650.0),
            text: "+200".into(),
            color: ScoreParticle::GOLD,
            life: 0.5,
        });

        let mut surface = RecordingSurface::default();
        draw_frame(&state, 600.0, 800.0, &mut surface);

        let joined = surface.commands.join("\n");
        assert!(joined.contains("clear"));
        assert!(joined.contains("gradient #87CEEB->#E0F7FA"));
        // Two dividers for three lanes
        assert!(joined.contains("line x=200"));
        assert!(joined.contains("line x=400"));
        // Basket glyph sits mid-box
        assert!(joined.contains(&format!("glyph {} 300,730", Player::GLYPH)));
        assert!(joined.contains("glyph \u{1F34C} 100,40"));
        // Particle alpha is its remaining life
        assert!(joined.contains("label +200 a=0.5"));
    }

    #[test]
    fn test_draw_frame_is_safe_while_idle() {
        // Fresh state has is_active = false; drawing must still work
        let state = GameState::new(600.0, 800.0, 60);
        let mut surface = RecordingSurface::default();
        draw_frame(&state, 600.0, 800.0, &mut surface);
        assert!(!surface.commands.is_empty());
    }
}
