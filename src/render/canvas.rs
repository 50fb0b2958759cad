//! Canvas 2D surface implementation
//!
//! Drawing failures in the browser are absorbed with `.ok()` - a dropped
//! stroke is not worth crashing the game loop over.

use web_sys::CanvasRenderingContext2d;

use super::Surface2d;

/// `Surface2d` backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
        }
    }
}

impl Surface2d for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_vertical_gradient(&mut self, top: &str, bottom: &str) {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, self.height);
        gradient.add_color_stop(0.0, top).ok();
        gradient.add_color_stop(1.0, bottom).ok();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }

    fn draw_glyph(&mut self, glyph: &str, x: f32, y: f32, size_px: f32) {
        self.ctx.set_font(&format!("{size_px}px Arial"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(glyph, x as f64, y as f64).ok();
    }

    fn draw_label(&mut self, text: &str, x: f32, y: f32, color: &str, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_font("bold 30px Arial");
        self.ctx.set_text_align("center");
        self.ctx.set_fill_style_str(color);
        self.ctx.set_stroke_style_str("black");
        self.ctx.set_line_width(1.0);
        self.ctx.fill_text(text, x as f64, y as f64).ok();
        self.ctx.stroke_text(text, x as f64, y as f64).ok();
        self.ctx.set_global_alpha(1.0);
    }
}
