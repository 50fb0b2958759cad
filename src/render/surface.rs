//! Abstract 2D drawing surface
//!
//! The engine issues drawing commands against this trait; actual pixel
//! production is external. The wasm build backs it with a canvas 2D context,
//! tests back it with a recording stub.

/// Drawing commands the render pass needs
pub trait Surface2d {
    /// Clear the whole surface
    fn clear(&mut self);

    /// Fill the background with a top-to-bottom gradient (CSS colors)
    fn fill_vertical_gradient(&mut self, top: &str, bottom: &str);

    /// Stroke a straight line
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &str, line_width: f32);

    /// Draw a centered text glyph (used for the emoji sprites)
    fn draw_glyph(&mut self, glyph: &str, x: f32, y: f32, size_px: f32);

    /// Draw label text with the given fill color and alpha, outlined in black
    /// for legibility
    fn draw_label(&mut self, text: &str, x: f32, y: f32, color: &str, alpha: f32);
}
