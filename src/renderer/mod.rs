//! WebGPU rendering module
//!
//! Everything on screen is a tinted unit quad plus overlay text. The game
//! talks to the two draw targets through `QuadRenderer` and `TextRenderer`
//! so frame composition can be exercised without a GPU or a DOM.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{FrameInfo, draw_frame};

use glam::Mat4;

/// Geometry draw target (field coordinates, origin at centre, +y up)
pub trait QuadRenderer {
    /// Fill the whole view with the background colour
    fn draw_background(&mut self);

    /// Draw the unit quad (-0.5..0.5) under `transform`, tinted by `color`
    fn draw_quad(&mut self, transform: Mat4, color: [f32; 4]);
}

/// Overlay text target (screen pixels, origin top-left)
pub trait TextRenderer {
    /// Draw `text` with its baseline-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// Rendered width of `text` in pixels
    fn measure_text(&self, text: &str) -> f32;

    /// Lines through the centre of the screen (debug overlay)
    fn draw_crosshair(&mut self);
}
