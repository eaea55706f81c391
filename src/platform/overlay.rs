//! Canvas 2D text overlay
//!
//! A second canvas stacked on top of the WebGPU canvas carries all text:
//! scores, menu titles and the debug readout.

use anyhow::{Context, anyhow};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::renderer::TextRenderer;

const FONT: &str = "20px \"Pixel NES\"";
const INK: &str = "white";

pub struct CanvasText {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasText {
    /// Set up the overlay canvas at the given pixel size
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> anyhow::Result<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context request failed: {e:?}"))?
            .context("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("2d context has an unexpected type"))?;

        ctx.set_font(FONT);
        ctx.set_fill_style_str(INK);
        ctx.set_stroke_style_str(INK);

        Ok(Self {
            ctx,
            width: width as f64,
            height: height as f64,
        })
    }

    /// Wipe last frame's text
    pub fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }
}

impl TextRenderer for CanvasText {
    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }

    fn draw_crosshair(&mut self) {
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        self.ctx.begin_path();
        self.ctx.move_to(cx, 0.0);
        self.ctx.line_to(cx, self.height);
        self.ctx.move_to(0.0, cy);
        self.ctx.line_to(self.width, cy);
        self.ctx.stroke();
    }
}
