//! Quad Pong - two-player Pong on an NES-sized field
//!
//! Core modules:
//! - `sim`: Game simulation (motion, collisions, match state machine)
//! - `renderer`: WebGPU quad pipeline and per-frame scene composition
//! - `platform`: Keyboard state, frame clock, canvas text overlay
//! - `settings`: User preferences (key bindings, debug overlay)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Field dimensions (NES resolution), also the canvas size in pixels
    pub const FIELD_WIDTH: f32 = 256.0;
    pub const FIELD_HEIGHT: f32 = 240.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    /// Distance from the side edge of the field to the paddle centre
    pub const PADDLE_INSET: f32 = 20.0;
    /// Paddle speed (field units per second)
    pub const PADDLE_SPEED: f32 = 180.0;

    /// Ball half-extent (the ball is drawn as a square of twice this size)
    pub const BALL_RADIUS: f32 = 5.0;
    /// Ball speed along each axis (field units per second)
    pub const BALL_SPEED: f32 = 180.0;

    /// Score that ends the match
    pub const WIN_SCORE: u32 = 9;
    /// Seconds the winner banner stays up before returning to the menu
    pub const GAME_OVER_SECS: f32 = 5.0;
    /// Half period of the blinking START prompt (seconds)
    pub const BLINK_RATE: f32 = 0.5;
}

/// Half of the field size; the field is centred on the origin with +y up
#[inline]
pub fn field_half_extents() -> Vec2 {
    Vec2::new(consts::FIELD_WIDTH / 2.0, consts::FIELD_HEIGHT / 2.0)
}
