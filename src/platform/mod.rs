//! Platform abstraction layer
//!
//! Handles the browser-facing side of the game loop:
//! - Keyboard state and per-tick input snapshots
//! - Frame timestamps to `dt`, FPS estimate
//! - Canvas 2D text overlay (web only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod overlay;
pub mod time;

pub use input::{Key, KeyBindings, KeyState};
pub use time::{FpsCounter, FrameClock};
