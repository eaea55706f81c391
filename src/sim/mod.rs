//! Game simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the GPU,
//! the DOM or the clock:
//! - `dt` is handed in by the caller
//! - Input arrives as an immutable per-tick snapshot
//! - Randomness comes from a seeded RNG owned by `GameState`

pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{Intersection, resolve_paddle_hit, segments_intersect};
pub use motion::{BallStep, step_ball, step_paddle};
pub use state::{Ball, Direction, FieldLimits, GamePhase, GameState, Paddle, Score, Side};
pub use tick::{GameEvent, TickInput, tick};
