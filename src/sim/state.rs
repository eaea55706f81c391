//! Game state and core simulation types
//!
//! Everything the match needs between ticks lives in `GameState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::field_half_extents;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with the blinking START prompt
    MainMenu,
    /// Ball parked at centre, paddles movable, waiting for serve input
    Serving,
    /// Ball in motion
    Playing,
    /// Winner banner, counting down back to the menu
    GameOver,
}

/// Which side of the field a paddle (and its player) is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Player number shown to humans (left is player 1)
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Vertical movement intent for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Resolve held up/down keys; holding both cancels out
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => Direction::Up,
            (false, true) => Direction::Down,
            _ => Direction::Idle,
        }
    }

    /// +1 for up, -1 for down, 0 when idle
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
            Direction::Idle => 0.0,
        }
    }
}

/// Movement limits derived once from the field half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimits {
    pub max_paddle_y: f32,
    pub max_ball_x: f32,
    pub max_ball_y: f32,
}

impl FieldLimits {
    pub fn new(half_extents: Vec2, paddle_half_height: f32, ball_radius: f32) -> Self {
        Self {
            max_paddle_y: half_extents.y - paddle_half_height,
            max_ball_x: half_extents.x - ball_radius,
            max_ball_y: half_extents.y - ball_radius,
        }
    }
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self::new(field_half_extents(), PADDLE_HEIGHT / 2.0, BALL_RADIUS)
    }
}

/// A player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    /// Centre of the paddle; x never changes after creation
    pub pos: Vec2,
    /// y at the start of the current tick
    pub prev_y: f32,
    pub half_width: f32,
    pub half_height: f32,
    /// Input direction applied this tick (also steers returns)
    pub dir: Direction,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let half_width = field_half_extents().x;
        let x = match side {
            Side::Left => -half_width + PADDLE_INSET,
            Side::Right => half_width - PADDLE_INSET,
        };
        Self {
            side,
            pos: Vec2::new(x, 0.0),
            prev_y: 0.0,
            half_width: PADDLE_WIDTH / 2.0,
            half_height: PADDLE_HEIGHT / 2.0,
            dir: Direction::Idle,
        }
    }

    /// Vertical segment the ball must cross to hit this paddle
    pub fn contact_segment(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.pos.x, self.pos.y - self.half_height),
            Vec2::new(self.pos.x, self.pos.y + self.half_height),
        )
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Position at the start of the current tick
    pub prev_pos: Vec2,
    /// Per-axis direction, each component in {-1, 0, 1}
    pub dir: Vec2,
    pub radius: f32,
    /// Speed along each axis (field units per second)
    pub speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            prev_pos: Vec2::ZERO,
            dir: Vec2::new(1.0, -1.0),
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
        }
    }
}

impl Ball {
    /// Park the ball at centre with a fresh random direction.
    ///
    /// Horizontal direction is always non-zero so the ball heads for a
    /// paddle; vertical direction may be flat.
    pub fn serve<R: Rng>(&mut self, rng: &mut R) {
        self.pos = Vec2::ZERO;
        self.prev_pos = Vec2::ZERO;
        let dir_x = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let dir_y = rng.random_range(-1i32..=1) as f32;
        self.dir = Vec2::new(dir_x, dir_y);
    }
}

/// Points for each player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side that has reached `threshold`, if any
    pub fn winner(&self, threshold: u32) -> Option<Side> {
        Side::BOTH.into_iter().find(|&side| self.get(side) >= threshold)
    }

    /// Side currently ahead; a tie goes to the right player
    pub fn leader(&self) -> Side {
        if self.left > self.right {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Complete simulation state, exclusively owned by the game loop.
///
/// `reset_match` clears everything except `debug`, which stays as the
/// player left it until toggled again.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub limits: FieldLimits,
    /// START prompt blink timer (visible while positive)
    pub blink: f32,
    /// Seconds left on the winner banner
    pub game_over_timer: f32,
    /// Debug overlay toggle (survives match resets)
    pub debug: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game sitting on the main menu
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            phase: GamePhase::MainMenu,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            score: Score::default(),
            limits: FieldLimits::default(),
            blink: BLINK_RATE,
            game_over_timer: 0.0,
            debug: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_match();
        state
    }

    /// Reset scores, paddles and timers for a fresh match
    pub fn reset_match(&mut self) {
        self.left = Paddle::new(Side::Left);
        self.right = Paddle::new(Side::Right);
        self.score = Score::default();
        self.blink = BLINK_RATE;
        self.game_over_timer = 0.0;
    }

    /// Re-serve the ball from centre
    pub fn serve(&mut self) {
        self.ball.serve(&mut self.rng);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Whether the blinking START prompt is in its visible half
    pub fn prompt_visible(&self) -> bool {
        self.blink > 0.0
    }

    /// Whether the ball is inside its clamp box
    pub fn ball_in_bounds(&self) -> bool {
        self.ball.pos.x.abs() <= self.limits.max_ball_x
            && self.ball.pos.y.abs() <= self.limits.max_ball_y
    }
}
