//! Per-tick motion integration for paddles and ball

use super::state::{Ball, Direction, FieldLimits, Paddle, Side};

/// What happened to the ball during one motion step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallStep {
    /// Side awarded a point because the ball left the field horizontally
    pub scored: Option<Side>,
    /// Ball reflected off the top or bottom edge
    pub bounced: bool,
}

/// Move a paddle by its input direction and clamp it to the field.
pub fn step_paddle(paddle: &mut Paddle, dir: Direction, speed: f32, dt: f32, max_y: f32) {
    paddle.prev_y = paddle.pos.y;
    paddle.dir = dir;
    paddle.pos.y = (paddle.pos.y + dir.sign() * speed * dt).clamp(-max_y, max_y);
}

/// Move the ball, reflecting off the field edges.
///
/// Leaving the field on the left credits the right player and vice versa.
/// The ball is clamped and its direction flipped either way; the caller
/// decides whether to re-serve.
pub fn step_ball(ball: &mut Ball, dt: f32, limits: &FieldLimits) -> BallStep {
    let mut step = BallStep::default();
    ball.prev_pos = ball.pos;

    ball.pos.x += ball.dir.x * ball.speed * dt;
    if ball.pos.x < -limits.max_ball_x {
        ball.pos.x = -limits.max_ball_x;
        ball.dir.x = -ball.dir.x;
        step.scored = Some(Side::Right);
    } else if ball.pos.x > limits.max_ball_x {
        ball.pos.x = limits.max_ball_x;
        ball.dir.x = -ball.dir.x;
        step.scored = Some(Side::Left);
    }

    ball.pos.y += ball.dir.y * ball.speed * dt;
    if ball.pos.y < -limits.max_ball_y {
        ball.pos.y = -limits.max_ball_y;
        ball.dir.y = -ball.dir.y;
        step.bounced = true;
    } else if ball.pos.y > limits.max_ball_y {
        ball.pos.y = limits.max_ball_y;
        ball.dir.y = -ball.dir.y;
        step.bounced = true;
    }

    step
}
