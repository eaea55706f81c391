//! Collision detection and response
//!
//! The ball's motion over one tick is treated as a segment from its previous
//! to its current position. A paddle is hit when that segment crosses the
//! paddle's vertical centre line.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};

/// Parameters of a segment/segment intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Position along the first segment (0 = start, 1 = end)
    pub a: f32,
    /// Position along the second segment (0 = start, 1 = end)
    pub b: f32,
}

/// Intersect segment `p1 -> p2` with segment `p3 -> p4`.
///
/// Solves the two parametric line equations by determinant. Parallel,
/// collinear and zero-length segments have no unique crossing and report
/// `None`.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Intersection> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let r = p1 - p3;

    let denom = d1.perp_dot(d2);
    if denom.abs() < f32::EPSILON {
        return None;
    }

    let a = d2.perp_dot(r) / denom;
    let b = d1.perp_dot(r) / denom;

    if (0.0..=1.0).contains(&a) && (0.0..=1.0).contains(&b) {
        Some(Intersection { a, b })
    } else {
        None
    }
}

/// Bounce the ball off a paddle if this tick's motion crossed it.
///
/// On a hit the ball is pushed back out in front of the paddle face and
/// sent back across the field. Its vertical direction is taken from the
/// paddle's input this tick, so a moving paddle steers the return.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle) -> bool {
    let (bottom, top) = paddle.contact_segment();
    if segments_intersect(ball.prev_pos, ball.pos, bottom, top).is_none() {
        return false;
    }

    let offset = paddle.half_width + ball.radius;
    ball.pos.x = match paddle.side {
        Side::Left => paddle.pos.x + offset,
        Side::Right => paddle.pos.x - offset,
    };
    ball.dir.x = -ball.dir.x;
    ball.dir.y = paddle.dir.sign();
    true
}
