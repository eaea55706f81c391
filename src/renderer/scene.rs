//! Per-frame scene composition
//!
//! Turns a `GameState` into quad and text draw calls. The layout is in
//! screen pixels, which match field units one to one because the canvases
//! are sized to the field.

use glam::Vec2;

use super::shapes::quad_transform;
use super::vertex::colors;
use super::{QuadRenderer, TextRenderer};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Side};

pub const TITLE_TEXT: &str = "QUAD-PONG";
pub const START_TEXT: &str = "START";

const TEXT_START: f32 = 4.0;
const TEXT_TOP: f32 = 20.0;
const PADDING_4: f32 = 4.0;
const PADDING_8: f32 = 8.0;
const PADDING_16: f32 = 16.0;
const TEXT_CENTER_X: f32 = FIELD_WIDTH / 2.0;
const TEXT_CENTER_Y: f32 = FIELD_HEIGHT / 2.0;

/// Frame data that isn't part of the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInfo {
    /// Raw `requestAnimationFrame` timestamp
    pub timestamp_ms: f64,
    pub dt: f32,
    /// Shown in the debug overlay when present
    pub fps: Option<u32>,
    /// Blink the START prompt (off keeps it solid)
    pub blink_prompt: bool,
}

/// Draw one frame for the current phase
pub fn draw_frame<Q, T>(state: &GameState, info: &FrameInfo, quads: &mut Q, text: &mut T)
where
    Q: QuadRenderer,
    T: TextRenderer,
{
    if state.debug {
        draw_debug(info, text);
    }

    quads.draw_background();

    match state.phase {
        GamePhase::MainMenu => {
            draw_centered(text, TITLE_TEXT, TEXT_TOP + PADDING_16);
            if !info.blink_prompt || state.prompt_visible() {
                draw_centered(text, START_TEXT, TEXT_CENTER_Y);
            }
        }
        GamePhase::Serving | GamePhase::Playing => {
            draw_scores(state, text);
            draw_field(state, quads);
        }
        GamePhase::GameOver => {
            draw_centered(text, &winner_text(state), TEXT_CENTER_Y);
            if state.debug {
                text.draw_text(
                    &format!("{:.1}", state.game_over_timer),
                    TEXT_START + PADDING_16,
                    TEXT_TOP + PADDING_16,
                );
            }
        }
    }
}

/// Banner naming the player who is ahead
pub fn winner_text(state: &GameState) -> String {
    format!("PLAYER {} WINS", state.score.leader().player_number())
}

fn draw_centered<T: TextRenderer>(text: &mut T, s: &str, y: f32) {
    let offset = text.measure_text(s) / 2.0;
    text.draw_text(s, TEXT_CENTER_X - offset, y);
}

fn draw_scores<T: TextRenderer>(state: &GameState, text: &mut T) {
    let y = TEXT_TOP + PADDING_4;
    text.draw_text(
        &state.score.get(Side::Left).to_string(),
        TEXT_CENTER_X - PADDING_16 - PADDING_8 - PADDING_4,
        y,
    );
    text.draw_text(
        &state.score.get(Side::Right).to_string(),
        TEXT_CENTER_X + PADDING_16 - PADDING_4,
        y,
    );
}

fn draw_field<Q: QuadRenderer>(state: &GameState, quads: &mut Q) {
    // Centre divider
    quads.draw_quad(
        quad_transform(Vec2::ZERO, Vec2::new(PADDLE_WIDTH, FIELD_HEIGHT)),
        colors::DIVIDER,
    );

    for side in Side::BOTH {
        let paddle = state.paddle(side);
        let size = Vec2::new(paddle.half_width, paddle.half_height) * 2.0;
        quads.draw_quad(quad_transform(paddle.pos, size), colors::PADDLE);
    }

    let ball = &state.ball;
    quads.draw_quad(
        quad_transform(ball.pos, Vec2::splat(ball.radius * 2.0)),
        colors::BALL,
    );
}

fn draw_debug<T: TextRenderer>(info: &FrameInfo, text: &mut T) {
    text.draw_text(
        &info.timestamp_ms.to_string(),
        TEXT_START,
        FIELD_HEIGHT - PADDING_16 * 2.0,
    );
    text.draw_text(&format!("{:.8}", info.dt), TEXT_START, FIELD_HEIGHT - PADDING_8);

    if let Some(fps) = info.fps {
        let label = format!("{fps} FPS");
        let x = FIELD_WIDTH - TEXT_START - text.measure_text(&label);
        text.draw_text(&label, x, FIELD_HEIGHT - PADDING_8);
    }

    text.draw_crosshair();
}
