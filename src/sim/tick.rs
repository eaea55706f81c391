//! Simulation tick
//!
//! One call per display refresh. Runs the match state machine, then the
//! motion step, then paddle collisions.

use super::collision::resolve_paddle_hit;
use super::motion::{step_ball, step_paddle};
use super::state::{Direction, GamePhase, GameState, Side};
use crate::consts::*;

/// Input commands for a single tick
///
/// Paddle directions reflect keys held at tick start; the remaining fields
/// are edges that fire once per key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: Direction,
    pub right: Direction,
    /// Start a match, serve the ball, or dismiss the winner banner
    pub serve: bool,
    /// Abandon the match and return to the menu
    pub quit: bool,
    /// Flip the debug overlay
    pub toggle_debug: bool,
}

impl TickInput {
    pub fn direction(&self, side: Side) -> Direction {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Things that happened during a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    PointScored(Side),
    PaddleHit(Side),
    WallBounce,
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let dt = dt.max(0.0);
    let mut events = Vec::new();
    state.time_ticks += 1;

    if input.toggle_debug {
        state.debug = !state.debug;
        log::info!("Debug overlay {}", if state.debug { "on" } else { "off" });
    }

    if input.quit {
        state.reset_match();
        set_phase(state, GamePhase::MainMenu, &mut events);
        return events;
    }

    match state.phase {
        GamePhase::MainMenu => {
            state.blink -= dt;
            if state.blink < -BLINK_RATE {
                state.blink = BLINK_RATE;
            }

            if input.serve {
                state.reset_match();
                state.serve();
                set_phase(state, GamePhase::Serving, &mut events);
            }
        }
        GamePhase::Serving | GamePhase::Playing => play(state, input, dt, &mut events),
        GamePhase::GameOver => {
            state.game_over_timer -= dt;
            if state.game_over_timer <= 0.0 || input.serve {
                set_phase(state, GamePhase::MainMenu, &mut events);
            }
        }
    }

    events
}

/// Serve-wait and active play share paddle movement; only `Playing` moves the ball
fn play(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    let max_y = state.limits.max_paddle_y;
    for side in Side::BOTH {
        step_paddle(
            state.paddle_mut(side),
            input.direction(side),
            PADDLE_SPEED,
            dt,
            max_y,
        );
    }

    if state.phase == GamePhase::Serving && input.serve {
        set_phase(state, GamePhase::Playing, events);
    }

    if state.phase == GamePhase::Playing {
        let step = step_ball(&mut state.ball, dt, &state.limits);
        if step.bounced {
            log::debug!("Wall bounce at {:?}", state.ball.pos);
            events.push(GameEvent::WallBounce);
        }

        if let Some(side) = step.scored {
            state.score.award(side);
            log::info!(
                "Player {} scores ({} - {})",
                side.player_number(),
                state.score.left,
                state.score.right
            );
            events.push(GameEvent::PointScored(side));
            state.serve();
            set_phase(state, GamePhase::Serving, events);
        } else {
            for side in Side::BOTH {
                let paddle = match side {
                    Side::Left => &state.left,
                    Side::Right => &state.right,
                };
                if resolve_paddle_hit(&mut state.ball, paddle) {
                    log::debug!("Paddle hit ({:?}), ball dir {:?}", side, state.ball.dir);
                    events.push(GameEvent::PaddleHit(side));
                }
            }
        }
    }

    if let Some(winner) = state.score.winner(WIN_SCORE) {
        log::info!("Player {} wins", winner.player_number());
        state.game_over_timer = GAME_OVER_SECS;
        set_phase(state, GamePhase::GameOver, events);
    }
}

fn set_phase(state: &mut GameState, to: GamePhase, events: &mut Vec<GameEvent>) {
    let from = state.phase;
    if from == to {
        return;
    }
    state.phase = to;
    log::info!("{:?} -> {:?}", from, to);
    events.push(GameEvent::PhaseChanged { from, to });
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn serve() -> TickInput {
        TickInput {
            serve: true,
            ..Default::default()
        }
    }

    fn quit() -> TickInput {
        TickInput {
            quit: true,
            ..Default::default()
        }
    }

    /// State sitting in `Playing` with the ball at centre
    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &serve(), DT);
        tick(&mut state, &serve(), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_starts_on_main_menu() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::MainMenu);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.score.right, 0);
    }

    #[test]
    fn test_menu_to_serving_to_playing() {
        let mut state = GameState::new(12345);

        // Tick without serve - stay on the menu
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::MainMenu);

        let events = tick(&mut state, &serve(), DT);
        assert_eq!(state.phase, GamePhase::Serving);
        assert_eq!(
            events,
            vec![GameEvent::PhaseChanged {
                from: GamePhase::MainMenu,
                to: GamePhase::Serving
            }]
        );
        assert_eq!(state.ball.pos, Vec2::ZERO);

        // Ball stays parked until the next serve press
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Serving);
        assert_eq!(state.ball.pos, Vec2::ZERO);

        tick(&mut state, &serve(), DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_ne!(state.ball.pos, Vec2::ZERO);
    }

    #[test]
    fn test_menu_blink_cycles() {
        let mut state = GameState::new(1);
        assert!(state.prompt_visible());
        tick(&mut state, &TickInput::default(), 0.6);
        assert!(!state.prompt_visible());
        tick(&mut state, &TickInput::default(), 0.5);
        // Dropped below -BLINK_RATE, so it wraps back to visible
        assert!(state.prompt_visible());
        assert_eq!(state.blink, BLINK_RATE);
    }

    #[test]
    fn test_paddles_move_while_serving() {
        let mut state = GameState::new(5);
        tick(&mut state, &serve(), DT);
        let input = TickInput {
            left: Direction::Up,
            right: Direction::Down,
            ..Default::default()
        };
        tick(&mut state, &input, 0.1);
        assert!((state.left.pos.y - 18.0).abs() < 1e-4);
        assert!((state.right.pos.y + 18.0).abs() < 1e-4);
        assert_eq!(state.ball.pos, Vec2::ZERO);
    }

    #[test]
    fn test_point_scored_reserves_and_waits() {
        let mut state = playing(9);
        state.ball.speed = 120.0;
        state.ball.dir = Vec2::new(1.0, 0.0);
        state.limits.max_ball_x = 118.0;

        let events = tick(&mut state, &TickInput::default(), 1.0);

        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.phase, GamePhase::Serving);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.prev_pos, Vec2::ZERO);
        let points = events
            .iter()
            .filter(|e| matches!(e, GameEvent::PointScored(_)))
            .count();
        assert_eq!(points, 1);
        assert!(events.contains(&GameEvent::PointScored(Side::Left)));
    }

    #[test]
    fn test_ball_leaving_left_scores_for_right() {
        let mut state = playing(11);
        state.ball.pos = Vec2::new(-60.0, 100.0);
        state.ball.dir = Vec2::new(-1.0, 0.0);
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
    }

    #[test]
    fn test_paddle_hit_steers_return() {
        let mut state = playing(21);
        state.ball.pos = Vec2::new(-100.0, 0.0);
        state.ball.dir = Vec2::new(-1.0, 0.0);
        let input = TickInput {
            left: Direction::Down,
            ..Default::default()
        };
        let events = tick(&mut state, &input, 0.1);
        assert!(events.contains(&GameEvent::PaddleHit(Side::Left)));
        assert_eq!(state.ball.pos.x, -98.0);
        assert_eq!(state.ball.dir, Vec2::new(1.0, -1.0));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_wall_bounce_then_paddle_hit_in_one_tick() {
        let mut state = playing(17);
        state.left.pos.y = 88.0;
        state.ball.pos = Vec2::new(-100.0, 112.0);
        state.ball.dir = Vec2::new(-1.0, 1.0);

        let events = tick(&mut state, &TickInput::default(), 0.05);

        assert_eq!(
            events,
            vec![GameEvent::WallBounce, GameEvent::PaddleHit(Side::Left)]
        );
        assert_eq!(state.ball.pos, Vec2::new(-98.0, 115.0));
        assert_eq!(state.ball.dir, Vec2::new(1.0, 0.0));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_reaching_win_score_ends_match() {
        let mut state = playing(33);
        state.score.right = WIN_SCORE - 1;
        state.ball.pos = Vec2::new(-122.0, 0.0);
        state.ball.dir = Vec2::new(-1.0, 1.0);

        let events = tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.score.right, WIN_SCORE);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.game_over_timer, GAME_OVER_SECS);
        assert_eq!(
            events.last(),
            Some(&GameEvent::PhaseChanged {
                from: GamePhase::Serving,
                to: GamePhase::GameOver
            })
        );
    }

    #[test]
    fn test_game_over_counts_down_to_menu() {
        let mut state = GameState::new(2);
        state.phase = GamePhase::GameOver;
        state.game_over_timer = GAME_OVER_SECS;

        for _ in 0..4 {
            tick(&mut state, &TickInput::default(), 1.0);
            assert_eq!(state.phase, GamePhase::GameOver);
        }
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.phase, GamePhase::MainMenu);
    }

    #[test]
    fn test_serve_dismisses_game_over() {
        let mut state = GameState::new(2);
        state.phase = GamePhase::GameOver;
        state.game_over_timer = GAME_OVER_SECS;
        tick(&mut state, &serve(), DT);
        assert_eq!(state.phase, GamePhase::MainMenu);
    }

    #[test]
    fn test_new_match_resets_score() {
        let mut state = GameState::new(4);
        state.score.left = WIN_SCORE;
        state.phase = GamePhase::GameOver;
        tick(&mut state, &serve(), DT);
        assert_eq!(state.phase, GamePhase::MainMenu);
        tick(&mut state, &serve(), DT);
        assert_eq!(state.phase, GamePhase::Serving);
        assert_eq!(state.score.left, 0);
    }

    #[test]
    fn test_quit_returns_to_menu_from_any_phase() {
        for phase in [
            GamePhase::MainMenu,
            GamePhase::Serving,
            GamePhase::Playing,
            GamePhase::GameOver,
        ] {
            let mut state = GameState::new(8);
            state.phase = phase;
            state.score.left = 3;
            state.left.pos.y = 40.0;
            tick(&mut state, &quit(), DT);
            assert_eq!(state.phase, GamePhase::MainMenu);
            assert_eq!(state.score.left, 0);
            assert_eq!(state.left.pos.y, 0.0);
        }
    }

    #[test]
    fn test_toggle_debug_survives_new_match() {
        let mut state = GameState::new(6);
        let toggle = TickInput {
            toggle_debug: true,
            ..Default::default()
        };
        tick(&mut state, &toggle, DT);
        assert!(state.debug);
        tick(&mut state, &serve(), DT);
        assert!(state.debug);
        tick(&mut state, &toggle, DT);
        assert!(!state.debug);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut state = playing(13);
        state.ball.pos = Vec2::new(10.0, 10.0);
        tick(&mut state, &TickInput::default(), -0.5);
        assert_eq!(state.ball.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_ball_stays_in_bounds_over_long_rally() {
        let mut state = playing(77);
        let inputs = [
            TickInput {
                left: Direction::Up,
                right: Direction::Down,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                left: Direction::Down,
                right: Direction::Up,
                ..Default::default()
            },
        ];
        for i in 0..5_000 {
            let input = if state.phase == GamePhase::Serving {
                serve()
            } else {
                inputs[i % inputs.len()]
            };
            tick(&mut state, &input, DT);
            if state.phase == GamePhase::Playing {
                assert!(state.ball_in_bounds());
            }
            for side in Side::BOTH {
                assert!(state.paddle(side).pos.y.abs() <= state.limits.max_paddle_y);
            }
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let inputs = [
            serve(),
            serve(),
            TickInput {
                left: Direction::Up,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for input in &inputs {
            let e1 = tick(&mut state1, input, DT);
            let e2 = tick(&mut state2, input, DT);
            assert_eq!(e1, e2);
        }
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.ball.dir, state2.ball.dir);
    }
}
