//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame. There is no fixed
//! timestep decoupling: the platform holds the frame rate.

use super::autopilot;
use super::random::RandomSource;
use super::state::{Contact, GameEvent, GamePhase, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Rotate paddle counter-clockwise on screen (angle decreases)
    pub left: bool,
    /// Rotate paddle clockwise on screen (angle increases)
    pub right: bool,
    /// Start the game (space)
    pub start: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub autopilot: bool,
}

/// Advance the game state by one frame, returning what happened
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    let input = if input.autopilot {
        autopilot::drive(state)
    } else {
        *input
    };

    let mut events = Vec::new();

    match state.phase {
        GamePhase::NotStarted => {
            if input.start {
                state.phase = GamePhase::Playing;
                state.score = 0;
                state.ball.reset(rng);
                log::info!("Game started (high score {})", state.high_score);
                events.push(GameEvent::Started);
            }
        }

        GamePhase::Playing => {
            let step = state.rules.paddle_step;
            state.paddle.steer(input.left, input.right, step);

            match state.ball.update(&state.paddle, &state.rules, rng) {
                Contact::Inside => {}
                Contact::Hit => {
                    state.score += 1;
                    log::debug!(
                        "Paddle hit: score {} speed {:.2}",
                        state.score,
                        state.ball.speed
                    );
                    events.push(GameEvent::PaddleHit {
                        score: state.score,
                        speed: state.ball.speed,
                    });

                    if state.score > state.high_score {
                        state.high_score = state.score;
                        events.push(GameEvent::NewHighScore(state.high_score));
                    }
                }
                Contact::Miss => {
                    let lost_score = state.score;
                    state.score = 0;
                    log::debug!("Missed after {} hits", lost_score);
                    events.push(GameEvent::Missed { lost_score });
                }
            }
        }
    }

    events
}
