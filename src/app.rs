//! Frame loop
//!
//! Owns the game state and everything with side effects: the high score
//! store and the random source. The sim reports events; this layer turns
//! them into storage writes.

use crate::persistence::HighScoreStore;
use crate::platform::Platform;
use crate::renderer::{ArenaOutline, Frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RandomSource, TickInput, tick};

/// A running game
pub struct App<S: HighScoreStore, R: RandomSource> {
    pub state: GameState,
    pub store: S,
    rng: R,
    outline: ArenaOutline,
    settings: Settings,
}

impl<S: HighScoreStore, R: RandomSource> App<S, R> {
    /// Load the high score and set up a game waiting for start
    pub fn new(settings: Settings, store: S, mut rng: R) -> Self {
        let high_score = store.load();
        let state = GameState::new(settings.rules, high_score, &mut rng);
        let outline = ArenaOutline::new(
            settings.screen_center(),
            settings.rules.arena_radius,
            settings.arena_sides,
            settings.arena_thickness,
        );

        Self {
            state,
            store,
            rng,
            outline,
            settings,
        }
    }

    /// Advance one frame and persist a new high score if one was set
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input, &mut self.rng);

        for event in &events {
            if let GameEvent::NewHighScore(score) = event {
                if let Err(e) = self.store.save(*score) {
                    log::warn!("Failed to save high score {}: {}", score, e);
                }
            }
        }

        events
    }

    /// Draw list for the current state
    pub fn frame(&self) -> Frame {
        let screen = glam::Vec2::new(
            self.settings.window_width as f32,
            self.settings.window_height as f32,
        );
        Frame::build(&self.state, &self.outline, screen)
    }

    pub fn outline(&self) -> &ArenaOutline {
        &self.outline
    }

    /// Run until the platform closes; returns the number of frames run
    pub fn run(&mut self, platform: &mut impl Platform) -> u64 {
        let mut frames = 0;
        while !platform.should_close() {
            let input = platform.poll_input();
            for event in self.step(&input) {
                match event {
                    GameEvent::Started => log::info!("Playing"),
                    GameEvent::NewHighScore(score) => log::info!("New high score: {}", score),
                    GameEvent::Missed { lost_score } if lost_score > 0 => {
                        log::info!("Rally over at {}", lost_score)
                    }
                    _ => {}
                }
            }
            platform.present(&self.frame());
            frames += 1;
        }
        frames
    }
}
