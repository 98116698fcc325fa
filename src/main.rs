//! Circle Pong entry point
//!
//! Native builds have no window of their own yet. The binary loads settings
//! and the high score, then plays a headless autopilot session so the whole
//! loop (including high score persistence) can be exercised from a terminal.

use rand::Rng;

use circle_pong::consts::SETTINGS_FILE;
use circle_pong::platform::HeadlessPlatform;
use circle_pong::sim::PcgSource;
use circle_pong::{App, HighScoreFile, Settings};

/// One minute of play at the target frame rate
const DEMO_SECONDS: u64 = 60;

fn main() {
    env_logger::init();
    log::info!("Circle Pong (native) starting...");

    let settings = Settings::load(SETTINGS_FILE);
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Seed {}", seed);

    let store = HighScoreFile::new(settings.highscore_path.clone());
    let frames = DEMO_SECONDS * u64::from(settings.target_fps);

    let mut app = App::new(settings, store, PcgSource::new(seed));
    let mut platform = HeadlessPlatform::new(frames);
    let ran = app.run(&mut platform);

    println!(
        "Played {} frames: score {}, high score {}, ball speed {:.1}",
        ran, app.state.score, app.state.high_score, app.state.ball.speed
    );
}
