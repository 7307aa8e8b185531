//! Touch Pong headless host
//!
//! Stands in for a real UI host: loads settings, starts the frame loop,
//! plays a short scripted sequence of touches, then shuts the loop down.
//! `TOUCH_PONG_SETTINGS` points at an optional JSON settings file and
//! `RUST_LOG` controls verbosity.

use std::env;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use touch_pong::audio::{AudioManager, LogAudio};
use touch_pong::platform::{Game, GameThread};
use touch_pong::renderer::HeadlessRenderer;
use touch_pong::sim::{ScreenSize, TouchEvent};
use touch_pong::Settings;

const SCREEN: ScreenSize = ScreenSize {
    width: 1080,
    height: 2160,
};

fn main() {
    env_logger::init();
    log::info!("Touch Pong (headless) starting...");

    let settings_path = env::var_os("TOUCH_PONG_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let settings = Settings::load(&settings_path);

    let mut audio = AudioManager::new(Box::new(LogAudio::new()), &settings);
    audio.load_assets(&settings.asset_dir);

    let renderer = HeadlessRenderer::new();
    let frames = renderer.frame_counter();
    let game = Game::new(SCREEN, settings, Box::new(renderer), audio);
    let mut runner = GameThread::new(game);

    if let Err(err) = runner.start() {
        log::error!("Could not start game loop: {err}");
        return;
    }

    let half = SCREEN.width as f32 / 2.0;
    let script = [
        (TouchEvent::Down { x: half + 100.0, y: 1800.0 }, 400),
        (TouchEvent::Up, 200),
        (TouchEvent::Down { x: half - 100.0, y: 1800.0 }, 400),
        (TouchEvent::Up, 1000),
    ];
    for (touch, hold_ms) in script {
        runner.on_touch(touch);
        thread::sleep(Duration::from_millis(hold_ms));
    }

    runner.stop();

    if let Some(game) = runner.game() {
        let session = game.state.session;
        log::info!(
            "Stopped after {} frames: score {}, lives {}, last FPS {}",
            frames.load(std::sync::atomic::Ordering::SeqCst),
            session.score,
            session.lives,
            game.state.fps
        );
    }
}
