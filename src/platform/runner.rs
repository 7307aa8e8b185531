//! Game instance and the background frame loop
//!
//! `GameThread::start` moves the [`Game`] onto a worker thread; `stop` clears
//! the playing flag and joins, getting the game back for the next `start`.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::controls::Controls;
use crate::audio::AudioManager;
use crate::error::{Error, Result};
use crate::renderer::{Renderer, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, ScreenSize, TouchEvent, tick};

/// Game instance holding all state and the host adapters
pub struct Game {
    pub state: GameState,
    settings: Settings,
    renderer: Box<dyn Renderer>,
    audio: AudioManager,
}

impl Game {
    pub fn new(
        screen: ScreenSize,
        settings: Settings,
        renderer: Box<dyn Renderer>,
        audio: AudioManager,
    ) -> Self {
        Self {
            state: GameState::new(screen, settings.tuning.clone()),
            settings,
            renderer,
            audio,
        }
    }

    /// Simulate, play cues, then draw. Frame timing is the caller's job.
    pub fn run_frame(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state);
        self.audio.play_events(&events);
        self.renderer.draw_frame(&build_frame(&self.state, &self.settings));
        events
    }
}

/// Runs a [`Game`] on its own thread between `start` and `stop`
pub struct GameThread {
    controls: Arc<Controls>,
    screen: ScreenSize,
    game: Option<Game>,
    handle: Option<JoinHandle<Game>>,
}

impl GameThread {
    pub fn new(game: Game) -> Self {
        Self {
            controls: Arc::new(Controls::new(game.state.is_paused())),
            screen: game.state.screen,
            game: Some(game),
            handle: None,
        }
    }

    /// Shared controls, for delivering touches from another thread
    pub fn controls(&self) -> Arc<Controls> {
        Arc::clone(&self.controls)
    }

    pub fn on_touch(&self, touch: TouchEvent) {
        self.controls.handle_touch(touch, self.screen);
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// The game, while the loop is stopped
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Start the frame loop. Does nothing if it is already running.
    pub fn start(&mut self) -> Result<()> {
        if self.handle.is_some() {
            log::debug!("Game loop already running");
            return Ok(());
        }
        let Some(game) = self.game.take() else {
            return Err(Error::LoopPanicked);
        };

        self.controls.set_playing(true);
        let controls = Arc::clone(&self.controls);
        let spawned = thread::Builder::new()
            .name("game-loop".to_string())
            .spawn(move || run_loop(game, controls));
        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.controls.set_playing(false);
                Err(Error::Io(err))
            }
        }
    }

    /// Stop the frame loop and wait for the thread to exit. No frame runs
    /// after this returns. A panicked loop is logged and its game is lost.
    pub fn stop(&mut self) {
        self.controls.set_playing(false);
        let Some(handle) = self.handle.take() else {
            return;
        };
        match handle.join() {
            Ok(game) => {
                self.controls.set_paused(game.state.is_paused());
                self.game = Some(game);
            }
            Err(_) => log::error!("Error joining game loop thread: {}", Error::LoopPanicked),
        }
    }
}

impl Drop for GameThread {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(mut game: Game, controls: Arc<Controls>) -> Game {
    log::info!("Game loop started");
    let frame_budget = game
        .settings
        .frame_cap
        .map(|cap| Duration::from_secs(1) / cap.max(1));

    while controls.is_playing() {
        let frame_start = Instant::now();

        game.state.set_paused(controls.is_paused());
        game.state.bat.set_movement_state(controls.movement());

        let events = game.run_frame();
        if events
            .iter()
            .any(|event| matches!(event, GameEvent::GameOver { .. }))
        {
            controls.set_paused(true);
        }

        if let Some(budget) = frame_budget {
            let spent = frame_start.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
        game.state.record_frame_time(frame_start.elapsed());
    }

    log::info!("Game loop stopped");
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogAudio;
    use crate::renderer::{Frame, HeadlessRenderer};
    use crate::sim::{Ball, GamePhase, MovementState};
    use glam::Vec2;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn headless_game(settings: Settings) -> (Game, Arc<AtomicU64>) {
        let renderer = HeadlessRenderer::new();
        let frames = renderer.frame_counter();
        let audio = AudioManager::new(Box::new(LogAudio::new()), &settings);
        let game = Game::new(
            ScreenSize::new(1000, 2000),
            settings,
            Box::new(renderer),
            audio,
        );
        (game, frames)
    }

    fn wait_for_frames(frames: &AtomicU64, at_least: u64) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while frames.load(Ordering::SeqCst) < at_least {
            assert!(Instant::now() < deadline, "loop produced no frames");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_run_frame_renders_while_paused() {
        let (mut game, frames) = headless_game(Settings::default());
        let ball = game.state.ball.pos;
        assert!(game.run_frame().is_empty());
        assert_eq!(frames.load(Ordering::SeqCst), 1);
        assert_eq!(game.state.ball.pos, ball);
    }

    #[test]
    fn test_stop_joins_before_returning() {
        let (game, frames) = headless_game(Settings::default());
        let mut runner = GameThread::new(game);

        runner.start().unwrap();
        assert!(runner.is_running());
        assert!(runner.game().is_none());
        wait_for_frames(&frames, 3);

        runner.stop();
        assert!(!runner.is_running());
        let drawn = frames.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(frames.load(Ordering::SeqCst), drawn);
        assert!(runner.game().is_some());
    }

    #[test]
    fn test_touch_reaches_loop_thread() {
        let (game, frames) = headless_game(Settings::default());
        let mut runner = GameThread::new(game);
        runner.start().unwrap();

        runner.on_touch(TouchEvent::Down { x: 900.0, y: 100.0 });
        let seen = frames.load(Ordering::SeqCst);
        wait_for_frames(&frames, seen + 3);
        runner.stop();

        let game = runner.game().unwrap();
        assert_eq!(game.state.session.phase, GamePhase::Running);
        assert_eq!(game.state.bat.movement_state(), MovementState::Right);
        assert!(game.state.bat.pos.x > 500.0);
    }

    #[test]
    fn test_restart_keeps_session() {
        let (game, frames) = headless_game(Settings::default());
        let mut runner = GameThread::new(game);

        runner.start().unwrap();
        runner.start().unwrap();
        wait_for_frames(&frames, 1);
        runner.stop();
        runner.stop();

        runner.start().unwrap();
        let seen = frames.load(Ordering::SeqCst);
        wait_for_frames(&frames, seen + 1);
        runner.stop();
        assert_eq!(runner.game().unwrap().state.session.lives, 3);
    }

    #[test]
    fn test_game_over_on_loop_thread_stays_paused() {
        let (mut game, frames) = headless_game(Settings::default());
        game.state.session.lives = 1;
        game.state.session.score = 2;
        game.state.ball.pos = Vec2::new(100.0, 1990.0);
        game.state.ball.vel = Vec2::new(0.0, 666.0);
        let screen = game.state.screen;
        let mut runner = GameThread::new(game);
        runner.start().unwrap();

        runner.on_touch(TouchEvent::Down { x: 100.0, y: 100.0 });
        runner.on_touch(TouchEvent::Up);
        let seen = frames.load(Ordering::SeqCst);
        wait_for_frames(&frames, seen + 10);
        runner.stop();

        assert!(runner.controls().is_paused());
        let state = &runner.game().unwrap().state;
        assert!(state.is_paused());
        assert_eq!(state.session.lives, 3);
        assert_eq!(state.session.score, 0);
        assert_eq!(state.ball.pos, Ball::reset_position(screen));
    }

    struct PanickingRenderer;

    impl Renderer for PanickingRenderer {
        fn draw_frame(&mut self, _frame: &Frame) {
            panic!("surface lost");
        }
    }

    #[test]
    fn test_panicked_loop_is_logged_not_propagated() {
        let settings = Settings::default();
        let audio = AudioManager::new(Box::new(LogAudio::new()), &settings);
        let game = Game::new(
            ScreenSize::new(1000, 2000),
            settings,
            Box::new(PanickingRenderer),
            audio,
        );
        let mut runner = GameThread::new(game);

        runner.start().unwrap();
        runner.stop();

        assert!(runner.game().is_none());
        assert!(matches!(runner.start(), Err(Error::LoopPanicked)));
    }
}
