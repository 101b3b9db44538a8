use std::time::Instant;

use blockfall_engine::GameSession;
use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::play::screen::PlayScreen,
    tui::{App, Runtime},
};

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(session: GameSession) -> Self {
        Self {
            screen: PlayScreen::new(session, Instant::now()),
        }
    }

    pub fn session(&self) -> &GameSession {
        self.screen.session()
    }

    /// Keeps the gravity clock running exactly while the session is playing.
    fn sync_gravity(&self, runtime: &mut Runtime) {
        let playing = self.session().session_state().is_playing();
        let running = runtime.gravity().is_running();
        if playing && !running {
            tracing::debug!("gravity started");
        } else if !playing && running {
            tracing::debug!("gravity stopped");
        }

        if playing {
            runtime.start_gravity();
        } else {
            runtime.stop_gravity();
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        tracing::debug!(period = ?runtime.gravity().period(), "gravity clock configured");
        self.sync_gravity(runtime);
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) {
        self.screen.handle_event(event, Instant::now());
        self.sync_gravity(runtime);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.screen.update(Instant::now());
        self.sync_gravity(runtime);
    }
}
