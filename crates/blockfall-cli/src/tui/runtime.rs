use std::{io, time::Instant};

use crate::tui::{App, GravityClock, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Owns the gravity clock and the terminal, and executes applications that
/// implement the `App` trait.
#[derive(Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    /// Creates a runtime whose gravity clock is stopped.
    pub fn new(gravity: GravityClock) -> Self {
        Self {
            events: EventLoop::new(gravity),
        }
    }

    pub fn gravity(&self) -> &GravityClock {
        self.events.gravity()
    }

    /// Starts the gravity clock. Does nothing if it is already running.
    pub fn start_gravity(&mut self) {
        self.events.gravity_mut().start(Instant::now());
    }

    /// Stops the gravity clock. Does nothing if it is already stopped.
    pub fn stop_gravity(&mut self) {
        self.events.gravity_mut().stop();
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Runs the event loop until `app.should_exit()` returns true
    ///    - `Event::Tick`: calls `app.update()`
    ///    - `Event::Render`: calls `app.draw()`
    ///    - `Event::Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, &event);
                    }
                }
            }
            Ok(())
        })
    }
}
