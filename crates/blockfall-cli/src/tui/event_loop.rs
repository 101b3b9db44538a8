use std::{io, time::Instant};

use crossterm::event;

use crate::tui::{event::TuiEvent, gravity::GravityClock};

/// Event loop state management.
///
/// Returns gravity ticks while the clock runs, a render request whenever
/// something changed, and terminal events otherwise.
#[derive(Debug)]
pub(super) struct EventLoop {
    gravity: GravityClock,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new(gravity: GravityClock) -> Self {
        Self {
            gravity,
            dirty: true, // Initial render is required on startup
        }
    }

    pub(super) fn gravity(&self) -> &GravityClock {
        &self.gravity
    }

    pub(super) fn gravity_mut(&mut self) -> &mut GravityClock {
        &mut self.gravity
    }

    /// Returns the next event.
    ///
    /// Blocks until a gravity tick is due or a crossterm event occurs. With
    /// the clock stopped, only waits for crossterm events.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if self.gravity.poll(now) {
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(deadline) = self.gravity.deadline()
                && !event::poll(deadline.saturating_duration_since(now))?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }
}
