use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// The application state only changes in response to terminal events, so the
/// loop has no timers: it alternates between blocking on the next terminal
/// event and emitting a render once the state is dirty.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop`.
    pub(super) fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Returns the next event.
    ///
    /// Emits a pending render if the state is dirty, otherwise blocks until
    /// the next crossterm event and marks the state dirty.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}
