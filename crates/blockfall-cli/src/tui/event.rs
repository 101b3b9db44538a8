use crossterm::event::Event as CrosstermEvent;

/// Events processed by TUI applications.
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// The gravity clock fired.
    Tick,
    /// Something changed since the last frame was drawn.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossterm_event_converts() {
        let event: TuiEvent = CrosstermEvent::FocusGained.into();
        assert!(matches!(
            event,
            TuiEvent::Crossterm(CrosstermEvent::FocusGained)
        ));
    }
}
