use std::time::Instant;

use blockfall_engine::{GameSession, InputAction, SessionState, TickEvent};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    widgets::Block as BlockWidget,
};

use crate::view::widgets::{BoardDisplay, KeyBinding, KeyBindingDisplay, SessionStatsDisplay};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Input(InputAction),
    SoftDrop,
    TogglePause,
    Restart,
    Quit,
}

pub(crate) fn key_command(code: KeyCode) -> Option<KeyCommand> {
    let command = match code {
        KeyCode::Left => KeyCommand::Input(InputAction::MoveLeft),
        KeyCode::Right => KeyCommand::Input(InputAction::MoveRight),
        KeyCode::Up => KeyCommand::Input(InputAction::Rotate),
        KeyCode::Down => KeyCommand::SoftDrop,
        KeyCode::Char('p' | 'P') => KeyCommand::TogglePause,
        KeyCode::Char('r' | 'R') => KeyCommand::Restart,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyCommand::Quit,
        _ => return None,
    };
    Some(command)
}

const PLAYING_BINDINGS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↑"], "Rotate"),
    (&["↓"], "Drop"),
    (&["P"], "Pause"),
    (&["R"], "Restart"),
    (&["Q"], "Quit"),
];
const PAUSED_BINDINGS: &[KeyBinding] = &[(&["P"], "Resume"), (&["R"], "Restart"), (&["Q"], "Quit")];
const GAME_OVER_BINDINGS: &[KeyBinding] = &[(&["R"], "Restart"), (&["Q"], "Quit")];

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    last_update: Instant,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(session: GameSession, now: Instant) -> Self {
        Self {
            session,
            last_update: now,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    /// Credits the session with the wall-clock time since the last call.
    ///
    /// The session itself ignores time while it is not playing.
    fn sync_time(&mut self, now: Instant) {
        self.session
            .advance_time(now.saturating_duration_since(self.last_update));
        self.last_update = now;
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        self.sync_time(now);
        let Some(key) = event.as_key_press_event() else {
            return;
        };
        if let Some(command) = key_command(key.code) {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Input(action) => _ = self.session.handle_input(action),
            KeyCommand::SoftDrop => log_tick(self.session.soft_drop()),
            KeyCommand::TogglePause => self.session.toggle_pause(),
            KeyCommand::Restart => self.session.restart(),
            KeyCommand::Quit => self.is_exiting = true,
        }
    }

    /// Applies one gravity tick.
    pub fn update(&mut self, now: Instant) {
        self.sync_time(now);
        log_tick(self.session.tick());
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let (title, bindings) = match self.session.session_state() {
            SessionState::Playing => (" BLOCKFALL ", PLAYING_BINDINGS),
            SessionState::Paused => (" PAUSED ", PAUSED_BINDINGS),
            SessionState::GameOver => (" GAME OVER ", GAME_OVER_BINDINGS),
        };

        let render_grid = self.session.render_grid();
        let board = BoardDisplay::new(&render_grid).block(BlockWidget::bordered().title(title));
        let stats =
            SessionStatsDisplay::new(&self.session).block(BlockWidget::bordered().title(" STATS "));
        let help = KeyBindingDisplay::new(bindings);

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(board.height()), Constraint::Length(1)])
                .areas(frame.area());
        let [board_area, stats_area] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [stats_area, _] =
            Layout::vertical([Constraint::Length(stats.height()), Constraint::Fill(1)])
                .areas(stats_area);

        frame.render_widget(board, board_area);
        frame.render_widget(stats, stats_area);
        frame.render_widget(help, help_area);
    }
}

fn log_tick(event: Option<TickEvent>) {
    if let Some(TickEvent::Locked { cleared_lines }) = event
        && cleared_lines > 0
    {
        tracing::debug!(cleared_lines, "rows cleared");
    }
}
