//! Application state and key handling.

use crossterm::event::KeyCode;
use noughts::{rules, Action, GameState, Mark};
use tracing::debug;

use crate::input;

/// Application state: the current snapshot plus view concerns.
pub struct App {
    state: GameState,
    cursor: usize,
    status: String,
}

impl App {
    /// Creates the app at the initial snapshot, cursor on the center cell.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            cursor: 4,
            status: turn_message(Mark::X),
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The status line under the board.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles a key press. Returns true when the app should exit.
    pub fn on_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(digit @ '1'..='9') => {
                let cell = digit as usize - '1' as usize;
                self.cursor = cell;
                self.mark(cell);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.mark(self.cursor),
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
        false
    }

    fn mark(&mut self, cell: usize) {
        debug!(cell, "mark requested");

        if let Some(rejection) = rules::rejection(&self.state, cell) {
            self.status = format!("Ignored: {rejection}.");
            return;
        }

        self.state = self.state.apply(Action::Mark { cell });
        self.status = outcome_message(&self.state);
    }

    fn reset(&mut self) {
        debug!("reset requested");
        self.state = self.state.apply(Action::Reset);
        self.status = turn_message(self.state.to_move());
    }
}

fn outcome_message(state: &GameState) -> String {
    match state.winner() {
        Some(mark) => format!("Player {mark} wins! Press 'r' to play again or 'q' to quit."),
        None if state.is_over() => {
            "It's a draw! Press 'r' to play again or 'q' to quit.".to_string()
        }
        None => turn_message(state.to_move()),
    }
}

fn turn_message(mark: Mark) -> String {
    format!("Player {mark}'s turn. Press 1-9, or move with arrows and Enter.")
}
