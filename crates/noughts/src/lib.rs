//! Pure tic-tac-toe game logic.
//!
//! The crate is a state machine with one entry point: [`transition`] takes an
//! immutable [`GameState`] snapshot and an [`Action`] and returns the next
//! snapshot. Front ends hold the snapshot, render from it, and feed user
//! input back in as actions.
//!
//! # Architecture
//!
//! - **Types**: value types for marks, squares, the board, and the snapshot
//! - **Reducer**: the pure `(state, action) -> state` transition
//! - **Rules**: win and draw detection, move legality
//! - **Invariants**: named properties every reachable snapshot satisfies
//!
//! # Example
//!
//! ```
//! use noughts::{transition, Action, GameState, Mark};
//!
//! let state = GameState::new();
//! let state = transition(&state, Action::Mark { cell: 4 });
//! assert_eq!(state.to_move(), Mark::O);
//! assert!(!state.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod reducer;
pub mod rules;
mod types;

pub use action::Action;
pub use reducer::transition;
pub use types::{Board, GameState, Mark, Square};
