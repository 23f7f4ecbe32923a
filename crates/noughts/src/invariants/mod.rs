//! Named invariants over reachable game snapshots.
//!
//! Each invariant is a predicate that holds for every snapshot the reducer
//! can produce. They are asserted in debug builds after each accepted mark
//! and exercised directly by tests.

mod mark_balance;
mod terminal_consistent;
mod winner_on_board;

pub use mark_balance::MarkBalance;
pub use terminal_consistent::TerminalConsistent;
pub use winner_on_board::WinnerOnBoard;

use crate::types::GameState;

/// A logical property every reachable snapshot satisfies.
pub trait Invariant {
    /// Checks if the invariant holds for the snapshot.
    fn holds(state: &GameState) -> bool;

    /// Human-readable statement of the property.
    fn description() -> &'static str;
}

/// A violated invariant, identified by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Which property failed.
    pub description: &'static str,
}

/// Checks every reachable-state invariant, collecting violations.
pub fn check_reachable(state: &GameState) -> Result<(), Vec<Violation>> {
    fn check<I: Invariant>(state: &GameState, violations: &mut Vec<Violation>) {
        if !I::holds(state) {
            violations.push(Violation {
                description: I::description(),
            });
        }
    }

    let mut violations = Vec::new();
    check::<MarkBalance>(state, &mut violations);
    check::<TerminalConsistent>(state, &mut violations);
    check::<WinnerOnBoard>(state, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Asserts that all invariants hold (debug builds only).
pub(crate) fn assert_reachable(state: &GameState) {
    debug_assert!(MarkBalance::holds(state), "{}", MarkBalance::description());
    debug_assert!(
        TerminalConsistent::holds(state),
        "{}",
        TerminalConsistent::description()
    );
    debug_assert!(
        WinnerOnBoard::holds(state),
        "{}",
        WinnerOnBoard::description()
    );
}
