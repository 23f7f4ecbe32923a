//! Game rules: win detection, draw detection, and move legality.

mod draw;
mod legal;
mod win;

pub use draw::is_draw;
pub use legal::{open_cells, rejection, Rejection};
pub use win::winner;
