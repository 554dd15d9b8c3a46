//! HTML template rendering handlers for the board.

mod board;
mod travels;

pub use board::board_handler;
pub use travels::{add_travel_handler, delete_travel_handler};
