//! Chess rules as seen by the Czess AI engine.
//!
//! The engine never generates moves itself. It consumes the [`Rules`]
//! contract: legal-move enumeration, in-place apply with LIFO undo, terminal
//! state queries and piece occupancy. [`Position`] implements that contract
//! on top of `shakmaty`.

pub mod board;
pub mod error;
pub mod perft;
pub mod rules;
pub mod types;
pub mod uci;

pub use board::*;
pub use error::{ChessError, Result};
pub use perft::perft;
pub use rules::*;
pub use types::*;
pub use uci::*;


#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
