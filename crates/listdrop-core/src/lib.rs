//! Listdrop Core
//!
//! Pure, immutable state engine for the board:
//! - model: entity types and constructors
//! - reducer: state transitions (add/rename/delete/toggle/reorder/move)
//! - seed: initial fixture used when no snapshot exists
//!
//! No I/O and no UI dependencies; every transition takes the previous
//! state by reference and returns a fresh value.

pub mod model;
pub mod reducer;
pub mod seed;

pub use model::{new_id, BoardState, Item, List};
