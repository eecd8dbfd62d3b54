//! Seed Fixture
//!
//! Initial board shown when no local snapshot exists (and after logout).

use crate::model::{BoardState, Item, List};

fn fixed_item(id: &str, text: &str, done: bool) -> Item {
    Item {
        id: id.to_string(),
        text: text.to_string(),
        done,
    }
}

/// The out-of-the-box board: two lists with a handful of items.
///
/// Ids are stable so a fresh session is deterministic.
pub fn seed_state() -> BoardState {
    BoardState {
        lists: vec![
            List {
                id: "list-1".to_string(),
                name: "Today".to_string(),
                items: vec![
                    fixed_item("item-1", "Buy groceries", false),
                    fixed_item("item-2", "Finish project", false),
                ],
            },
            List {
                id: "list-2".to_string(),
                name: "Groceries".to_string(),
                items: vec![
                    fixed_item("item-3", "Milk", false),
                    fixed_item("item-4", "Eggs", true),
                    fixed_item("item-5", "Bread", false),
                ],
            },
        ],
    }
}
