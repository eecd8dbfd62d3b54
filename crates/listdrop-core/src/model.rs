//! Board Entities
//!
//! Serde field names match the wire and localStorage payloads
//! (`lists`, `items`, `id`, `name`, `text`, `done`).

use serde::{Deserialize, Serialize};

/// Generate a URL-safe unique id for a list or item.
///
/// 21 random characters from the nanoid alphabet; collisions are
/// negligible for the lifetime of one application instance.
pub fn new_id() -> String {
    nanoid::nanoid!()
}

/// A single task entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
    pub done: bool,
}

impl Item {
    /// Create a new not-done item with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            done: false,
        }
    }
}

/// A named, ordered collection of items. Order is user-visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
}

impl List {
    /// Create a new empty list with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Position of an item within this list, if present.
    pub fn index_of(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }
}

/// The root aggregate: all lists, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub lists: Vec<List>,
}

impl BoardState {
    /// Look up a list by id.
    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    /// Total number of items across all lists.
    pub fn total_items(&self) -> usize {
        self.lists.iter().map(|list| list.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_not_done() {
        let item = Item::new("Buy milk");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.done);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn new_list_is_empty() {
        let list = List::new("Today");
        assert_eq!(list.name, "Today");
        assert!(list.items.is_empty());
    }

    #[test]
    fn generated_ids_are_distinct_and_url_safe() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert!(a
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn serde_round_trip_preserves_state() {
        let state = crate::seed::seed_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn wire_field_names_match_original_payloads() {
        let json = r#"{"lists":[{"id":"l1","name":"Today","items":[{"id":"i1","text":"A","done":true}]}]}"#;
        let state: BoardState = serde_json::from_str(json).unwrap();
        assert_eq!(state.lists[0].items[0].text, "A");
        assert!(state.lists[0].items[0].done);
        assert_eq!(serde_json::to_string(&state).unwrap(), json);
    }
}
