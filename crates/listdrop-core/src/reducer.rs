//! State Reducers
//!
//! Every transition is a pure function `(&BoardState, ...) -> BoardState`.
//! The input is never mutated; unknown list or item ids are silent no-ops
//! (a stale gesture target must not take the app down).
//!
//! Index policy: out-of-range indices are clamped. A reorder whose
//! `old_index` is out of range is a no-op; a move's `to_index` is clamped
//! to the destination length.

use crate::model::{BoardState, Item, List};

/// Append a new empty list. The name is taken as-is; callers trim.
pub fn add_list(state: &BoardState, name: &str) -> BoardState {
    let mut next = state.clone();
    next.lists.push(List::new(name));
    next
}

/// Rename the list with the given id.
pub fn rename_list(state: &BoardState, list_id: &str, new_name: &str) -> BoardState {
    let mut next = state.clone();
    if let Some(list) = next.lists.iter_mut().find(|l| l.id == list_id) {
        list.name = new_name.to_string();
    }
    next
}

/// Remove the list with the given id, items included.
pub fn delete_list(state: &BoardState, list_id: &str) -> BoardState {
    let mut next = state.clone();
    next.lists.retain(|l| l.id != list_id);
    next
}

/// Append a new item to the given list.
pub fn add_item(state: &BoardState, list_id: &str, text: &str) -> BoardState {
    let mut next = state.clone();
    if let Some(list) = next.lists.iter_mut().find(|l| l.id == list_id) {
        list.items.push(Item::new(text));
    }
    next
}

/// Replace the text of the given item.
pub fn edit_item(state: &BoardState, list_id: &str, item_id: &str, new_text: &str) -> BoardState {
    let mut next = state.clone();
    if let Some(list) = next.lists.iter_mut().find(|l| l.id == list_id) {
        if let Some(item) = list.items.iter_mut().find(|i| i.id == item_id) {
            item.text = new_text.to_string();
        }
    }
    next
}

/// Remove the given item from its list.
pub fn delete_item(state: &BoardState, list_id: &str, item_id: &str) -> BoardState {
    let mut next = state.clone();
    if let Some(list) = next.lists.iter_mut().find(|l| l.id == list_id) {
        list.items.retain(|i| i.id != item_id);
    }
    next
}

/// Flip the done flag on the given item.
pub fn toggle_done(state: &BoardState, list_id: &str, item_id: &str) -> BoardState {
    let mut next = state.clone();
    if let Some(list) = next.lists.iter_mut().find(|l| l.id == list_id) {
        if let Some(item) = list.items.iter_mut().find(|i| i.id == item_id) {
            item.done = !item.done;
        }
    }
    next
}

/// Move the item at `old_index` to `new_index` within the same list.
pub fn reorder_items_in_list(
    state: &BoardState,
    list_id: &str,
    old_index: usize,
    new_index: usize,
) -> BoardState {
    let mut next = state.clone();
    if let Some(list) = next.lists.iter_mut().find(|l| l.id == list_id) {
        if old_index < list.items.len() {
            let new_index = new_index.min(list.items.len() - 1);
            if old_index != new_index {
                let item = list.items.remove(old_index);
                list.items.insert(new_index, item);
            }
        }
    }
    next
}

/// Transfer an item from one list to another, inserting at `to_index`
/// (clamped to the destination length).
///
/// The transfer is atomic: if the source item or the destination list is
/// missing, the state comes back unchanged rather than half-applied.
pub fn move_item_between_lists(
    state: &BoardState,
    from_list_id: &str,
    to_list_id: &str,
    item_id: &str,
    to_index: usize,
) -> BoardState {
    let mut next = state.clone();
    let mut moved: Option<Item> = None;
    if let Some(from) = next.lists.iter_mut().find(|l| l.id == from_list_id) {
        if let Some(pos) = from.index_of(item_id) {
            moved = Some(from.items.remove(pos));
        }
    }
    let Some(moved) = moved else {
        return state.clone();
    };
    match next.lists.iter_mut().find(|l| l.id == to_list_id) {
        Some(to) => {
            let at = to_index.min(to.items.len());
            to.items.insert(at, moved);
            next
        }
        // Destination vanished under the gesture; keep the item where it was.
        None => state.clone(),
    }
}
