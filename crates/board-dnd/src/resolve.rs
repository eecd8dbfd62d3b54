//! Drop Resolution
//!
//! Pure mapping from a committed gesture (source item + drop target) to
//! the single reducer operation that realizes it. Same-list drops become
//! reorders, cross-list drops become moves; anything stale resolves to
//! nothing.

use listdrop_core::BoardState;

use crate::{DropTarget, ItemRef};

/// The one state operation a committed gesture turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOp {
    Reorder {
        list_id: String,
        old_index: usize,
        new_index: usize,
    },
    Move {
        from_list_id: String,
        to_list_id: String,
        item_id: String,
        to_index: usize,
    },
}

/// Resolve a drop against the current state.
///
/// Returns `None` when the gesture is stale (source item no longer where
/// it was picked up, target list gone), when an item is dropped on
/// itself, or when a same-list drop would not change the order.
pub fn resolve_drop(state: &BoardState, source: &ItemRef, target: &DropTarget) -> Option<DropOp> {
    let old_index = state.list(&source.list_id)?.index_of(&source.item_id)?;

    let (target_list_id, target_index) = match target {
        DropTarget::List(list_id) => {
            let list = state.list(list_id)?;
            (list_id.as_str(), list.items.len())
        }
        DropTarget::Item { list_id, item_id } => {
            if *item_id == source.item_id {
                return None;
            }
            let list = state.list(list_id)?;
            (list_id.as_str(), list.index_of(item_id)?)
        }
    };

    if target_list_id == source.list_id {
        // Append-at-end within the same list points one past the source's
        // own slot; the last valid position is len - 1.
        let len = state.list(&source.list_id)?.items.len();
        let new_index = target_index.min(len.saturating_sub(1));
        if new_index == old_index {
            return None;
        }
        Some(DropOp::Reorder {
            list_id: source.list_id.clone(),
            old_index,
            new_index,
        })
    } else {
        Some(DropOp::Move {
            from_list_id: source.list_id.clone(),
            to_list_id: target_list_id.to_string(),
            item_id: source.item_id.clone(),
            to_index: target_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listdrop_core::seed::seed_state;

    fn grab(list_id: &str, item_id: &str) -> ItemRef {
        ItemRef {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
        }
    }

    #[test]
    fn drop_on_row_in_same_list_is_a_reorder() {
        let state = seed_state();
        let op = resolve_drop(
            &state,
            &grab("list-2", "item-3"),
            &DropTarget::Item {
                list_id: "list-2".to_string(),
                item_id: "item-5".to_string(),
            },
        );
        assert_eq!(
            op,
            Some(DropOp::Reorder {
                list_id: "list-2".to_string(),
                old_index: 0,
                new_index: 2,
            })
        );
    }

    #[test]
    fn drop_on_own_column_moves_to_the_end() {
        let state = seed_state();
        let op = resolve_drop(
            &state,
            &grab("list-1", "item-1"),
            &DropTarget::List("list-1".to_string()),
        );
        assert_eq!(
            op,
            Some(DropOp::Reorder {
                list_id: "list-1".to_string(),
                old_index: 0,
                new_index: 1,
            })
        );
    }

    #[test]
    fn last_item_dropped_on_own_column_resolves_to_nothing() {
        let state = seed_state();
        let op = resolve_drop(
            &state,
            &grab("list-1", "item-2"),
            &DropTarget::List("list-1".to_string()),
        );
        assert_eq!(op, None);
    }

    #[test]
    fn drop_on_row_in_another_list_is_a_move_at_that_position() {
        let state = seed_state();
        let op = resolve_drop(
            &state,
            &grab("list-1", "item-1"),
            &DropTarget::Item {
                list_id: "list-2".to_string(),
                item_id: "item-4".to_string(),
            },
        );
        assert_eq!(
            op,
            Some(DropOp::Move {
                from_list_id: "list-1".to_string(),
                to_list_id: "list-2".to_string(),
                item_id: "item-1".to_string(),
                to_index: 1,
            })
        );
    }

    #[test]
    fn drop_on_another_column_appends() {
        let state = seed_state();
        let op = resolve_drop(
            &state,
            &grab("list-1", "item-2"),
            &DropTarget::List("list-2".to_string()),
        );
        assert_eq!(
            op,
            Some(DropOp::Move {
                from_list_id: "list-1".to_string(),
                to_list_id: "list-2".to_string(),
                item_id: "item-2".to_string(),
                to_index: 3,
            })
        );
    }

    #[test]
    fn drop_on_self_resolves_to_nothing() {
        let state = seed_state();
        let op = resolve_drop(
            &state,
            &grab("list-1", "item-1"),
            &DropTarget::Item {
                list_id: "list-1".to_string(),
                item_id: "item-1".to_string(),
            },
        );
        assert_eq!(op, None);
    }

    #[test]
    fn stale_source_resolves_to_nothing() {
        let state = seed_state();
        let op = resolve_drop(
            &state,
            &grab("list-1", "item-5"),
            &DropTarget::List("list-2".to_string()),
        );
        assert_eq!(op, None);
    }

    #[test]
    fn vanished_target_list_resolves_to_nothing() {
        let state = seed_state();
        let op = resolve_drop(
            &state,
            &grab("list-1", "item-1"),
            &DropTarget::List("gone".to_string()),
        );
        assert_eq!(op, None);
    }
}
