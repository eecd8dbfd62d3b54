//! Draggable Item Component
//!
//! A single task row: drag handle, done checkbox, double-click
//! edit-in-place, delete. The row is a drop surface for "insert at this
//! row's position".

use leptos::prelude::*;

use board_dnd::{make_on_item_mouseenter, make_on_mousedown, DndSignals, DropTarget};
use listdrop_core::Item;

#[component]
pub fn DraggableItem(
    item: Item,
    list_id: String,
    dnd: DndSignals,
    on_edit: Callback<(String, String, String)>,
    on_delete: Callback<(String, String)>,
    on_toggle: Callback<(String, String)>,
) -> impl IntoView {
    let item_id = item.id.clone();
    let text = item.text.clone();
    let done = item.done;

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(item.text.clone());

    let commit_edit = {
        let list_id = list_id.clone();
        let item_id = item_id.clone();
        let original = text.clone();
        move || {
            let new_text = draft.get_untracked().trim().to_string();
            if !new_text.is_empty() && new_text != original {
                on_edit.run((list_id.clone(), item_id.clone(), new_text));
            }
            set_editing.set(false);
        }
    };

    let handle_toggle = {
        let list_id = list_id.clone();
        let item_id = item_id.clone();
        move |_| on_toggle.run((list_id.clone(), item_id.clone()))
    };

    let handle_delete = {
        let list_id = list_id.clone();
        let item_id = item_id.clone();
        move |_| on_delete.run((list_id.clone(), item_id.clone()))
    };

    // Don't open the editor off the click synthesized after a drop.
    let start_editing = move |_| {
        if !dnd.drag_just_ended.get_untracked() {
            set_editing.set(true);
        }
    };

    let row_class = {
        let list_id = list_id.clone();
        let item_id = item_id.clone();
        move || {
            let mut class = String::from("draggable-item");
            if done {
                class.push_str(" done");
            }
            if dnd
                .dragging
                .get()
                .is_some_and(|active| active.item_id == item_id)
            {
                class.push_str(" dragging");
            }
            if matches!(
                dnd.drop_target.get(),
                Some(DropTarget::Item { list_id: ref l, item_id: ref i })
                    if *l == list_id && *i == item_id
            ) {
                class.push_str(" drop-before");
            }
            class
        }
    };

    let body = {
        let text = text.clone();
        move || {
            if editing.get() {
                let on_blur = {
                    let commit = commit_edit.clone();
                    move |_| commit()
                };
                let on_keydown = {
                    let commit = commit_edit.clone();
                    let original = text.clone();
                    move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => commit(),
                        "Escape" => {
                            set_draft.set(original.clone());
                            set_editing.set(false);
                        }
                        _ => {}
                    }
                };
                view! {
                    <input
                        class="edit-input"
                        type="text"
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:blur=on_blur
                        on:keydown=on_keydown
                        autofocus=true
                    />
                }
                .into_any()
            } else {
                let text = text.clone();
                view! {
                    <span class="item-text" on:dblclick=start_editing>{text}</span>
                }
                .into_any()
            }
        }
    };

    view! {
        <div
            class=row_class
            on:mouseenter=make_on_item_mouseenter(dnd, list_id.clone(), item.id.clone())
        >
            <span
                class="drag-handle"
                aria-label="Drag handle"
                on:mousedown=make_on_mousedown(dnd, list_id.clone(), item.id.clone())
            >
                "⠿"
            </span>
            <input type="checkbox" checked=done on:change=handle_toggle />
            {body}
            <button class="delete-item-btn" on:click=handle_delete aria-label="Delete item">
                "×"
            </button>
        </div>
    }
}
