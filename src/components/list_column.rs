//! List Column Component
//!
//! One column per list: rename header, delete, item rows, add-item
//! form. The column body doubles as the "append at end" drop surface.

use leptos::prelude::*;

use board_dnd::{make_on_list_mouseenter, make_on_mouseleave, DndSignals, DropTarget};
use listdrop_core::List;

use super::DraggableItem;

#[component]
pub fn ListColumn(
    list: List,
    dnd: DndSignals,
    on_rename: Callback<(String, String)>,
    on_delete: Callback<String>,
    on_add_item: Callback<(String, String)>,
    on_edit_item: Callback<(String, String, String)>,
    on_delete_item: Callback<(String, String)>,
    on_toggle_done: Callback<(String, String)>,
) -> impl IntoView {
    let list_id = list.id.clone();
    let list_name = list.name.clone();

    let (renaming, set_renaming) = signal(false);
    let (name_draft, set_name_draft) = signal(list.name.clone());
    let (new_item_text, set_new_item_text) = signal(String::new());

    let commit_rename = {
        let list_id = list_id.clone();
        let list_name = list_name.clone();
        move || {
            let draft = name_draft.get_untracked().trim().to_string();
            if !draft.is_empty() && draft != list_name {
                on_rename.run((list_id.clone(), draft));
            }
            set_renaming.set(false);
        }
    };

    let handle_delete = {
        let list_id = list_id.clone();
        let list_name = list_name.clone();
        move |_| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete list \"{list_name}\"?")).ok()
                })
                .unwrap_or(false);
            if confirmed {
                on_delete.run(list_id.clone());
            }
        }
    };

    let handle_add_item = {
        let list_id = list_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let text = new_item_text.get_untracked().trim().to_string();
            if text.is_empty() {
                return;
            }
            on_add_item.run((list_id.clone(), text));
            set_new_item_text.set(String::new());
        }
    };

    let body_class = {
        let list_id = list_id.clone();
        move || {
            let over = matches!(
                dnd.drop_target.get(),
                Some(DropTarget::List(ref id)) if *id == list_id
            );
            if over { "list-items drop-over" } else { "list-items" }
        }
    };

    let header = {
        let list_name = list_name.clone();
        move || {
            if renaming.get() {
                let on_blur = {
                    let commit = commit_rename.clone();
                    move |_| commit()
                };
                let on_keydown = {
                    let commit = commit_rename.clone();
                    let original = list_name.clone();
                    move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => commit(),
                        "Escape" => {
                            set_name_draft.set(original.clone());
                            set_renaming.set(false);
                        }
                        _ => {}
                    }
                };
                view! {
                    <input
                        class="rename-input"
                        type="text"
                        prop:value=name_draft
                        on:input=move |ev| set_name_draft.set(event_target_value(&ev))
                        on:blur=on_blur
                        on:keydown=on_keydown
                        autofocus=true
                        aria-label="Rename list"
                    />
                }
                .into_any()
            } else {
                let name = list_name.clone();
                view! {
                    <h2 on:dblclick=move |_| set_renaming.set(true)>{name}</h2>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="list-column">
            <div class="list-header">
                {header}
                <button class="delete-list-btn" on:click=handle_delete aria-label="Delete list">
                    "×"
                </button>
            </div>

            <div
                class=body_class
                on:mouseenter=make_on_list_mouseenter(dnd, list.id.clone())
                on:mouseleave=make_on_mouseleave(dnd)
            >
                {list
                    .items
                    .iter()
                    .cloned()
                    .map(|item| {
                        view! {
                            <DraggableItem
                                item=item
                                list_id=list.id.clone()
                                dnd=dnd
                                on_edit=on_edit_item
                                on_delete=on_delete_item
                                on_toggle=on_toggle_done
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <form class="add-item-form" on:submit=handle_add_item>
                <input
                    type="text"
                    placeholder="Add an item..."
                    prop:value=new_item_text
                    on:input=move |ev| set_new_item_text.set(event_target_value(&ev))
                />
                <button type="submit">"+"</button>
            </form>
        </div>
    }
}
