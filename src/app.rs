//! Listdrop App
//!
//! Root component. Holds the one board signal; every user action routes
//! through a pure reducer and replaces the whole value, and an effect
//! mirrors each new state into local storage.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_dnd::{bind_global_mouseup, create_dnd_signals, resolve_drop, DropOp};
use listdrop_core::seed::seed_state;
use listdrop_core::reducer;

use crate::auth::UserProfile;
use crate::components::{AuthMenu, DarkModeToggle, ListColumn, NewListForm};
use crate::{storage, sync};

#[component]
pub fn App() -> impl IntoView {
    let (board, set_board) = signal(storage::load_board().unwrap_or_else(seed_state));
    let (user, set_user) = signal(storage::load_profile());
    let (is_syncing, set_is_syncing) = signal(false);
    let (notice, set_notice) = signal(None::<String>);

    // Mirror every change into the local snapshot.
    Effect::new(move |_| {
        storage::save_board(&board.get());
    });

    // Drag gestures: the interpreter commits exactly one reducer call
    // per dropped gesture; everything else is a cancel.
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |source, target| {
        let state = board.get_untracked();
        match resolve_drop(&state, &source, &target) {
            Some(DropOp::Reorder {
                list_id,
                old_index,
                new_index,
            }) => set_board.set(reducer::reorder_items_in_list(
                &state, &list_id, old_index, new_index,
            )),
            Some(DropOp::Move {
                from_list_id,
                to_list_id,
                item_id,
                to_index,
            }) => set_board.set(reducer::move_item_between_lists(
                &state,
                &from_list_id,
                &to_list_id,
                &item_id,
                to_index,
            )),
            None => {}
        }
    });

    // List operations
    let on_add_list = Callback::new(move |name: String| {
        set_board.set(reducer::add_list(&board.get_untracked(), &name));
    });
    let on_rename_list = Callback::new(move |(list_id, new_name): (String, String)| {
        set_board.set(reducer::rename_list(
            &board.get_untracked(),
            &list_id,
            &new_name,
        ));
    });
    let on_delete_list = Callback::new(move |list_id: String| {
        set_board.set(reducer::delete_list(&board.get_untracked(), &list_id));
    });

    // Item operations
    let on_add_item = Callback::new(move |(list_id, text): (String, String)| {
        set_board.set(reducer::add_item(&board.get_untracked(), &list_id, &text));
    });
    let on_edit_item = Callback::new(move |(list_id, item_id, text): (String, String, String)| {
        set_board.set(reducer::edit_item(
            &board.get_untracked(),
            &list_id,
            &item_id,
            &text,
        ));
    });
    let on_delete_item = Callback::new(move |(list_id, item_id): (String, String)| {
        set_board.set(reducer::delete_item(
            &board.get_untracked(),
            &list_id,
            &item_id,
        ));
    });
    let on_toggle_done = Callback::new(move |(list_id, item_id): (String, String)| {
        set_board.set(reducer::toggle_done(
            &board.get_untracked(),
            &list_id,
            &item_id,
        ));
    });

    // Remote sync. The syncing flag is advisory: it disables the
    // buttons but local edits keep running while a call is in flight.
    let run_load = move |profile: UserProfile| {
        set_is_syncing.set(true);
        spawn_local(async move {
            match sync::load(&profile).await {
                Ok(Some(loaded)) => {
                    set_board.set(loaded);
                    set_notice.set(Some("Loaded from server".to_string()));
                }
                Ok(None) => {
                    set_notice.set(Some("Nothing saved on the server yet".to_string()));
                }
                Err(err) => {
                    web_sys::console::error_1(&err.into());
                    set_notice.set(Some("Load failed. Is the server running?".to_string()));
                }
            }
            set_is_syncing.set(false);
        });
    };

    let handle_save = move |_| {
        let Some(profile) = user.get_untracked() else {
            return;
        };
        let state = board.get_untracked();
        set_is_syncing.set(true);
        spawn_local(async move {
            match sync::save(&profile, &state).await {
                Ok(()) => set_notice.set(Some("Saved to server".to_string())),
                Err(err) => {
                    web_sys::console::error_1(&err.into());
                    set_notice.set(Some("Save failed. Is the server running?".to_string()));
                }
            }
            set_is_syncing.set(false);
        });
    };

    let handle_load = move |_| {
        if let Some(profile) = user.get_untracked() {
            run_load(profile);
        }
    };

    let on_login = Callback::new(move |profile: UserProfile| {
        storage::save_profile(&profile);
        set_user.set(Some(profile.clone()));
        // Pull this user's board right after sign-in.
        run_load(profile);
    });

    let on_logout = Callback::new(move |_: ()| {
        storage::clear_profile();
        set_user.set(None);
        set_board.set(seed_state());
    });

    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-title">
                    <h1>"Drag & Drop Lists"</h1>
                    <p>"Create, organize, and manage your tasks with ease"</p>
                </div>
                <div class="header-controls">
                    <Show when=move || user.get().is_some()>
                        <div class="sync-controls">
                            <button
                                class="sync-btn primary"
                                disabled=move || is_syncing.get()
                                on:click=handle_save
                            >
                                {move || if is_syncing.get() { "Syncing..." } else { "Save to Server" }}
                            </button>
                            <button
                                class="sync-btn"
                                disabled=move || is_syncing.get()
                                on:click=handle_load
                            >
                                "Load from Server"
                            </button>
                        </div>
                    </Show>
                    <AuthMenu user=user on_login=on_login on_logout=on_logout />
                    <DarkModeToggle />
                </div>
            </header>

            {move || notice.get().map(|text| view! { <p class="sync-notice">{text}</p> })}

            <main class="board">
                {move || {
                    board
                        .get()
                        .lists
                        .into_iter()
                        .map(|list| {
                            view! {
                                <ListColumn
                                    list=list
                                    dnd=dnd
                                    on_rename=on_rename_list
                                    on_delete=on_delete_list
                                    on_add_item=on_add_item
                                    on_edit_item=on_edit_item
                                    on_delete_item=on_delete_item
                                    on_toggle_done=on_toggle_done
                                />
                            }
                        })
                        .collect_view()
                }}
                <NewListForm on_add=on_add_list />
            </main>

            <footer class="app-footer">
                <p>"Keyboard accessible • Touch enabled • Auto-saved to localStorage"</p>
            </footer>
        </div>
    }
}
