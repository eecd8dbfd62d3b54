//! Dark Mode Toggle Component
//!
//! Toggles the `dark` class on the document root. Preference persists
//! in local storage; first visit follows the system preference.

use leptos::prelude::*;

use crate::storage;

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let (is_dark, set_is_dark) = signal(storage::load_dark_mode().unwrap_or_else(system_prefers_dark));

    Effect::new(move |_| {
        let dark = is_dark.get();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = if dark {
                root.class_list().add_1("dark")
            } else {
                root.class_list().remove_1("dark")
            };
        }
        storage::save_dark_mode(dark);
    });

    view! {
        <button
            class="dark-mode-toggle"
            on:click=move |_| set_is_dark.update(|dark| *dark = !*dark)
            aria-label=move || {
                if is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            }
        >
            {move || if is_dark.get() { "🌙" } else { "☀️" }}
        </button>
    }
}
