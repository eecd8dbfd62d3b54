//! New List Form Component
//!
//! Trailing column with the "add a list" input.

use leptos::prelude::*;

#[component]
pub fn NewListForm(on_add: Callback<String>) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        on_add.run(trimmed);
        set_name.set(String::new());
    };

    view! {
        <form class="new-list-form" on:submit=handle_submit>
            <input
                type="text"
                placeholder="New list name..."
                prop:value=name
                on:input=move |ev| set_name.set(event_target_value(&ev))
                aria-label="New list name"
            />
            <button type="submit">"Add List"</button>
        </form>
    }
}
