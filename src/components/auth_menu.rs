//! Auth Menu Component
//!
//! Google Identity Services glue. The GIS script (loaded from
//! index.html) exposes `google.accounts.id` on the window; this
//! component binds to it the same way the rest of the app binds to
//! window globals, renders the sign-in button, and decodes the returned
//! credential into a profile.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::auth::{self, UserProfile};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gis_initialize(config: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gis_render_button(parent: &web_sys::HtmlElement, options: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = disableAutoSelect)]
    fn gis_disable_auto_select();
}

fn client_id() -> &'static str {
    option_env!("LISTDROP_GOOGLE_CLIENT_ID").unwrap_or("")
}

fn init_google_button(host: &web_sys::HtmlElement, on_login: Callback<UserProfile>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if !js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("google")).unwrap_or(false) {
        web_sys::console::warn_1(&"Google Identity Services script not loaded; sign-in disabled".into());
        return;
    }

    let config = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&config, &"client_id".into(), &client_id().into());

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let credential = js_sys::Reflect::get(&response, &"credential".into())
            .ok()
            .and_then(|value| value.as_string());
        match credential.and_then(|cred| auth::profile_from_credential(&cred)) {
            Some(profile) => on_login.run(profile),
            None => web_sys::console::error_1(&"failed to decode sign-in credential".into()),
        }
    });
    let _ = js_sys::Reflect::set(&config, &"callback".into(), callback.as_ref());
    callback.forget();

    gis_initialize(&config);

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"theme".into(), &"outline".into());
    let _ = js_sys::Reflect::set(&options, &"size".into(), &"medium".into());
    gis_render_button(host, &options);
}

#[component]
pub fn AuthMenu(
    user: ReadSignal<Option<UserProfile>>,
    on_login: Callback<UserProfile>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let button_host: NodeRef<leptos::html::Div> = NodeRef::new();

    // Re-render the GIS button whenever its host div (re)mounts, i.e.
    // on first load and after each logout.
    Effect::new(move |_| {
        if user.get().is_some() {
            return;
        }
        if let Some(host) = button_host.get() {
            init_google_button(&host, on_login);
        }
    });

    move || match user.get() {
        Some(profile) => view! {
            <div class="auth-profile">
                <img class="auth-avatar" src=profile.picture.clone() alt=profile.name.clone() />
                <div class="auth-names">
                    <p class="auth-name">{profile.name.clone()}</p>
                    <p class="auth-email">{profile.email.clone()}</p>
                </div>
                <button
                    class="logout-btn"
                    on:click=move |_| {
                        gis_disable_auto_select();
                        on_logout.run(());
                    }
                >
                    "Logout"
                </button>
            </div>
        }
        .into_any(),
        None => view! { <div class="auth-signin" node_ref=button_host></div> }.into_any(),
    }
}
