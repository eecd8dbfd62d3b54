//! Listdrop Frontend Entry Point

mod app;
mod auth;
mod components;
mod storage;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
