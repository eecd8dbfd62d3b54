//! Local Storage Persistence
//!
//! Best-effort mirror of the board plus the signed-in profile and the
//! dark-mode preference. Every failure here downgrades to "no snapshot";
//! nothing in this module may take the app down.

use listdrop_core::BoardState;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::UserProfile;

const STATE_KEY: &str = "drag-drop-lists-state";
const USER_KEY: &str = "google-user";
const DARK_MODE_KEY: &str = "darkMode";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn write_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            if storage.set_item(key, &json).is_err() {
                web_sys::console::error_1(&format!("failed to write {key} to localStorage").into());
            }
        }
        Err(err) => {
            web_sys::console::error_1(&format!("failed to serialize {key}: {err}").into());
        }
    }
}

fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Overwrite the board snapshot. Called on every state change.
pub fn save_board(state: &BoardState) {
    write_json(STATE_KEY, state);
}

/// Load the board snapshot, if one exists and parses.
pub fn load_board() -> Option<BoardState> {
    read_json(STATE_KEY)
}

pub fn save_profile(profile: &UserProfile) {
    write_json(USER_KEY, profile);
}

pub fn load_profile() -> Option<UserProfile> {
    read_json(USER_KEY)
}

pub fn clear_profile() {
    remove(USER_KEY);
}

pub fn save_dark_mode(dark: bool) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(DARK_MODE_KEY, if dark { "true" } else { "false" });
    }
}

/// `None` when the user has never toggled (fall back to the system
/// preference).
pub fn load_dark_mode() -> Option<bool> {
    let raw = local_storage()?.get_item(DARK_MODE_KEY).ok().flatten()?;
    Some(raw == "true")
}
