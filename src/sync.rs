//! Remote Sync Client
//!
//! Explicit save/load of the whole board against the sync server. Both
//! calls are request/response; the caller owns the advisory "syncing"
//! flag and neither call is retried or cancelled.

use listdrop_core::BoardState;
use serde::Serialize;

use crate::auth::UserProfile;

const DEFAULT_API_URL: &str = "http://localhost:4000/api";

fn api_url() -> &'static str {
    option_env!("LISTDROP_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[derive(Serialize)]
struct SaveRequest<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    data: &'a BoardState,
}

/// Upload the whole board under the signed-in user's id.
pub async fn save(profile: &UserProfile, state: &BoardState) -> Result<(), String> {
    let response = reqwest::Client::new()
        .post(format!("{}/sync/save", api_url()))
        .bearer_auth(&profile.token)
        .json(&SaveRequest {
            user_id: &profile.id,
            data: state,
        })
        .send()
        .await
        .map_err(|err| format!("save request failed: {err}"))?;

    if !response.status().is_success() {
        return Err(format!("server rejected save: {}", response.status()));
    }
    Ok(())
}

/// Download the signed-in user's board.
///
/// `Ok(None)` means the server had nothing for this user (an empty
/// `lists` payload); the caller keeps its local state in that case.
pub async fn load(profile: &UserProfile) -> Result<Option<BoardState>, String> {
    let response = reqwest::Client::new()
        .get(format!("{}/sync/load", api_url()))
        .query(&[("userId", profile.id.as_str())])
        .bearer_auth(&profile.token)
        .send()
        .await
        .map_err(|err| format!("load request failed: {err}"))?;

    if !response.status().is_success() {
        return Err(format!("server rejected load: {}", response.status()));
    }

    let board: BoardState = response
        .json()
        .await
        .map_err(|err| format!("malformed load response: {err}"))?;

    if board.lists.is_empty() {
        Ok(None)
    } else {
        Ok(Some(board))
    }
}
