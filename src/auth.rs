//! Sign-in Glue
//!
//! The signed-in user's profile, decoded from the Google Identity
//! Services ID token. Decoding here is display-only; the server
//! re-verifies the credential before touching any stored board.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// The signed-in user, persisted across sessions in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: String,
    /// The raw ID token, sent as the bearer credential on sync calls.
    pub token: String,
}

#[derive(Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    picture: String,
}

/// Decode a JWT credential's payload into a profile. Returns `None` on
/// anything malformed rather than failing the sign-in flow loudly.
pub fn profile_from_credential(credential: &str) -> Option<UserProfile> {
    let payload = credential.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(UserProfile {
        id: claims.sub,
        email: claims.email,
        name: claims.name,
        picture: claims.picture,
        token: credential.to_string(),
    })
}
