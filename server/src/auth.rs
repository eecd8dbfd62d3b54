//! Credential Verification
//!
//! The storage key is derived from the verified identity, never from a
//! client-claimed field alone. The production verifier validates Google
//! ID tokens against the tokeninfo endpoint and checks the audience.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credential")]
    InvalidCredential,
    #[error("credential verification failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Verifies a bearer credential and yields the subject it belongs to.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Result<String, AuthError>;
}

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Google ID token verifier.
pub struct GoogleVerifier {
    client: reqwest::Client,
    client_id: String,
}

#[derive(Deserialize)]
struct TokenInfo {
    aud: String,
    sub: String,
}

impl GoogleVerifier {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.into(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for GoogleVerifier {
    async fn verify(&self, credential: &str) -> Result<String, AuthError> {
        let response = self
            .client
            .get(TOKENINFO_URL)
            .query(&[("id_token", credential)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AuthError::InvalidCredential);
        }
        let info: TokenInfo = response.json().await?;
        if info.aud != self.client_id {
            tracing::warn!(aud = %info.aud, "credential issued for a different audience");
            return Err(AuthError::InvalidCredential);
        }
        Ok(info.sub)
    }
}
