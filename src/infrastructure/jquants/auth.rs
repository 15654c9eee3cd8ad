use reqwest::Client;
use serde::Deserialize;

use super::client::{http_client, DEFAULT_BASE_URL};
use crate::domain::error::DomainError;
use crate::domain::ports::auth_session::AuthSession;

/// Session produced by the refresh-token exchange.
#[derive(Debug, Clone)]
pub struct JquantsSession {
    id_token: String,
}

impl JquantsSession {
    pub fn new(id_token: String) -> Self {
        Self { id_token }
    }
}

impl AuthSession for JquantsSession {
    fn is_valid(&self) -> bool {
        !self.id_token.is_empty()
    }

    fn token(&self) -> &str {
        &self.id_token
    }
}

/// Exchanges a long-lived refresh token for a short-lived id token.
pub struct JquantsAuth {
    base_url: String,
    client: Client,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "idToken")]
    id_token: Option<String>,
}

impl JquantsAuth {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: http_client(),
        }
    }

    pub async fn authenticate(&self, refresh_token: &str) -> Result<JquantsSession, DomainError> {
        if refresh_token.is_empty() {
            return Err(DomainError::Config(
                "refresh token is empty; set SECTORWATCH_REFRESH_TOKEN".into(),
            ));
        }

        let resp = self
            .client
            .post(format!("{}/token/auth_refresh", self.base_url))
            .query(&[("refreshtoken", refresh_token)])
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "token refresh returned {}",
                resp.status()
            )));
        }

        let data: TokenResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        let id_token = data
            .id_token
            .ok_or_else(|| DomainError::Parse("no idToken in refresh response".into()))?;

        Ok(JquantsSession::new(id_token))
    }
}

impl Default for JquantsAuth {
    fn default() -> Self {
        Self::new()
    }
}
