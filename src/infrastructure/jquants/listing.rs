use async_trait::async_trait;
use reqwest::Client;

use super::client::{http_client, DEFAULT_BASE_URL};
use crate::domain::error::DomainError;
use crate::domain::ports::auth_session::AuthSession;
use crate::domain::ports::listing_directory::ListingDirectory;

/// Listing directory backed by the provider's `/listed/info` endpoint.
/// Sector membership is matched on the exact sector display name.
pub struct JquantsListingDirectory {
    base_url: String,
    client: Client,
}

#[derive(Debug, serde::Deserialize)]
struct ListedInfoResponse {
    #[serde(default)]
    info: Vec<ListedCompany>,
}

#[derive(Debug, serde::Deserialize)]
struct ListedCompany {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Sector33CodeName", default)]
    sector_name: Option<String>,
}

impl JquantsListingDirectory {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: http_client(),
        }
    }
}

impl Default for JquantsListingDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingDirectory for JquantsListingDirectory {
    async fn codes_in_sector(
        &self,
        sector: &str,
        session: &dyn AuthSession,
    ) -> Result<Vec<String>, DomainError> {
        let resp = self
            .client
            .get(format!("{}/listed/info", self.base_url))
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "listed/info returned {}",
                resp.status()
            )));
        }

        let data: ListedInfoResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        Ok(data
            .info
            .into_iter()
            .filter(|company| company.sector_name.as_deref() == Some(sector))
            .filter_map(|company| company.code)
            .collect())
    }
}
