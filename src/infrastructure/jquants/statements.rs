use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;

use super::client::{http_client, DEFAULT_BASE_URL};
use crate::domain::entities::disclosure::Disclosure;
use crate::domain::error::DomainError;
use crate::domain::ports::auth_session::AuthSession;
use crate::domain::ports::disclosure_store::DisclosureStore;

/// Disclosure store backed by the provider's `/fins/statements` endpoint.
///
/// The payload carries numeric fields as strings, empty strings or
/// nulls depending on the filing. Anything that does not parse as a
/// number becomes `None` on the entity; the metric deriver owns the
/// decision of what a missing figure means.
pub struct JquantsDisclosureStore {
    base_url: String,
    client: Client,
}

#[derive(Debug, serde::Deserialize)]
struct StatementsResponse {
    #[serde(default)]
    statements: Vec<RawStatement>,
}

#[derive(Debug, serde::Deserialize)]
struct RawStatement {
    #[serde(rename = "DisclosedDate")]
    disclosed_date: Option<String>,
    #[serde(rename = "OperatingProfit", default)]
    operating_profit: Option<Value>,
    #[serde(rename = "NetSales", default)]
    net_sales: Option<Value>,
    #[serde(rename = "ProfitLossAttributableToOwnersOfParent", default)]
    net_income: Option<Value>,
    #[serde(rename = "TotalAssets", default)]
    total_assets: Option<Value>,
    #[serde(rename = "NetAssets", default)]
    net_assets: Option<Value>,
}

/// Accept numbers and numeric strings; everything else is a missing figure.
fn numeric(value: &Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

impl RawStatement {
    /// Rows without a parseable disclosure date cannot be ordered and
    /// are dropped.
    fn into_disclosure(self) -> Option<Disclosure> {
        let disclosed_date =
            NaiveDate::parse_from_str(self.disclosed_date.as_deref()?, "%Y-%m-%d").ok()?;
        Some(Disclosure {
            disclosed_date,
            operating_profit: numeric(&self.operating_profit),
            net_sales: numeric(&self.net_sales),
            net_income: numeric(&self.net_income),
            total_assets: numeric(&self.total_assets),
            net_assets: numeric(&self.net_assets),
        })
    }
}

impl JquantsDisclosureStore {
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

impl Default for JquantsDisclosureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DisclosureStore for JquantsDisclosureStore {
    async fn fetch(
        &self,
        code: &str,
        session: &dyn AuthSession,
    ) -> Result<Vec<Disclosure>, DomainError> {
        let resp = self
            .client
            .get(format!("{}/fins/statements", self.base_url))
            .bearer_auth(session.token())
            .query(&[("code", code)])
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "fins/statements returned {} for {code}",
                resp.status()
            )));
        }

        let data: StatementsResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        Ok(data
            .statements
            .into_iter()
            .filter_map(RawStatement::into_disclosure)
            .collect())
    }
}
