//! Yahoo Finance quote adapter using the v8 chart API for prices and the
//! quote-summary API for the trailing P/E (no auth required for either).

use async_trait::async_trait;
use log::debug;

use crate::domain::error::DomainError;
use crate::domain::ports::price_lookup::{PriceLookup, Quote};

pub struct YahooPriceLookup {
    base_url: String,
    client: reqwest::Client,
}

/// Tokyo listing codes map to Yahoo tickers as `{code}.T`; a
/// five-character code ending in `0` drops the trailing zero first.
fn yahoo_ticker(code: &str) -> String {
    let trimmed = if code.len() == 5 && code.ends_with('0') {
        &code[..4]
    } else {
        code
    };
    format!("{trimmed}.T")
}

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    meta: ChartMeta,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    regular_market_price: Option<f64>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    quote_summary: SummaryResult,
}

#[derive(Debug, serde::Deserialize)]
struct SummaryResult {
    result: Option<Vec<SummaryModules>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryModules {
    #[serde(default)]
    summary_detail: Option<SummaryDetail>,
}

#[derive(Debug, serde::Deserialize)]
struct SummaryDetail {
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<RawValue>,
}

#[derive(Debug, serde::Deserialize)]
struct RawValue {
    #[serde(default)]
    raw: Option<f64>,
}

impl YahooPriceLookup {
    pub fn new() -> Self {
        Self::with_base_url("https://query1.finance.yahoo.com")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .user_agent(
                    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                     AppleWebKit/537.36 (KHTML, like Gecko) \
                     Chrome/120.0.0.0 Safari/537.36",
                )
                .build()
                .unwrap_or_default(),
        }
    }

    async fn fetch_price(&self, ticker: &str) -> Result<f64, DomainError> {
        let url = format!(
            "{}/v8/finance/chart/{ticker}?range=1d&interval=1d",
            self.base_url
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "chart API returned {} for {ticker}",
                resp.status()
            )));
        }

        let data: ChartResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        if let Some(err) = data.chart.error {
            return Err(DomainError::Parse(format!("chart error: {err}")));
        }

        data.chart
            .result
            .and_then(|results| results.into_iter().next())
            .and_then(|data| data.meta.regular_market_price)
            .ok_or_else(|| DomainError::Parse(format!("no price for {ticker}")))
    }

    async fn fetch_trailing_pe(&self, ticker: &str) -> Result<Option<f64>, DomainError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{ticker}?modules=summaryDetail",
            self.base_url
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "quoteSummary returned {} for {ticker}",
                resp.status()
            )));
        }

        let data: SummaryResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        Ok(data
            .quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .and_then(|modules| modules.summary_detail)
            .and_then(|detail| detail.trailing_pe)
            .and_then(|value| value.raw))
    }
}

impl Default for YahooPriceLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceLookup for YahooPriceLookup {
    async fn current(&self, code: &str) -> Result<Quote, DomainError> {
        let ticker = yahoo_ticker(code);
        let price = self.fetch_price(&ticker).await?;

        // The multiple is secondary; losing it should not lose the price.
        let valuation_ratio = match self.fetch_trailing_pe(&ticker).await {
            Ok(pe) => pe,
            Err(e) => {
                debug!("trailing P/E unavailable for {ticker}: {e}");
                None
            }
        };

        Ok(Quote {
            price: Some(price),
            valuation_ratio,
        })
    }
}
