use crate::domain::error::DomainError;
use async_trait::async_trait;
use serde::Serialize;

/// Point-in-time quote for a company. Both figures are best-effort;
/// either can be missing on its own.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Quote {
    pub price: Option<f64>,
    /// Price-to-earnings style multiple.
    pub valuation_ratio: Option<f64>,
}

/// Market data source for current prices and valuation multiples.
#[async_trait]
pub trait PriceLookup: Send + Sync {
    async fn current(&self, code: &str) -> Result<Quote, DomainError>;
}
