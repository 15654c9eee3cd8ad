//! Watch-list refresh: pull current prices and flag threshold moves.

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::price_lookup::{PriceLookup, Quote};
use crate::domain::ports::watch_repository::WatchRepository;
use crate::domain::values::position::{classify_position, pnl_pct, PositionStatus};

/// One refreshed watch-list row. A failed quote leaves the price, the
/// move and the status all absent; the row itself is still reported.
#[derive(Debug, Serialize)]
pub struct PositionReport {
    pub code: String,
    pub entry_price: f64,
    pub price: Option<f64>,
    pub pnl_pct: Option<f64>,
    pub status: Option<PositionStatus>,
}

pub struct RefreshUseCase {
    repo: Arc<dyn WatchRepository>,
    prices: Arc<dyn PriceLookup>,
    notifier: Arc<dyn Notifier>,
}

impl RefreshUseCase {
    pub fn new(
        repo: Arc<dyn WatchRepository>,
        prices: Arc<dyn PriceLookup>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repo,
            prices,
            notifier,
        }
    }

    /// Refresh every watched position in list order. With `notify` set,
    /// statuses outside the quiet band are pushed to the notifier;
    /// delivery failures are logged and do not fail the refresh.
    pub async fn execute(&self, notify: bool) -> Result<Vec<PositionReport>, DomainError> {
        let items = self.repo.load()?;
        let mut rows = Vec::with_capacity(items.len());

        for item in items {
            let quote = match self.prices.current(&item.code).await {
                Ok(quote) => quote,
                Err(e) => {
                    debug!("price lookup failed for {}: {e}", item.code);
                    Quote::default()
                }
            };

            let pct = quote.price.and_then(|price| pnl_pct(item.entry_price, price));
            let status = pct.map(classify_position);

            if notify {
                if let (Some(pct), Some(status)) = (pct, status) {
                    if status.is_alert() {
                        let message =
                            format!("{}: {status} at {pct:+.1}% from entry", item.code);
                        if let Err(e) = self.notifier.notify(&message).await {
                            warn!("notification failed for {}: {e}", item.code);
                        }
                    }
                }
            }

            rows.push(PositionReport {
                code: item.code,
                entry_price: item.entry_price,
                price: quote.price,
                pnl_pct: pct,
                status,
            });
        }

        Ok(rows)
    }
}
