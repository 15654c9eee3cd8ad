//! Sector screening use case: walk a sector's listing one company at a
//! time and collect the S/A-rank fundamentals candidates.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use crate::application::commentary::render_commentary;
use crate::domain::entities::disclosure::latest_pair;
use crate::domain::error::DomainError;
use crate::domain::ports::auth_session::AuthSession;
use crate::domain::ports::disclosure_store::DisclosureStore;
use crate::domain::ports::listing_directory::ListingDirectory;
use crate::domain::ports::price_lookup::{PriceLookup, Quote};
use crate::domain::ports::progress_sink::ProgressSink;
use crate::domain::values::metrics::{derive_metrics, DerivedMetrics, GrowthPolicy};
use crate::domain::values::rank::{classify_rank, Rank};

/// Cooperative cancellation flag, checked between companies only.
/// Results are appended after a company fully resolves, so cancelling
/// never leaves a half-processed record behind.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One qualifying company from a screening pass.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningResult {
    pub code: String,
    pub rank: Rank,
    pub metrics: DerivedMetrics,
    pub price: Option<f64>,
    pub valuation_ratio: Option<f64>,
    pub commentary: String,
}

/// Outcome of a completed (or cancelled) screening pass.
///
/// An empty `results` with a non-zero `companies_screened` is the normal
/// "no matches" outcome, distinct from a pass that refused to start.
#[derive(Debug, Serialize)]
pub struct SectorScreenReport {
    pub sector: String,
    pub policy: GrowthPolicy,
    pub companies_screened: usize,
    pub skipped_not_evaluable: usize,
    pub skipped_below_rank: usize,
    pub cancelled: bool,
    pub results: Vec<ScreeningResult>,
}

pub struct ScreenSectorUseCase {
    listing: Arc<dyn ListingDirectory>,
    disclosures: Arc<dyn DisclosureStore>,
    prices: Arc<dyn PriceLookup>,
    progress: Arc<dyn ProgressSink>,
    policy: GrowthPolicy,
}

impl ScreenSectorUseCase {
    pub fn new(
        listing: Arc<dyn ListingDirectory>,
        disclosures: Arc<dyn DisclosureStore>,
        prices: Arc<dyn PriceLookup>,
        progress: Arc<dyn ProgressSink>,
        policy: GrowthPolicy,
    ) -> Self {
        Self {
            listing,
            disclosures,
            prices,
            progress,
            policy,
        }
    }

    /// Screen every company in `sector` (truncated to `limit`) and collect
    /// the qualifying candidates in listing order.
    ///
    /// The only error is an unusable session. Every collaborator failure
    /// past that point degrades to a skip or an absent figure and shows up
    /// in the report's counters instead.
    pub async fn execute(
        &self,
        sector: &str,
        limit: usize,
        session: &dyn AuthSession,
        cancel: &CancelToken,
    ) -> Result<SectorScreenReport, DomainError> {
        if !session.is_valid() {
            return Err(DomainError::Config(
                "no valid provider session; check the refresh token".into(),
            ));
        }

        let mut codes = match self.listing.codes_in_sector(sector, session).await {
            Ok(codes) => codes,
            Err(e) => {
                warn!("listing lookup failed for sector '{sector}': {e}");
                Vec::new()
            }
        };
        codes.truncate(limit);
        let total = codes.len();

        let mut report = SectorScreenReport {
            sector: sector.to_string(),
            policy: self.policy,
            companies_screened: 0,
            skipped_not_evaluable: 0,
            skipped_below_rank: 0,
            cancelled: false,
            results: Vec::new(),
        };

        for (i, code) in codes.iter().enumerate() {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            self.progress.report((i + 1) as f64 / total as f64, code);
            report.companies_screened += 1;

            // A fetch failure and a thin filing history are the same
            // expected outcome: the company is not evaluable this pass.
            let history = match self.disclosures.fetch(code, session).await {
                Ok(history) => history,
                Err(e) => {
                    debug!("disclosure fetch failed for {code}: {e}");
                    Vec::new()
                }
            };
            let Some((prior, current)) = latest_pair(history) else {
                report.skipped_not_evaluable += 1;
                continue;
            };
            let Some(metrics) = derive_metrics(&prior, &current, self.policy) else {
                report.skipped_not_evaluable += 1;
                continue;
            };

            let rank = classify_rank(metrics.growth, metrics.margin);
            if !rank.qualifies() {
                report.skipped_below_rank += 1;
                continue;
            }

            // Price is best-effort; a dead quote source must not drop a
            // qualifying result.
            let quote = match self.prices.current(code).await {
                Ok(quote) => quote,
                Err(e) => {
                    debug!("price lookup failed for {code}: {e}");
                    Quote::default()
                }
            };

            let commentary = render_commentary(code, rank, &metrics, quote.valuation_ratio);

            report.results.push(ScreeningResult {
                code: code.clone(),
                rank,
                metrics,
                price: quote.price,
                valuation_ratio: quote.valuation_ratio,
                commentary,
            });
        }

        Ok(report)
    }
}
