//! Derived fundamentals metrics from a pair of successive disclosures.
//!
//! All figures are percentages:
//! - growth = (current op profit − prior op profit) / |prior op profit| × 100
//! - margin = current op profit / current net sales × 100
//! - ROE = current net income / current net assets × 100
//! - equity ratio = current net assets / current total assets × 100
//!
//! Growth and margin are mandatory; when either guard fails the pair is
//! not evaluable and no metrics are produced. ROE and the equity ratio
//! are optional: a non-positive denominator leaves them unknown rather
//! than zero, and downstream must check before rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::disclosure::Disclosure;

/// Denominator policy for the growth rate.
///
/// Successive revisions of this screen disagreed on what to do with a
/// prior-period loss. The strict policy refuses to rate the swing; the
/// relaxed policy rates it against the absolute prior figure, so a
/// loss-to-profit turnaround shows up as strong growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrowthPolicy {
    /// Growth is defined only when the prior operating profit is strictly positive.
    #[default]
    StrictPositivePrior,
    /// Growth is defined whenever the prior operating profit is non-zero.
    NonzeroPrior,
}

impl fmt::Display for GrowthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthPolicy::StrictPositivePrior => write!(f, "strict-positive-prior"),
            GrowthPolicy::NonzeroPrior => write!(f, "nonzero-prior"),
        }
    }
}

impl FromStr for GrowthPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" | "strict-positive-prior" => Ok(GrowthPolicy::StrictPositivePrior),
            "nonzero" | "nonzero-prior" => Ok(GrowthPolicy::NonzeroPrior),
            _ => Err(format!("Unknown growth policy: {s}")),
        }
    }
}

/// Metrics derived for one company in one screening pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Operating profit growth, percent. Signed and unbounded.
    pub growth: f64,
    /// Operating margin of the current period, percent.
    pub margin: f64,
    /// Return on equity, percent. `None` when equity is non-positive.
    pub roe: Option<f64>,
    /// Equity ratio, percent. `None` when total assets are non-positive.
    pub equity_ratio: Option<f64>,
}

/// Derive the metric set from an ordered `(prior, current)` filing pair.
///
/// Missing or unparseable figures count as zero going in, which the
/// denominator guards then turn into "not evaluable" (growth, margin) or
/// "unknown" (ROE, equity ratio) instead of a spurious ratio.
///
/// Returns `None` when the growth or margin guard fails; the company is
/// not evaluable this pass.
pub fn derive_metrics(
    prior: &Disclosure,
    current: &Disclosure,
    policy: GrowthPolicy,
) -> Option<DerivedMetrics> {
    let op_prior = prior.operating_profit.unwrap_or(0.0);
    let op_now = current.operating_profit.unwrap_or(0.0);
    let sales_now = current.net_sales.unwrap_or(0.0);

    let growth_defined = match policy {
        GrowthPolicy::StrictPositivePrior => op_prior > 0.0,
        GrowthPolicy::NonzeroPrior => op_prior != 0.0,
    };
    if !growth_defined || sales_now <= 0.0 {
        return None;
    }

    let growth = (op_now - op_prior) / op_prior.abs() * 100.0;
    let margin = op_now / sales_now * 100.0;

    let net_income = current.net_income.unwrap_or(0.0);
    let net_assets = current.net_assets.unwrap_or(0.0);
    let total_assets = current.total_assets.unwrap_or(0.0);

    let roe = (net_assets > 0.0).then(|| net_income / net_assets * 100.0);
    let equity_ratio = (total_assets > 0.0).then(|| net_assets / total_assets * 100.0);

    Some(DerivedMetrics {
        growth,
        margin,
        roe,
        equity_ratio,
    })
}
