//! Staged profit/loss alerts for watched positions.

use serde::Serialize;
use std::fmt;

/// Alert tier for a watched position, from the signed percentage move
/// since entry. Loss tiers are checked before profit tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionStatus {
    /// Down 10% or more.
    StopLoss,
    /// Down 3% or more.
    Caution,
    /// Up 20% or more.
    TakeProfit,
    /// Up 5% or more.
    Rising,
    /// Inside the alert bands.
    Watching,
}

impl PositionStatus {
    /// Whether this status is worth pushing out as a notification.
    pub fn is_alert(&self) -> bool {
        !matches!(self, PositionStatus::Watching)
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionStatus::StopLoss => write!(f, "stop-loss"),
            PositionStatus::Caution => write!(f, "caution"),
            PositionStatus::TakeProfit => write!(f, "take-profit"),
            PositionStatus::Rising => write!(f, "rising"),
            PositionStatus::Watching => write!(f, "watching"),
        }
    }
}

/// Signed percentage move from entry price to current price.
/// `None` when the entry price is not positive.
pub fn pnl_pct(entry: f64, current: f64) -> Option<f64> {
    (entry > 0.0).then(|| (current - entry) / entry * 100.0)
}

/// Map a signed percentage move onto its alert tier.
pub fn classify_position(pct: f64) -> PositionStatus {
    if pct <= -10.0 {
        PositionStatus::StopLoss
    } else if pct <= -3.0 {
        PositionStatus::Caution
    } else if pct >= 20.0 {
        PositionStatus::TakeProfit
    } else if pct >= 5.0 {
        PositionStatus::Rising
    } else {
        PositionStatus::Watching
    }
}
