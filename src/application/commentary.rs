//! Deterministic commentary rendering for qualifying companies.
//!
//! The narrative is assembled from fixed, independently-triggered
//! sentences. Identical inputs always render identical text, which the
//! golden-output tests rely on. An unknown ROE, equity ratio or
//! valuation multiple suppresses its sentence outright; a placeholder
//! would read like a judgment the data cannot support.

use crate::domain::values::metrics::DerivedMetrics;
use crate::domain::values::rank::Rank;

const GROWTH_STRONG: f64 = 20.0;
const MARGIN_STRONG: f64 = 10.0;
const ROE_EFFICIENT: f64 = 8.0;
const EQUITY_SOLID: f64 = 50.0;
const VALUATION_CHEAP: f64 = 15.0;

/// Render the explanation shown next to a screening result.
pub fn render_commentary(
    code: &str,
    rank: Rank,
    metrics: &DerivedMetrics,
    valuation_ratio: Option<f64>,
) -> String {
    let headline = format!(
        "{code} ranks {rank} on fundamentals: operating profit growth of {:.1}% on an operating margin of {:.1}%.",
        metrics.growth, metrics.margin
    );

    let mut sentences = Vec::new();

    if metrics.growth >= GROWTH_STRONG && metrics.margin >= MARGIN_STRONG {
        sentences.push(
            "Profit growth above 20% paired with a double-digit margin puts it in the top tier of the sector."
                .to_string(),
        );
    }
    if let Some(roe) = metrics.roe {
        if roe >= ROE_EFFICIENT {
            sentences.push(format!(
                "A return on equity of {roe:.1}% points to efficient use of shareholder capital."
            ));
        }
    }
    if let Some(equity_ratio) = metrics.equity_ratio {
        if equity_ratio >= EQUITY_SOLID {
            sentences.push(format!(
                "With an equity ratio of {equity_ratio:.1}% the balance sheet is solidly funded."
            ));
        }
    }
    if let Some(per) = valuation_ratio {
        if per < VALUATION_CHEAP {
            sentences.push(format!(
                "At {per:.1}x trailing earnings the shares look cheap for the growth on offer."
            ));
        }
    }

    if sentences.is_empty() {
        headline
    } else {
        format!("{headline}\n\n{}", sentences.join(" "))
    }
}
