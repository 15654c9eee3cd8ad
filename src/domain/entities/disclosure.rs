use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One periodic financial filing for a company.
///
/// Numeric fields are `None` when the upstream payload omitted them or
/// carried something unparseable; the metric deriver decides what a
/// missing figure means, not the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disclosure {
    /// Date the filing was disclosed. Used only for ordering.
    pub disclosed_date: NaiveDate,
    /// Operating profit for the period. Signed; losses are negative.
    pub operating_profit: Option<f64>,
    pub net_sales: Option<f64>,
    /// Net income attributable to owners of the parent. Signed.
    pub net_income: Option<f64>,
    pub total_assets: Option<f64>,
    /// Net assets (equity).
    pub net_assets: Option<f64>,
}

/// Order a company's disclosure history by date ascending and return the
/// last two filings as `(prior, current)`.
///
/// Fewer than two filings means the company cannot be evaluated this pass.
pub fn latest_pair(mut disclosures: Vec<Disclosure>) -> Option<(Disclosure, Disclosure)> {
    if disclosures.len() < 2 {
        return None;
    }
    disclosures.sort_by_key(|d| d.disclosed_date);
    let current = disclosures.pop()?;
    let prior = disclosures.pop()?;
    Some((prior, current))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filing(date: &str, operating_profit: f64) -> Disclosure {
        Disclosure {
            disclosed_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            operating_profit: Some(operating_profit),
            net_sales: None,
            net_income: None,
            total_assets: None,
            net_assets: None,
        }
    }

    #[test]
    fn test_latest_pair_sorts_unordered_history() {
        let history = vec![
            filing("2025-05-10", 300.0),
            filing("2024-05-10", 100.0),
            filing("2024-11-10", 200.0),
        ];

        let (prior, current) = latest_pair(history).unwrap();
        assert_eq!(prior.operating_profit, Some(200.0));
        assert_eq!(current.operating_profit, Some(300.0));
    }

    #[test]
    fn test_latest_pair_needs_two_filings() {
        assert!(latest_pair(vec![]).is_none());
        assert!(latest_pair(vec![filing("2025-05-10", 100.0)]).is_none());
    }

    #[test]
    fn test_latest_pair_exactly_two() {
        let history = vec![filing("2025-05-10", 2.0), filing("2024-05-10", 1.0)];
        let (prior, current) = latest_pair(history).unwrap();
        assert_eq!(prior.operating_profit, Some(1.0));
        assert_eq!(current.operating_profit, Some(2.0));
    }
}
