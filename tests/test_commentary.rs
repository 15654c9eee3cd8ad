//! Golden-output checks for the commentary renderer.

use sectorwatch::application::commentary::render_commentary;
use sectorwatch::domain::values::metrics::DerivedMetrics;
use sectorwatch::domain::values::rank::Rank;

#[test]
fn test_full_commentary_golden_output() {
    let metrics = DerivedMetrics {
        growth: 30.0,
        margin: 13.0,
        roe: Some(9.5),
        equity_ratio: Some(55.0),
    };

    let text = render_commentary("7203", Rank::S, &metrics, Some(12.0));
    assert_eq!(
        text,
        "7203 ranks S on fundamentals: operating profit growth of 30.0% on an operating margin of 13.0%.\n\n\
         Profit growth above 20% paired with a double-digit margin puts it in the top tier of the sector. \
         A return on equity of 9.5% points to efficient use of shareholder capital. \
         With an equity ratio of 55.0% the balance sheet is solidly funded. \
         At 12.0x trailing earnings the shares look cheap for the growth on offer."
    );
}

#[test]
fn test_headline_only_golden_output() {
    let metrics = DerivedMetrics {
        growth: 11.5,
        margin: 4.2,
        roe: None,
        equity_ratio: None,
    };

    let text = render_commentary("6758", Rank::A, &metrics, None);
    assert_eq!(
        text,
        "6758 ranks A on fundamentals: operating profit growth of 11.5% on an operating margin of 4.2%."
    );
}

#[test]
fn test_identical_inputs_render_identical_text() {
    let metrics = DerivedMetrics {
        growth: 22.0,
        margin: 10.5,
        roe: Some(8.0),
        equity_ratio: None,
    };

    let first = render_commentary("4063", Rank::S, &metrics, Some(14.9));
    let second = render_commentary("4063", Rank::S, &metrics, Some(14.9));
    assert_eq!(first, second);
}
