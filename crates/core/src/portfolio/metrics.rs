//! Portfolio aggregation.

use std::collections::BTreeMap;

use arta_shared::types::Money;
use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{CategoryMetrics, Investment, InvestmentCategory, PortfolioMetrics};

/// Aggregates holdings into portfolio totals and a per-category breakdown.
///
/// Gains are current value minus contributions and may be negative. The
/// gain percentage is zero when nothing has been contributed.
#[must_use]
pub fn portfolio_metrics(investments: &[Investment]) -> PortfolioMetrics {
    let mut by_category: BTreeMap<InvestmentCategory, CategoryMetrics> = InvestmentCategory::ALL
        .into_iter()
        .map(|category| (category, CategoryMetrics::default()))
        .collect();

    let mut total_value = Money::ZERO;
    let mut total_contributed = Money::ZERO;

    for investment in investments {
        total_value = total_value.add(investment.current_value);
        total_contributed = total_contributed.add(investment.monthly_contribution);

        if let Some(metrics) = by_category.get_mut(&investment.category) {
            metrics.count += 1;
            metrics.total_value = metrics.total_value.add(investment.current_value);
            metrics.total_contributed = metrics
                .total_contributed
                .add(investment.monthly_contribution);
        }
    }

    for metrics in by_category.values_mut() {
        metrics.total_gain = metrics.total_value.subtract(metrics.total_contributed);
    }

    let total_gain = total_value.subtract(total_contributed);
    let gain_percent = if total_contributed > Money::ZERO {
        (Decimal::from(total_gain.rupiah()) / Decimal::from(total_contributed.rupiah())
            * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    PortfolioMetrics {
        total_contributed,
        total_value,
        total_gain,
        gain_percent,
        by_category,
    }
}
