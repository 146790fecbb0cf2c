//! Tests for portfolio metrics.

use arta_shared::types::{InvestmentId, Money};
use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;

use super::error::InvestmentError;
use super::metrics::portfolio_metrics;
use super::types::{Investment, InvestmentCategory, NewInvestment};

fn holding(category: InvestmentCategory, contribution: i64, value: i64) -> Investment {
    Investment {
        id: InvestmentId::new(),
        name: "BBCA".to_string(),
        category,
        monthly_contribution: Money::new(contribution),
        current_value: Money::new(value),
        purchase_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        notes: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_empty_portfolio() {
    let metrics = portfolio_metrics(&[]);

    assert_eq!(metrics.total_value, Money::ZERO);
    assert_eq!(metrics.total_contributed, Money::ZERO);
    assert_eq!(metrics.total_gain, Money::ZERO);
    assert_eq!(metrics.gain_percent, dec!(0));
    assert_eq!(metrics.by_category.len(), 3);
    assert_eq!(
        metrics.by_category[&InvestmentCategory::Saham].count,
        0
    );
}

#[test]
fn test_totals_and_category_breakdown() {
    let holdings = vec![
        holding(InvestmentCategory::Saham, 1_000_000, 1_250_000),
        holding(InvestmentCategory::Saham, 500_000, 450_000),
        holding(InvestmentCategory::Emas, 2_000_000, 2_300_000),
    ];

    let metrics = portfolio_metrics(&holdings);
    assert_eq!(metrics.total_contributed, Money::new(3_500_000));
    assert_eq!(metrics.total_value, Money::new(4_000_000));
    assert_eq!(metrics.total_gain, Money::new(500_000));
    // 500_000 / 3_500_000 = 14.2857...% -> 14.29.
    assert_eq!(metrics.gain_percent, dec!(14.29));

    let saham = &metrics.by_category[&InvestmentCategory::Saham];
    assert_eq!(saham.count, 2);
    assert_eq!(saham.total_contributed, Money::new(1_500_000));
    assert_eq!(saham.total_value, Money::new(1_700_000));
    assert_eq!(saham.total_gain, Money::new(200_000));

    let reksadana = &metrics.by_category[&InvestmentCategory::Reksadana];
    assert_eq!(reksadana.count, 0);
    assert_eq!(reksadana.total_gain, Money::ZERO);
}

#[test]
fn test_gain_may_be_negative() {
    let holdings = vec![holding(InvestmentCategory::Reksadana, 1_000_000, 800_000)];

    let metrics = portfolio_metrics(&holdings);
    assert_eq!(metrics.total_gain, Money::new(-200_000));
    assert!(metrics.total_gain.is_negative());
    assert_eq!(metrics.gain_percent, dec!(-20.00));
}

#[test]
fn test_new_investment_validation() {
    let valid = NewInvestment {
        name: "Emas Antam".to_string(),
        category: InvestmentCategory::Emas,
        monthly_contribution: Money::new(1_000_000),
        current_value: Money::new(1_100_000),
        purchase_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        notes: String::new(),
    };
    assert!(valid.validate().is_ok());

    let empty_name = NewInvestment {
        name: String::new(),
        ..valid.clone()
    };
    assert_eq!(empty_name.validate(), Err(InvestmentError::NameLength));

    let zero_value = NewInvestment {
        current_value: Money::ZERO,
        ..valid
    };
    assert_eq!(zero_value.validate(), Err(InvestmentError::NonPositiveAmount));
}
