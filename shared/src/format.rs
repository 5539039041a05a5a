//! Display rules for estimator outputs
//!
//! Carbon is shown as whole tons, dollar amounts as whole dollars with comma
//! grouping, and the education budget in millions with one decimal.
//! Rounding is ties-to-even throughout.

use serde::{Deserialize, Serialize};

use crate::estimator::ImpactEstimate;

/// Group the digits of a whole number in threes: `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

fn whole_dollars(usd: f64) -> u64 {
    usd.max(0.0).round_ties_even() as u64
}

/// `90 tons`
pub fn format_carbon_tons(tons: f64) -> String {
    format!("{:.0} tons", tons.round_ties_even())
}

/// `$40,000/year`
pub fn format_income(usd: f64) -> String {
    format!("${}/year", group_thousands(whole_dollars(usd)))
}

/// `$360`
pub fn format_toolkit_cost(usd: f64) -> String {
    format!("${}", group_thousands(whole_dollars(usd)))
}

/// `$18.0M`
pub fn format_budget_millions(usd: f64) -> String {
    format!("${:.1}M", usd / 1_000_000.0)
}

/// The three land-impact metrics ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandImpactDisplay {
    pub carbon: String,
    pub income: String,
    pub toolkit_cost: String,
}

impl From<&ImpactEstimate> for LandImpactDisplay {
    fn from(estimate: &ImpactEstimate) -> Self {
        Self {
            carbon: format_carbon_tons(estimate.carbon_tons),
            income: format_income(estimate.income_usd),
            toolkit_cost: format_toolkit_cost(estimate.toolkit_cost_usd),
        }
    }
}
