//! Group-by / sum / count / mean / median over a [`FilteredView`].
//!
//! Every function is deterministic: grouped results are keyed in ascending
//! key order, and empty input gives zero or `None`, never a panic.

use std::collections::BTreeMap;

use super::filter::FilteredView;
use super::model::{Dimension, PolicyRecord};

/// Value of one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupValue {
    pub key: String,
    pub value: f64,
}

/// Value of one (outer, inner) group
#[derive(Debug, Clone, PartialEq)]
pub struct PairGroupValue {
    pub outer: String,
    pub inner: String,
    pub value: f64,
}

/// Scalar summary of the view
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentSummary {
    /// Sum of numeric Investment values, 0 when there are none
    pub total_investment: f64,
    /// `None` when there are no numeric Investment values
    pub average_investment: Option<f64>,
    pub median_investment: Option<f64>,
    /// Sum of numeric Rating values, 0 when there are none
    pub total_rating: f64,
}

/// Every aggregate the dashboard shows, computed fresh per request
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub summary: InvestmentSummary,
    /// Row counts by BusinessType, ascending by count
    pub count_by_business_type: Vec<GroupValue>,
    pub count_by_state: Vec<GroupValue>,
    pub investment_by_region: Vec<GroupValue>,
    pub investment_by_state: Vec<GroupValue>,
    pub investment_by_location: Vec<GroupValue>,
    pub investment_by_business_type: Vec<GroupValue>,
    pub investment_by_state_and_business_type: Vec<PairGroupValue>,
}

pub fn compute(view: &FilteredView<'_>) -> Aggregates {
    Aggregates {
        summary: summarize(view),
        count_by_business_type: sort_by_value(count_by(view, Dimension::BusinessType)),
        count_by_state: count_by(view, Dimension::State),
        investment_by_region: sum_by(view, Dimension::Region),
        investment_by_state: sum_by(view, Dimension::State),
        investment_by_location: sum_by(view, Dimension::Location),
        investment_by_business_type: sum_by(view, Dimension::BusinessType),
        investment_by_state_and_business_type: sum_by_pair(
            view,
            Dimension::State,
            Dimension::BusinessType,
        ),
    }
}

pub fn summarize(view: &FilteredView<'_>) -> InvestmentSummary {
    let investments: Vec<f64> = view.records().filter_map(|r| r.investment).collect();

    InvestmentSummary {
        total_investment: investments.iter().sum(),
        average_investment: mean(&investments),
        median_investment: median(investments.clone()),
        total_rating: view.records().filter_map(|r| r.rating).sum(),
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Median; the mean of the two middle values for an even count
pub fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Rows per distinct value of `dimension`. Rows whose Investment is
/// missing still count.
pub fn count_by(view: &FilteredView<'_>, dimension: Dimension) -> Vec<GroupValue> {
    group_by(view, dimension, |_| 1.0)
}

/// Sum of numeric Investment per distinct value of `dimension`.
///
/// A group whose values are all missing is kept with a sum of 0.
pub fn sum_by(view: &FilteredView<'_>, dimension: Dimension) -> Vec<GroupValue> {
    group_by(view, dimension, |r| r.investment.unwrap_or(0.0))
}

/// Two-level Investment sum, ordered by outer then inner key
pub fn sum_by_pair(
    view: &FilteredView<'_>,
    outer: Dimension,
    inner: Dimension,
) -> Vec<PairGroupValue> {
    let mut groups: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for record in view.records() {
        *groups
            .entry((outer.value(record), inner.value(record)))
            .or_insert(0.0) += record.investment.unwrap_or(0.0);
    }

    groups
        .into_iter()
        .map(|((outer, inner), value)| PairGroupValue {
            outer: outer.to_string(),
            inner: inner.to_string(),
            value,
        })
        .collect()
}

/// Stable ascending sort by value; ties keep key order
pub fn sort_by_value(mut groups: Vec<GroupValue>) -> Vec<GroupValue> {
    groups.sort_by(|a, b| a.value.total_cmp(&b.value));
    groups
}

fn group_by(
    view: &FilteredView<'_>,
    dimension: Dimension,
    measure: impl Fn(&PolicyRecord) -> f64,
) -> Vec<GroupValue> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for record in view.records() {
        *groups.entry(dimension.value(record)).or_insert(0.0) += measure(record);
    }

    groups
        .into_iter()
        .map(|(key, value)| GroupValue {
            key: key.to_string(),
            value,
        })
        .collect()
}
