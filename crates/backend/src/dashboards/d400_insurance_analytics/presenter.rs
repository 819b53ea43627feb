//! Reshapes aggregates into metric cards and chart specs.
//!
//! Nothing here computes new statistics; values come straight from
//! [`Aggregates`] and are only formatted or re-grouped for display.

use contracts::dashboards::d400_insurance_analytics::{
    CategoryChart, CategoryValue, ChartKind, ChartStyle, MetricCard, Orientation, TabularView,
    TextPosition, TreemapChart,
};

use super::aggregate::{Aggregates, GroupValue, InvestmentSummary};
use super::filter::FilteredView;
use super::model::Dimension;
use super::selector::SelectionError;
use crate::shared::format::{format_thousands, numerize};
use crate::shared::pivot::{RawRow, TreeBuilder};

pub const CHART_COLOR: &str = "#0083b8";

/// Shown for a statistic that has no data
pub const NO_DATA: &str = "—";

const INVESTMENT: &str = "Investment";

pub fn metric_cards(summary: &InvestmentSummary, currency: &str) -> Vec<MetricCard> {
    let money = |value: Option<f64>| value.map(format_thousands).unwrap_or_else(|| NO_DATA.to_string());

    vec![
        MetricCard {
            id: "total_investment".to_string(),
            heading: "Total investment".to_string(),
            label: format!("sum {}", currency),
            value: money(Some(summary.total_investment)),
            raw_value: Some(summary.total_investment),
            help: None,
        },
        MetricCard {
            id: "average_investment".to_string(),
            heading: "Average investment".to_string(),
            label: format!("average {}", currency),
            value: money(summary.average_investment),
            raw_value: summary.average_investment,
            help: None,
        },
        MetricCard {
            id: "median_investment".to_string(),
            heading: "Central Earnings".to_string(),
            label: format!("median {}", currency),
            value: money(summary.median_investment),
            raw_value: summary.median_investment,
            help: None,
        },
        MetricCard {
            id: "total_rating".to_string(),
            heading: "Rating".to_string(),
            label: "Rating".to_string(),
            value: numerize(summary.total_rating, 2),
            raw_value: Some(summary.total_rating),
            help: Some(format!("Total Rating: {}", summary.total_rating)),
        },
    ]
}

/// Line chart of row counts by State and horizontal bar chart of row counts
/// by BusinessType
pub fn trend_charts(aggregates: &Aggregates) -> Vec<CategoryChart> {
    let accent = vec![CHART_COLOR.to_string()];

    vec![
        CategoryChart {
            id: "investment_by_state".to_string(),
            kind: ChartKind::Line,
            title: "Investment by State".to_string(),
            category_label: Dimension::State.column_name().to_string(),
            value_label: INVESTMENT.to_string(),
            points: points(&aggregates.count_by_state, false),
            style: ChartStyle {
                orientation: Orientation::Vertical,
                color_sequence: accent.clone(),
                linear_ticks: true,
                ..ChartStyle::default()
            },
        },
        CategoryChart {
            id: "investment_by_business_type".to_string(),
            kind: ChartKind::Bar,
            title: "Investment by Business Type".to_string(),
            category_label: Dimension::BusinessType.column_name().to_string(),
            value_label: INVESTMENT.to_string(),
            points: points(&aggregates.count_by_business_type, false),
            style: ChartStyle {
                orientation: Orientation::Horizontal,
                color_sequence: accent,
                ..ChartStyle::default()
            },
        },
    ]
}

/// Four donuts of Investment sums: Region, State, Location, BusinessType
pub fn pie_charts(aggregates: &Aggregates) -> Vec<CategoryChart> {
    [
        ("region", Dimension::Region, "Region", &aggregates.investment_by_region),
        ("state", Dimension::State, "State", &aggregates.investment_by_state),
        ("location", Dimension::Location, "Location", &aggregates.investment_by_location),
        (
            "business_type",
            Dimension::BusinessType,
            "Business Type",
            &aggregates.investment_by_business_type,
        ),
    ]
    .into_iter()
    .map(|(id, dimension, title, groups)| CategoryChart {
        id: format!("pie_{}", id),
        kind: ChartKind::Pie,
        title: format!("Investment by {}", title),
        category_label: dimension.column_name().to_string(),
        value_label: INVESTMENT.to_string(),
        points: points(groups, true),
        style: ChartStyle {
            hole: Some(0.5),
            text_position: Some(TextPosition::Outside),
            text_info: Some("label".to_string()),
            ..ChartStyle::default()
        },
    })
    .collect()
}

/// Investment by State then BusinessType; parents sum their children
pub fn treemap(aggregates: &Aggregates) -> TreemapChart {
    let builder = TreeBuilder::new(vec![
        Dimension::State.column_name().to_string(),
        Dimension::BusinessType.column_name().to_string(),
    ]);

    let rows: Vec<RawRow> = aggregates
        .investment_by_state_and_business_type
        .iter()
        .map(|pair| RawRow::new(vec![pair.outer.clone(), pair.inner.clone()], pair.value))
        .collect();

    TreemapChart {
        id: "treemap_state_business_type".to_string(),
        title: "Investment by State and Business Type".to_string(),
        path: builder.grouping_columns().to_vec(),
        value_label: INVESTMENT.to_string(),
        roots: builder.build(&rows),
        style: ChartStyle {
            color_by: Some(Dimension::BusinessType.column_name().to_string()),
            text_info: Some("label+value".to_string()),
            height: Some(700),
            width: Some(600),
            ..ChartStyle::default()
        },
    }
}

/// Projects the view onto `columns`, keeping file row order.
///
/// An empty column list gives an empty table with the row count kept.
pub fn tabular_view(
    view: &FilteredView<'_>,
    columns: &[String],
) -> Result<TabularView, SelectionError> {
    let table = view.table();
    let indices = columns
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| SelectionError::UnknownColumn(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rows = if indices.is_empty() {
        Vec::new()
    } else {
        view.records()
            .map(|record| {
                indices
                    .iter()
                    .map(|&i| record.cells.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    };

    Ok(TabularView {
        columns: columns.to_vec(),
        rows,
        row_count: view.len(),
    })
}

fn points(groups: &[GroupValue], label_text: bool) -> Vec<CategoryValue> {
    groups
        .iter()
        .map(|group| CategoryValue {
            category: group.key.clone(),
            value: group.value,
            text: label_text.then(|| group.key.clone()),
        })
        .collect()
}
