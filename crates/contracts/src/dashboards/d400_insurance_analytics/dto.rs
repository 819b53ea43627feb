use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chart::{CategoryChart, TreemapChart};

/// Categorical column that the sidebar can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterColumn {
    Region,
    Location,
    Construction,
}

impl FilterColumn {
    /// All filter columns in sidebar order
    pub const ALL: [FilterColumn; 3] = [
        FilterColumn::Region,
        FilterColumn::Location,
        FilterColumn::Construction,
    ];

    /// Column header as it appears in the spreadsheet
    pub fn column_name(&self) -> &'static str {
        match self {
            FilterColumn::Region => "Region",
            FilterColumn::Location => "Location",
            FilterColumn::Construction => "Construction",
        }
    }

    /// Multi-select label shown in the sidebar
    pub fn label(&self) -> &'static str {
        match self {
            FilterColumn::Region => "Select region",
            FilterColumn::Location => "Select location",
            FilterColumn::Construction => "Select construction",
        }
    }
}

/// Requested filter selection.
///
/// `None` means "default" (every distinct value of the column),
/// `Some(vec![])` is an explicit empty selection and yields zero rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction: Option<Vec<String>>,
}

impl SelectionRequest {
    pub fn get(&self, column: FilterColumn) -> Option<&[String]> {
        match column {
            FilterColumn::Region => self.region.as_deref(),
            FilterColumn::Location => self.location.as_deref(),
            FilterColumn::Construction => self.construction.as_deref(),
        }
    }

    pub fn set(&mut self, column: FilterColumn, values: Option<Vec<String>>) {
        match column {
            FilterColumn::Region => self.region = values,
            FilterColumn::Location => self.location = values,
            FilterColumn::Construction => self.construction = values,
        }
    }
}

/// Distinct values of one filter column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptionSet {
    pub column: FilterColumn,
    pub label: String,
    /// Distinct values in first-appearance order
    pub options: Vec<String>,
}

/// Response for GET /api/d400/meta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetaResponse {
    pub title: String,
    pub currency: String,
    pub sidebar_caption: String,
    /// Sidebar image URL, served next to the frontend
    #[serde(default)]
    pub logo: Option<String>,
    /// Number of rows in the full table
    pub total_rows: usize,
    /// When the spreadsheet was read
    pub loaded_at: DateTime<Utc>,
    /// Every column of the sheet, in file order (for the tabular view)
    pub columns: Vec<String>,
    pub filters: Vec<FilterOptionSet>,
}

/// Request body for POST /api/d400/dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardRequest {
    #[serde(default)]
    pub selection: SelectionRequest,
}

/// One summary metric ("st.metric"-style card)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub id: String,
    /// Heading shown in the info box above the value
    pub heading: String,
    /// Small label next to the value (e.g. "sum TZS")
    pub label: String,
    /// Formatted value ready for display
    pub value: String,
    /// Raw value, `None` when there is no data
    pub raw_value: Option<f64>,
    pub help: Option<String>,
}

/// Response for POST /api/d400/dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Rows in the filtered view
    pub row_count: usize,
    /// Rows in the full table
    pub total_rows: usize,
    pub metrics: Vec<MetricCard>,
    /// Line chart by State and bar chart by BusinessType
    pub trend_charts: Vec<CategoryChart>,
    /// Donut pies: Region, State, Location, BusinessType
    pub pie_charts: Vec<CategoryChart>,
    pub treemap: TreemapChart,
}

/// Request body for POST /api/d400/table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabularRequest {
    #[serde(default)]
    pub selection: SelectionRequest,
    /// Columns to show, in the requested order
    #[serde(default)]
    pub columns: Vec<String>,
}

/// Filtered rows projected onto the requested columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
}
