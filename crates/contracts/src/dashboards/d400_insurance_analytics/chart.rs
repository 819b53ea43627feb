use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextPosition {
    Inside,
    Outside,
}

/// Styling hints passed through to the chart renderer untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub orientation: Orientation,
    /// Colours applied to categories in order (cycled when shorter)
    pub color_sequence: Vec<String>,
    /// Renderer template name, e.g. "plotly_white"
    pub template: String,
    /// Donut hole as a fraction of the radius (pie only)
    pub hole: Option<f64>,
    pub text_position: Option<TextPosition>,
    /// Treemap text, e.g. "label+value"
    pub text_info: Option<String>,
    /// Treemap: name of the path level used to pick colours
    pub color_by: Option<String>,
    /// Category axis shows every tick
    pub linear_ticks: bool,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            color_sequence: Vec::new(),
            template: "plotly_white".to_string(),
            hole: None,
            text_position: None,
            text_info: None,
            color_by: None,
            linear_ticks: false,
            height: None,
            width: None,
        }
    }
}

/// One category with its value (a bar, a line point or a pie slice)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    pub value: f64,
    /// Text drawn next to the mark (pie slices carry their label)
    pub text: Option<String>,
}

/// Bar, line or pie chart over category/value pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChart {
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    /// Name of the category dimension (e.g. "State")
    pub category_label: String,
    /// Name of the value (e.g. "Investment")
    pub value_label: String,
    pub points: Vec<CategoryValue>,
    pub style: ChartStyle,
}

impl CategoryChart {
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Node of a treemap hierarchy.
///
/// A node's value is the sum of its children's values; leaves carry the
/// aggregated value directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapNode {
    /// Full path joined with "/" (unique within the chart)
    pub id: String,
    pub label: String,
    /// Depth in the hierarchy (0 = first path level)
    pub level: usize,
    pub value: f64,
    pub children: Vec<TreemapNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapChart {
    pub id: String,
    pub title: String,
    /// Path levels from outermost to innermost (e.g. ["State", "BusinessType"])
    pub path: Vec<String>,
    pub value_label: String,
    pub roots: Vec<TreemapNode>,
    pub style: ChartStyle,
}

impl TreemapChart {
    pub fn total(&self) -> f64 {
        self.roots.iter().map(|n| n.value).sum()
    }
}
