pub mod bar_chart;
pub mod chart_frame;
pub mod geometry;
pub mod line_chart;
pub mod pie_chart;
pub mod treemap;

pub use bar_chart::BarChart;
pub use chart_frame::ChartFrame;
pub use line_chart::LineChart;
pub use pie_chart::PieChart;
pub use treemap::Treemap;

use contracts::dashboards::d400_insurance_analytics::{CategoryChart, ChartKind};
use leptos::prelude::*;

/// Picks the component for a category chart by its kind
#[component]
pub fn CategoryChartView(chart: CategoryChart) -> impl IntoView {
    match chart.kind {
        ChartKind::Line => view! { <LineChart chart=chart /> }.into_any(),
        ChartKind::Pie => view! { <PieChart chart=chart /> }.into_any(),
        ChartKind::Bar => view! { <BarChart chart=chart /> }.into_any(),
    }
}
