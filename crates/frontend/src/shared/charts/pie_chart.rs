use contracts::dashboards::d400_insurance_analytics::{CategoryChart, TextPosition};
use leptos::prelude::*;

use super::chart_frame::ChartFrame;
use super::geometry::{donut_path, palette_color, pie_slices, polar};

const WIDTH: f64 = 420.0;
const HEIGHT: f64 = 340.0;
const RADIUS: f64 = 110.0;

/// Donut (or full pie when `hole` is unset) with per-slice labels
#[component]
pub fn PieChart(chart: CategoryChart) -> impl IntoView {
    let cx = WIDTH / 2.0;
    let cy = HEIGHT / 2.0;
    let inner = RADIUS * chart.style.hole.unwrap_or(0.0);
    let outside = chart.style.text_position != Some(TextPosition::Inside);

    let values: Vec<f64> = chart.points.iter().map(|p| p.value).collect();
    let slices = pie_slices(&values);
    let empty = chart.is_empty() || slices.is_empty();

    let segments = chart
        .points
        .iter()
        .zip(slices.iter())
        .enumerate()
        .filter(|(_, (_, slice))| slice.fraction > 0.0)
        .map(|(i, (point, slice))| {
            let label_radius = if outside {
                RADIUS + 18.0
            } else {
                (RADIUS + inner) / 2.0
            };
            let (lx, ly) = polar(cx, cy, label_radius, slice.mid_angle());
            let anchor = if !outside {
                "middle"
            } else if lx >= cx {
                "start"
            } else {
                "end"
            };
            let text = point.text.clone().unwrap_or_else(|| point.category.clone());
            view! {
                <path d=donut_path(cx, cy, RADIUS, inner, slice) fill=palette_color(i) stroke="#fff" stroke-width="1" />
                <text x=format!("{:.1}", lx) y=format!("{:.1}", ly + 4.0) text-anchor=anchor font-size="11" fill="#444">
                    {format!("{} ({:.1}%)", text, slice.fraction * 100.0)}
                </text>
            }
        })
        .collect_view();

    view! {
        <ChartFrame title=chart.title.clone() empty=empty>
            <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) width="100%" class="chart chart--pie">
                {segments}
            </svg>
        </ChartFrame>
    }
}
