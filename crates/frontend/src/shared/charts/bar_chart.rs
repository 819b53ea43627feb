use contracts::dashboards::d400_insurance_analytics::{CategoryChart, Orientation};
use leptos::prelude::*;

use super::chart_frame::ChartFrame;
use super::geometry::{nice_ticks, palette_color, scale};
use crate::shared::number_format::{format_axis_value, format_number_int};

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 360.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 48.0;
const MARGIN_LEFT: f64 = 110.0;

/// Bar chart; horizontal bars grow right from a category axis on the left,
/// vertical bars grow up from a category axis at the bottom.
#[component]
pub fn BarChart(chart: CategoryChart) -> impl IntoView {
    let color = chart
        .style
        .color_sequence
        .first()
        .cloned()
        .unwrap_or_else(|| palette_color(0).to_string());
    let horizontal = chart.style.orientation == Orientation::Horizontal;

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let ticks = nice_ticks(chart.max_value(), 5);
    let axis_max = ticks.last().copied().unwrap_or(1.0);
    let band = (if horizontal { plot_h } else { plot_w }) / chart.points.len().max(1) as f64;

    let grid = ticks
        .iter()
        .map(|tick| {
            let offset = scale(*tick, axis_max, if horizontal { plot_w } else { plot_h });
            let (x1, y1, x2, y2, tx, ty, anchor) = if horizontal {
                let x = MARGIN_LEFT + offset;
                (x, MARGIN_TOP, x, MARGIN_TOP + plot_h, x, MARGIN_TOP + plot_h + 16.0, "middle")
            } else {
                let y = MARGIN_TOP + plot_h - offset;
                (MARGIN_LEFT, y, MARGIN_LEFT + plot_w, y, MARGIN_LEFT - 6.0, y + 4.0, "end")
            };
            view! {
                <line
                    x1=format!("{:.1}", x1) y1=format!("{:.1}", y1)
                    x2=format!("{:.1}", x2) y2=format!("{:.1}", y2)
                    stroke="#ebf0f8"
                />
                <text x=format!("{:.1}", tx) y=format!("{:.1}", ty) text-anchor=anchor font-size="11" fill="#444">
                    {format_axis_value(*tick)}
                </text>
            }
        })
        .collect_view();

    let bars = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let length = scale(point.value, axis_max, if horizontal { plot_w } else { plot_h });
            let thickness = band * 0.8;
            let start = i as f64 * band + band * 0.1;
            let (x, y, w, h) = if horizontal {
                (MARGIN_LEFT, MARGIN_TOP + start, length, thickness)
            } else {
                (MARGIN_LEFT + start, MARGIN_TOP + plot_h - length, thickness, length)
            };
            let (lx, ly, anchor) = if horizontal {
                (MARGIN_LEFT - 6.0, MARGIN_TOP + start + thickness / 2.0 + 4.0, "end")
            } else {
                (MARGIN_LEFT + start + thickness / 2.0, MARGIN_TOP + plot_h + 16.0, "middle")
            };
            let (vx, vy, value_anchor) = if horizontal {
                (x + w + 4.0, ly, "start")
            } else {
                (lx, y - 4.0, "middle")
            };
            view! {
                <rect
                    x=format!("{:.1}", x) y=format!("{:.1}", y)
                    width=format!("{:.1}", w) height=format!("{:.1}", h)
                    fill=color.clone()
                />
                <text x=format!("{:.1}", vx) y=format!("{:.1}", vy) text-anchor=value_anchor font-size="10" fill="#666">
                    {format_number_int(point.value)}
                </text>
                <text x=format!("{:.1}", lx) y=format!("{:.1}", ly) text-anchor=anchor font-size="11" fill="#444">
                    {point.category.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <ChartFrame title=chart.title.clone() empty=chart.is_empty()>
            <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) width="100%" class="chart chart--bar">
                {grid}
                {bars}
            </svg>
        </ChartFrame>
    }
}
