use contracts::dashboards::d400_insurance_analytics::CategoryChart;
use leptos::prelude::*;

use super::chart_frame::ChartFrame;
use super::geometry::{nice_ticks, palette_color, scale};
use crate::shared::number_format::format_axis_value;

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 360.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 56.0;
const MARGIN_LEFT: f64 = 56.0;

/// x position of the i-th of `count` evenly spaced categories
pub fn category_x(index: usize, count: usize, plot_w: f64) -> f64 {
    if count <= 1 {
        plot_w / 2.0
    } else {
        index as f64 * plot_w / (count - 1) as f64
    }
}

/// Line chart with one marker per category and a tick label under every
/// category when the chart asks for linear ticks.
#[component]
pub fn LineChart(chart: CategoryChart) -> impl IntoView {
    let color = chart
        .style
        .color_sequence
        .first()
        .cloned()
        .unwrap_or_else(|| palette_color(0).to_string());

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let ticks = nice_ticks(chart.max_value(), 5);
    let axis_max = ticks.last().copied().unwrap_or(1.0);
    let count = chart.points.len();

    let coords: Vec<(f64, f64)> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            (
                MARGIN_LEFT + category_x(i, count, plot_w),
                MARGIN_TOP + plot_h - scale(point.value, axis_max, plot_h),
            )
        })
        .collect();

    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    let grid = ticks
        .iter()
        .map(|tick| {
            let y = MARGIN_TOP + plot_h - scale(*tick, axis_max, plot_h);
            view! {
                <line
                    x1=format!("{:.1}", MARGIN_LEFT) y1=format!("{:.1}", y)
                    x2=format!("{:.1}", MARGIN_LEFT + plot_w) y2=format!("{:.1}", y)
                    stroke="#ebf0f8"
                />
                <text x=format!("{:.1}", MARGIN_LEFT - 6.0) y=format!("{:.1}", y + 4.0) text-anchor="end" font-size="11" fill="#444">
                    {format_axis_value(*tick)}
                </text>
            }
        })
        .collect_view();

    let show_labels = chart.style.linear_ticks || count <= 12;
    let markers = chart
        .points
        .iter()
        .zip(coords.iter())
        .map(|(point, (x, y))| {
            let label = show_labels.then(|| {
                view! {
                    <text
                        x=format!("{:.1}", x) y=format!("{:.1}", MARGIN_TOP + plot_h + 16.0)
                        text-anchor="end" font-size="11" fill="#444"
                        transform=format!("rotate(-30 {:.1} {:.1})", x, MARGIN_TOP + plot_h + 16.0)
                    >
                        {point.category.clone()}
                    </text>
                }
            });
            view! {
                <circle cx=format!("{:.1}", x) cy=format!("{:.1}", y) r="4" fill=color.clone() />
                {label}
            }
        })
        .collect_view();

    view! {
        <ChartFrame title=chart.title.clone() empty=chart.is_empty()>
            <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) width="100%" class="chart chart--line">
                {grid}
                <polyline points=polyline fill="none" stroke=color.clone() stroke-width="2" />
                {markers}
            </svg>
        </ChartFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_x_spreads_points() {
        assert_eq!(category_x(0, 3, 200.0), 0.0);
        assert_eq!(category_x(1, 3, 200.0), 100.0);
        assert_eq!(category_x(2, 3, 200.0), 200.0);
        assert_eq!(category_x(0, 1, 200.0), 100.0);
    }
}
