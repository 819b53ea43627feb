use contracts::dashboards::d400_insurance_analytics::TreemapChart;
use leptos::prelude::*;

use super::chart_frame::ChartFrame;
use super::geometry::{color_keys, palette_color, treemap_tiles, Rect};
use crate::shared::number_format::format_number_int;

const DEFAULT_WIDTH: f64 = 600.0;
const DEFAULT_HEIGHT: f64 = 700.0;
const HEADER: f64 = 18.0;

/// Slice-and-dice treemap. Leaves are coloured by their own label so the
/// same BusinessType shares a colour under every State.
#[component]
pub fn Treemap(chart: TreemapChart) -> impl IntoView {
    let width = chart.style.width.map(f64::from).unwrap_or(DEFAULT_WIDTH);
    let height = chart.style.height.map(f64::from).unwrap_or(DEFAULT_HEIGHT);
    let show_values = chart
        .style
        .text_info
        .as_deref()
        .is_some_and(|info| info.contains("value"));

    let tiles = treemap_tiles(&chart.roots, Rect::new(0.0, 0.0, width, height), HEADER);
    let leaf_keys = color_keys(
        tiles
            .iter()
            .filter(|t| t.level > 0)
            .map(|t| t.label.as_str()),
    );

    let rendered = tiles
        .iter()
        .map(|tile| {
            let r = tile.rect;
            let label = if show_values {
                format!("{} {}", tile.label, format_number_int(tile.value))
            } else {
                tile.label.clone()
            };

            if tile.level == 0 {
                view! {
                    <g>
                        <rect
                            x=format!("{:.1}", r.x) y=format!("{:.1}", r.y)
                            width=format!("{:.1}", r.width) height=format!("{:.1}", r.height)
                            fill="#e5ecf6" stroke="#fff" stroke-width="2"
                        />
                        <text x=format!("{:.1}", r.x + 4.0) y=format!("{:.1}", r.y + HEADER - 5.0) font-size="12" font-weight="600" fill="#2a3f5f">
                            {label}
                        </text>
                    </g>
                }
                .into_any()
            } else {
                let color_index = leaf_keys
                    .iter()
                    .position(|k| *k == tile.label)
                    .unwrap_or(0);
                view! {
                    <g>
                        <rect
                            x=format!("{:.1}", r.x + 1.0) y=format!("{:.1}", r.y)
                            width=format!("{:.1}", (r.width - 2.0).max(0.0)) height=format!("{:.1}", r.height)
                            fill=palette_color(color_index) stroke="#fff" stroke-width="1"
                        />
                        <text x=format!("{:.1}", r.x + 6.0) y=format!("{:.1}", r.y + 14.0) font-size="11" fill="#fff">
                            {label}
                        </text>
                    </g>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <ChartFrame title=chart.title.clone() empty=chart.roots.is_empty()>
            <svg
                viewBox=format!("0 0 {} {}", width, height)
                width=format!("{}", width)
                height=format!("{}", height)
                class="chart chart--treemap"
            >
                {rendered}
            </svg>
        </ChartFrame>
    }
}
