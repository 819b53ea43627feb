use leptos::prelude::*;
use thaw::Card;

/// Card with a chart title. Shows a placeholder instead of the chart body
/// when there is nothing to draw.
#[component]
pub fn ChartFrame(
    #[prop(into)] title: String,
    /// No points to draw
    empty: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:class="chart-frame">
            <div class="chart-frame__title">{title}</div>
            {if empty {
                view! { <div class="chart-frame__empty">"No data for the current selection"</div> }
                    .into_any()
            } else {
                view! { <div class="chart-frame__body">{children()}</div> }.into_any()
            }}
        </Card>
    }
}
