use contracts::dashboards::d400_insurance_analytics::MetricCard;
use leptos::prelude::*;

const HEADING_ICON: &str = "📌";

#[component]
pub fn StatCard(
    /// Card contents as computed on the server
    metric: MetricCard,
) -> impl IntoView {
    let help = metric.help.clone();
    let title = help.clone().unwrap_or_default();
    let empty_class = if metric.raw_value.is_some() {
        "stat-card"
    } else {
        "stat-card stat-card--empty"
    };

    view! {
        <div class=empty_class title=title>
            <div class="stat-card__heading">
                <span class="stat-card__icon">{HEADING_ICON}</span>
                {metric.heading.clone()}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{metric.label.clone()}</div>
                <div class="stat-card__value">{metric.value.clone()}</div>
                {help.map(|text| view! { <div class="stat-card__subtitle">{text}</div> })}
            </div>
        </div>
    }
}
