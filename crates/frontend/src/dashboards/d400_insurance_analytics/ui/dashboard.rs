use contracts::dashboards::d400_insurance_analytics::{
    DashboardMetaResponse, DashboardResponse, SelectionRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::sidebar::{initial_selection, Sidebar};
use super::tabular::TabularSection;
use crate::dashboards::d400_insurance_analytics::api;
use crate::shared::charts::{CategoryChartView, Treemap};
use crate::shared::components::StatCard;

/// Insurance analytics dashboard: sidebar filters on the left, metrics and
/// charts on the right. Every selection change reruns the whole pipeline on
/// the server and replaces the previous response.
#[component]
pub fn InsuranceDashboard() -> impl IntoView {
    let (meta, set_meta) = signal(None::<DashboardMetaResponse>);
    // None until the filter options are known
    let selection = RwSignal::new(None::<SelectionRequest>);

    let (data, set_data) = signal(None::<DashboardResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let request_seq = StoredValue::new(0u64);

    // Load title and filter options on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_meta().await {
                Ok(response) => {
                    log::info!(
                        "D400: {} rows loaded at {}",
                        response.total_rows,
                        response.loaded_at.format("%Y-%m-%d %H:%M:%S")
                    );
                    selection.set(Some(initial_selection(&response.filters)));
                    set_meta.set(Some(response));
                }
                Err(e) => {
                    log::error!("Failed to load D400 meta: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    // Rerun on every selection change; a late response of an older run is dropped
    Effect::new(move |_| {
        let Some(current) = selection.get() else {
            return;
        };
        request_seq.update_value(|n| *n += 1);
        let seq = request_seq.get_value();
        set_loading.set(true);

        spawn_local(async move {
            let result = api::get_dashboard(current).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(response) => {
                    set_error.set(None);
                    set_data.set(Some(response));
                }
                Err(e) => {
                    log::error!("Failed to load D400 dashboard: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let title = move || {
        meta.with(|m| {
            m.as_ref()
                .map(|m| m.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div id="d400_insurance_analytics--dashboard" class="insurance-dashboard">
            <aside class="insurance-dashboard__sidebar">
                {move || meta.get().map(|m| view! {
                    <Sidebar caption=m.sidebar_caption logo=m.logo filters=m.filters selection=selection />
                })}
            </aside>

            <main class="insurance-dashboard__main">
                <h1 class="insurance-dashboard__title">{title}</h1>

                {move || error.get().map(|err| view! {
                    <div class="dashboard-error">
                        <strong>"⚠ Error: "</strong>
                        {err}
                    </div>
                })}

                <Show when=move || loading.get()>
                    <div class="dashboard-loading">
                        <Spinner size=SpinnerSize::Small />
                        <span>"Loading..."</span>
                    </div>
                </Show>

                {move || meta.get().map(|m| view! {
                    <TabularSection columns=m.columns selection=selection />
                })}

                {move || data.get().map(|response| {
                    let DashboardResponse {
                        row_count,
                        total_rows,
                        metrics,
                        trend_charts,
                        pie_charts,
                        treemap,
                    } = response;

                    view! {
                        <div class="dashboard-rows">
                            {format!("{} of {} policies selected", row_count, total_rows)}
                        </div>
                        <div class="metric-row">
                            {metrics
                                .into_iter()
                                .map(|metric| view! { <StatCard metric=metric /> })
                                .collect_view()}
                        </div>
                        <Divider />
                        <div class="chart-grid chart-grid--two">
                            {trend_charts
                                .into_iter()
                                .map(|chart| view! { <CategoryChartView chart=chart /> })
                                .collect_view()}
                        </div>
                        <Divider />
                        <div class="chart-grid chart-grid--two">
                            {pie_charts
                                .into_iter()
                                .map(|chart| view! { <CategoryChartView chart=chart /> })
                                .collect_view()}
                        </div>
                        <Divider />
                        <div class="chart-grid">
                            <Treemap chart=treemap />
                        </div>
                    }
                })}
            </main>
        </div>
    }
}
