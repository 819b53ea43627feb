use crate::dashboards::InsuranceDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <InsuranceDashboard />
    }
}
