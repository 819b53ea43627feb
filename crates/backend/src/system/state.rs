use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::dashboards::d400_insurance_analytics::model::PolicyTable;
use crate::shared::config::DashboardConfig;

/// Shared state handed to every handler.
///
/// The table is loaded once at startup and only ever read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<PolicyTable>,
    pub settings: Arc<DashboardConfig>,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(table: PolicyTable, settings: DashboardConfig) -> Self {
        Self {
            table: Arc::new(table),
            settings: Arc::new(settings),
            loaded_at: Utc::now(),
        }
    }
}
