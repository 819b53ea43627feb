use chrono::{DateTime, Utc};
use contracts::dashboards::d400_insurance_analytics::{
    DashboardMetaResponse, DashboardRequest, DashboardResponse, TabularRequest, TabularView,
};

use super::aggregate::{self, Aggregates};
use super::filter::{apply_filter, FilteredView};
use super::model::PolicyTable;
use super::presenter;
use super::selector::{filter_options, Selection, SelectionError};
use crate::shared::config::DashboardConfig;

/// Result of one filter + aggregate pass
pub struct PipelineRun<'a> {
    pub view: FilteredView<'a>,
    pub aggregates: Aggregates,
}

/// Runs the whole pipeline from the full table. Nothing is cached between
/// runs, so the result depends only on the table and the selection.
pub fn run_pipeline<'a>(table: &'a PolicyTable, selection: &Selection) -> PipelineRun<'a> {
    let view = apply_filter(table, selection);
    let aggregates = aggregate::compute(&view);
    PipelineRun { view, aggregates }
}

/// Sidebar options and page settings
pub fn get_meta(
    table: &PolicyTable,
    settings: &DashboardConfig,
    loaded_at: DateTime<Utc>,
) -> DashboardMetaResponse {
    DashboardMetaResponse {
        title: settings.title.clone(),
        currency: settings.currency.clone(),
        sidebar_caption: settings.sidebar_caption.clone(),
        logo: settings
            .logo
            .as_ref()
            .map(|logo| format!("/{}", logo.trim_start_matches('/'))),
        total_rows: table.len(),
        loaded_at,
        columns: table.columns().to_vec(),
        filters: filter_options(table),
    }
}

pub fn build_dashboard(
    table: &PolicyTable,
    request: &DashboardRequest,
    currency: &str,
) -> Result<DashboardResponse, SelectionError> {
    let selection = Selection::resolve(table, &request.selection)?;
    let run = run_pipeline(table, &selection);

    Ok(DashboardResponse {
        row_count: run.view.len(),
        total_rows: table.len(),
        metrics: presenter::metric_cards(&run.aggregates.summary, currency),
        trend_charts: presenter::trend_charts(&run.aggregates),
        pie_charts: presenter::pie_charts(&run.aggregates),
        treemap: presenter::treemap(&run.aggregates),
    })
}

pub fn build_table_view(
    table: &PolicyTable,
    request: &TabularRequest,
) -> Result<TabularView, SelectionError> {
    let selection = Selection::resolve(table, &request.selection)?;
    let view = apply_filter(table, &selection);
    presenter::tabular_view(&view, &request.columns)
}

#[cfg(test)]
mod tests {
    use super::super::model::fixtures::{example_table, sample_table};
    use super::*;
    use contracts::dashboards::d400_insurance_analytics::SelectionRequest;

    fn east_request() -> DashboardRequest {
        DashboardRequest {
            selection: SelectionRequest {
                region: Some(vec!["East".to_string()]),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_meta_lists_filters_and_settings() {
        let table = sample_table();
        let meta = get_meta(&table, &DashboardConfig::default(), Utc::now());
        assert_eq!(meta.total_rows, 6);
        assert_eq!(meta.currency, "TZS");
        assert_eq!(meta.filters.len(), 3);
        assert_eq!(meta.filters[0].options, vec!["East", "West", "North"]);
        assert_eq!(meta.columns.len(), 7);
        assert_eq!(meta.logo, None);
    }

    #[test]
    fn test_meta_logo_is_a_root_url() {
        let settings = DashboardConfig {
            logo: Some("images/logo1.png".to_string()),
            ..DashboardConfig::default()
        };
        let meta = get_meta(&sample_table(), &settings, Utc::now());
        assert_eq!(meta.logo.as_deref(), Some("/images/logo1.png"));
        assert_eq!(meta.sidebar_caption, "Online Analytics");
    }

    #[test]
    fn test_dashboard_reference_example() {
        let table = example_table();
        let response = build_dashboard(&table, &east_request(), "TZS").unwrap();
        assert_eq!(response.row_count, 2);
        assert_eq!(response.total_rows, 3);
        assert_eq!(response.metrics[0].value, "300");
        assert_eq!(response.metrics[1].value, "150");
        assert_eq!(response.metrics[2].value, "150");
        assert_eq!(response.trend_charts.len(), 2);
        assert_eq!(response.pie_charts.len(), 4);
        assert_eq!(response.pie_charts[0].points.len(), 1);
        assert_eq!(response.treemap.total(), 300.0);
    }

    #[test]
    fn test_default_request_covers_whole_table() {
        let table = sample_table();
        let response = build_dashboard(&table, &DashboardRequest::default(), "TZS").unwrap();
        assert_eq!(response.row_count, response.total_rows);
        assert_eq!(response.metrics[0].raw_value, Some(7500.0));
    }

    #[test]
    fn test_rerun_gives_identical_output() {
        let table = sample_table();
        let selection = Selection::all(&table);
        let first = run_pipeline(&table, &selection);
        let second = run_pipeline(&table, &selection);
        assert_eq!(first.view.indices(), second.view.indices());
        assert_eq!(first.aggregates, second.aggregates);
    }

    #[test]
    fn test_unknown_value_is_an_error() {
        let table = example_table();
        let request = DashboardRequest {
            selection: SelectionRequest {
                location: Some(vec!["Z".to_string()]),
                ..Default::default()
            },
        };
        assert!(matches!(
            build_dashboard(&table, &request, "TZS"),
            Err(SelectionError::UnknownValue { .. })
        ));
    }

    #[test]
    fn test_table_view_follows_selection() {
        let table = example_table();
        let request = TabularRequest {
            selection: east_request().selection,
            columns: vec!["Region".to_string()],
        };
        let view = build_table_view(&table, &request).unwrap();
        assert_eq!(view.rows, vec![vec!["East".to_string()], vec!["East".to_string()]]);
    }
}
