use contracts::dashboards::d400_insurance_analytics::{
    DashboardMetaResponse, DashboardRequest, DashboardResponse, SelectionRequest, TabularRequest,
    TabularView,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/d400";

/// Получить заголовок дашборда и варианты фильтров
pub async fn get_meta() -> Result<DashboardMetaResponse, String> {
    let url = format!("{}/meta", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

/// Пересчитать дашборд для выбранных фильтров
pub async fn get_dashboard(selection: SelectionRequest) -> Result<DashboardResponse, String> {
    let url = format!("{}/dashboard", API_BASE);

    let response = Request::post(&url)
        .json(&DashboardRequest { selection })
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

/// Строки отфильтрованной таблицы по выбранным колонкам
pub async fn get_table(
    selection: SelectionRequest,
    columns: Vec<String>,
) -> Result<TabularView, String> {
    let url = format!("{}/table", API_BASE);

    let response = Request::post(&url)
        .json(&TabularRequest { selection, columns })
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
