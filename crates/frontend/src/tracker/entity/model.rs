//! Classification inputs of a tracked dataset, fetched from the console API.

use crate::shared::api_utils::{api_url, segment};
use contracts::shared::config::ApiConfig;
use gloo_net::http::Request;
use serde_json::Value;

async fn get_json(url: &str) -> Result<Value, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} for {}", response.status(), url));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Dataset type (e.g. "table", "fileSet") of a dataset.
pub async fn fetch_dataset_type(
    api: &ApiConfig,
    namespace: &str,
    dataset_id: &str,
) -> Result<Value, String> {
    let url = api_url(
        api,
        &format!(
            "/namespaces/{}/datasets/{}/type",
            segment(namespace),
            segment(dataset_id)
        ),
    );
    get_json(&url).await
}

/// System-scope tags of a dataset; usually a JSON array of strings.
pub async fn fetch_system_tags(
    api: &ApiConfig,
    namespace: &str,
    dataset_id: &str,
) -> Result<Value, String> {
    let url = api_url(
        api,
        &format!(
            "/namespaces/{}/datasets/{}/metadata/tags?scope=SYSTEM",
            segment(namespace),
            segment(dataset_id)
        ),
    );
    get_json(&url).await
}
