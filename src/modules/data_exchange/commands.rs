use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::modules::{
    data_exchange::{DataExchangeService, ExchangeFormat},
    movie::MovieRecord,
    session::{AppState, Page},
};

#[derive(Debug, Clone, Deserialize)]
pub struct ImportMoviesRequest {
    pub path: PathBuf,
    pub mime: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportMoviesResponse {
    pub imported: usize,
    pub source: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportMoviesRequest {
    pub format: ExchangeFormat,
    pub query: String,
}

/// Load a JSON/CSV file into the session, replacing any earlier import
pub async fn import_movies(
    request: ImportMoviesRequest,
    service: &DataExchangeService,
    state: &mut AppState,
) -> Result<ImportMoviesResponse, String> {
    let records = service
        .import_file(&request.path, request.mime.as_deref())
        .await
        .map_err(|e| e.to_string())?;

    let imported = records.len();
    state.replace_imported(records);
    if state.page() != Page::ImportView {
        state.navigate(Page::ImportView).map_err(|e| e.to_string())?;
    }

    Ok(ImportMoviesResponse {
        imported,
        source: request.path.display().to_string(),
    })
}

pub async fn export_movies(
    request: ExportMoviesRequest,
    records: &[MovieRecord],
    service: &DataExchangeService,
) -> Result<PathBuf, String> {
    service
        .export(records, request.format, &request.query)
        .await
        .map_err(|e| e.to_string())
}

pub async fn download_template(service: &DataExchangeService) -> Result<PathBuf, String> {
    service.write_template().await.map_err(|e| e.to_string())
}
