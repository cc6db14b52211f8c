use axum::{
    extract::{Multipart, State},
    http::Method,
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    error::AppError,
    services::{csv_processor, LlmAgent},
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/api/data", post(analyze_csv))
        .layer(cors)
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// JSON-encoded array of records, kept as a string to match the
    /// original service's contract.
    data: String,
    analysis: String,
}

#[axum::debug_handler]
async fn analyze_csv(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let start = std::time::Instant::now();
    tracing::info!("Request received");

    // 1. Locate the `file` field
    let mut file: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        file = Some((filename, data));
        break;
    }

    let (filename, data) = file.ok_or_else(|| {
        tracing::error!("No file part in the request");
        AppError::InvalidInput("No file part".to_string())
    })?;

    if filename.is_empty() {
        tracing::error!("No selected file");
        return Err(AppError::InvalidInput("No selected file".to_string()));
    }

    tracing::info!("File received: {}, size: {} bytes", filename, data.len());

    // 2. Parse CSV into a table
    let table = match csv_processor::parse_csv(&data) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e);
        }
    };
    tracing::info!(
        "CSV data read successfully: {} rows, {} columns",
        table.row_count(),
        table.column_count()
    );

    // 3. Serialize to a JSON array of records
    let data_json = table.to_records_json();

    // 4. Generate LLM analysis
    let llm_start = std::time::Instant::now();
    let agent = LlmAgent::new(&state.config);
    let analysis = match agent.analyze(&data_json).await {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e);
        }
    };
    tracing::info!(
        "Analysis completed successfully in {:?}",
        llm_start.elapsed()
    );

    tracing::info!("Total processing completed in {:?}", start.elapsed());

    Ok(Json(AnalyzeResponse {
        data: data_json,
        analysis,
    }))
}
