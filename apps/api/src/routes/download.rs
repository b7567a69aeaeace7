use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /download-pdf/:filename
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let pdf = state.storage.read(&filename).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        pdf,
    ))
}
