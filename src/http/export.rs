use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::app::AppState;
use super::error::ApiResult;
use crate::core::ReportLogic;

/// GET /export/pdf: unpaid entries as a PDF attachment.
pub async fn export_pdf(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let report = state.with_db(ReportLogic::export_unpaid_to_pdf)?;

    let disposition = format!("attachment; filename=\"{}\"", report.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.bytes,
    )
        .into_response())
}
