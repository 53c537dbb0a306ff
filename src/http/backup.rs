use axum::{Json, extract::State};
use std::sync::Arc;

use super::app::AppState;
use super::error::ApiResult;
use crate::core::BackupLogic;
use crate::export::BackupSnapshot;

/// GET /backup: settings and all entries as JSON.
pub async fn backup_json(State(state): State<Arc<AppState>>) -> ApiResult<Json<BackupSnapshot>> {
    Ok(Json(state.with_db(BackupLogic::snapshot)?))
}
