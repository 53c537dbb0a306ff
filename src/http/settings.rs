use axum::{Json, extract::State};
use std::sync::Arc;

use super::app::AppState;
use super::dto::{SettingsResponse, UpdateSettingsRequest};
use super::error::ApiResult;
use super::extract::ApiJson;
use crate::core::SettingsLogic;

/// GET /settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<SettingsResponse>> {
    let s = state.with_db(SettingsLogic::get)?;
    Ok(Json(SettingsResponse::from(&s)))
}

/// PUT /settings: both fields optional; omitted ones keep their value.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    let rate = req.hourly_rate.as_ref().map(|r| r.to_cents()).transpose()?;

    let s = state.with_db(|pool| {
        SettingsLogic::update(pool, rate, req.currency_symbol.as_deref())
    })?;
    Ok(Json(SettingsResponse::from(&s)))
}
