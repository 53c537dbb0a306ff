//! Time entry endpoints: history, create, paid status, delete, Pay All.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;

use super::app::AppState;
use super::dto::{
    CreateEntryRequest, CreateEntryResponse, EntryDefaultsResponse, EntryResponse, HistoryQuery,
    HistoryResponse, PayAllResponse, RangeQuery, StatsResponse,
};
use super::error::ApiResult;
use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::core::{EntryLogic, SettingsLogic};
use crate::models::filter::EntryFilter;
use crate::utils::date::{parse_date_arg, parse_optional_date, today};
use crate::utils::formatting::format_currency;
use crate::utils::minutes_to_hours;
use crate::utils::time::{format_time, parse_time_arg};

/// GET /entries: history with optional `show_paid`, `start_date`, `end_date`.
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<HistoryQuery>,
) -> ApiResult<Json<HistoryResponse>> {
    let filter = EntryFilter {
        show_paid: q.show_paid.unwrap_or(true),
        from: parse_optional_date(q.start_date.as_deref())?,
        to: parse_optional_date(q.end_date.as_deref())?,
    };

    let (history, symbol) = state.with_db(|pool| {
        let history = EntryLogic::history(pool, &filter)?;
        let symbol = SettingsLogic::get(pool)?.currency_symbol;
        Ok((history, symbol))
    })?;

    Ok(Json(HistoryResponse {
        entries: history
            .entries
            .iter()
            .map(|e| EntryResponse::new(e, &symbol))
            .collect(),
        stats: StatsResponse::new(&history.stats),
        show_paid: filter.show_paid,
    }))
}

/// GET /entries/defaults: values to pre-fill a new entry form.
pub async fn entry_defaults(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<EntryDefaultsResponse>> {
    let (start, end) = state.config.default_shift()?;
    Ok(Json(EntryDefaultsResponse {
        date: today().format("%Y-%m-%d").to_string(),
        start_time: format_time(&start),
        end_time: format_time(&end),
    }))
}

/// POST /entries: missing fields fall back to today and the configured shift.
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateEntryRequest>,
) -> ApiResult<(StatusCode, Json<CreateEntryResponse>)> {
    let (default_start, default_end) = state.config.default_shift()?;

    let date = match req.date.as_deref() {
        Some(d) => parse_date_arg(d)?,
        None => today(),
    };
    let start = match req.start_time.as_deref() {
        Some(t) => parse_time_arg(t)?,
        None => default_start,
    };
    let end = match req.end_time.as_deref() {
        Some(t) => parse_time_arg(t)?,
        None => default_end,
    };

    let (created, symbol) = state.with_db(|pool| {
        let created = EntryLogic::create_entry(pool, &state.config, date, start, end)?;
        let symbol = SettingsLogic::get(pool)?.currency_symbol;
        Ok((created, symbol))
    })?;

    let e = &created.entry;
    let message = format!(
        "Time entry #{} saved! Total: {}h, Pay: {}",
        e.sequence_number,
        minutes_to_hours(e.total_minutes),
        format_currency(e.total_pay, &symbol)
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateEntryResponse {
            entry: EntryResponse::new(e, &symbol),
            warnings: created.warnings,
            message,
        }),
    ))
}

/// GET /entries/{id}
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<EntryResponse>> {
    let (entry, symbol) = state.with_db(|pool| {
        Ok((
            EntryLogic::get_entry(pool, id)?,
            SettingsLogic::get(pool)?.currency_symbol,
        ))
    })?;
    Ok(Json(EntryResponse::new(&entry, &symbol)))
}

/// POST /entries/{id}/paid
pub async fn mark_paid(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<EntryResponse>> {
    let (entry, symbol) = state.with_db(|pool| {
        Ok((
            EntryLogic::mark_paid(pool, id)?,
            SettingsLogic::get(pool)?.currency_symbol,
        ))
    })?;
    Ok(Json(EntryResponse::new(&entry, &symbol)))
}

/// POST /entries/{id}/toggle_paid
pub async fn toggle_paid(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<EntryResponse>> {
    let (entry, symbol) = state.with_db(|pool| {
        Ok((
            EntryLogic::toggle_paid(pool, id)?,
            SettingsLogic::get(pool)?.currency_symbol,
        ))
    })?;
    Ok(Json(EntryResponse::new(&entry, &symbol)))
}

/// DELETE /entries/{id}
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.with_db(|pool| EntryLogic::delete_entry(pool, id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /pay_all: optional `start_date` / `end_date` restrict the range.
pub async fn pay_all(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<RangeQuery>,
) -> ApiResult<Json<PayAllResponse>> {
    let from = parse_optional_date(q.start_date.as_deref())?;
    let to = parse_optional_date(q.end_date.as_deref())?;

    let (outcome, symbol) = state.with_db(|pool| {
        Ok((
            EntryLogic::mark_all_unpaid_as_paid(pool, from, to)?,
            SettingsLogic::get(pool)?.currency_symbol,
        ))
    })?;

    Ok(Json(PayAllResponse::new(&outcome, &symbol)))
}
