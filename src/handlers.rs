use crate::errors::AppError;
use crate::models::{
    AppendResponse, EntriesResponse, NewEntryRequest, Notice, StatsResponse, WeightEntry,
};
use crate::state::AppState;
use crate::stats::summarize;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let log = state.log.lock().await;
    let stats = summarize(log.entries());
    Html(render_index(&today_label(), &stats))
}

pub async fn get_entries(State(state): State<AppState>) -> Json<EntriesResponse> {
    let log = state.log.lock().await;
    Json(EntriesResponse {
        entries: log.entries().to_vec(),
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let log = state.log.lock().await;
    Json(summarize(log.entries()))
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<AppendResponse>, AppError> {
    let entry = apply_append(&state, &payload).await?;
    let notice = Notice::success(format!(
        "Weight {} kg recorded for week {}",
        entry.weight, entry.week
    ));
    Ok(Json(AppendResponse { entry, notice }))
}

pub async fn add_entry_form(
    State(state): State<AppState>,
    Form(payload): Form<NewEntryRequest>,
) -> Result<Redirect, AppError> {
    apply_append(&state, &payload).await?;
    Ok(Redirect::to("/"))
}

async fn apply_append(
    state: &AppState,
    payload: &NewEntryRequest,
) -> Result<WeightEntry, AppError> {
    let mut log = state.log.lock().await;
    match log.append(&payload.weight, &payload.date, &payload.dose) {
        Ok(entry) => {
            info!("recorded {} kg for week {}", entry.weight, entry.week);
            Ok(entry)
        }
        Err(err) => {
            warn!("entry rejected: {err}");
            Err(err.into())
        }
    }
}

// Prefill for the form's date field; entry dates themselves stay free text.
fn today_label() -> String {
    Local::now().format("%d.%m.%Y").to_string()
}
