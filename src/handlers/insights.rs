use axum::{
    extract::{Path, State},
    Json,
};

use super::validate_user_id;
use crate::dto::{InsightsResponse, RecordsRequest};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::models::mood::MoodRecord;
use crate::services::aggregator::{summarize_moods, MoodSummary};
use crate::services::narrator::narrate_insights;
use crate::AppState;

fn narrate(records: &[MoodRecord]) -> InsightsResponse {
    match summarize_moods(records) {
        MoodSummary::Empty => InsightsResponse::Empty,
        MoodSummary::Ready(summary) => InsightsResponse::Ready {
            insights: narrate_insights(&summary),
        },
    }
}

pub async fn summarize_records(
    AppJson(body): AppJson<RecordsRequest>,
) -> Json<MoodSummary> {
    Json(summarize_moods(&body.records))
}

pub async fn narrate_records(
    AppJson(body): AppJson<RecordsRequest>,
) -> Json<InsightsResponse> {
    Json(narrate(&body.records))
}

pub async fn user_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<MoodSummary>> {
    validate_user_id(&user_id)?;
    let records = state.moods.snapshot(&user_id).await;
    tracing::debug!(user_id = %user_id, entries = records.len(), "Summarizing moods");
    Ok(Json(summarize_moods(&records)))
}

pub async fn user_insights(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<InsightsResponse>> {
    validate_user_id(&user_id)?;
    let records = state.moods.snapshot(&user_id).await;
    Ok(Json(narrate(&records)))
}
