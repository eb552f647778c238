use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use validator::Validate;

use super::validate_user_id;
use crate::dto::{AnalyzeRequest, ListMoodsQuery, LogMoodRequest, LogMoodResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::mood::{parse_record_date, MoodRecord, Sentiment};
use crate::services::sentiment::{analyze_text, SentimentScore};
use crate::AppState;

pub async fn analyze(
    AppJson(body): AppJson<AnalyzeRequest>,
) -> AppResult<Json<SentimentScore>> {
    body.validate()?;
    if body.text.trim().is_empty() {
        return Err(AppError::Validation("No text provided".into()));
    }

    Ok(Json(analyze_text(&body.text)))
}

pub async fn log_mood(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(body): AppJson<LogMoodRequest>,
) -> AppResult<Json<LogMoodResponse>> {
    validate_user_id(&user_id)?;
    body.validate()?;

    let date = match body.date.as_deref() {
        Some(raw) => parse_record_date(raw)?,
        None => Utc::now().date_naive(),
    };

    let (sentiment, score) = match (body.sentiment.as_deref(), body.score) {
        (Some(sentiment), Some(score)) => (sentiment.parse::<Sentiment>()?, score),
        (None, None) => {
            if body.text.trim().is_empty() {
                return Err(AppError::Validation(
                    "Text is required when sentiment is not supplied".into(),
                ));
            }
            let analysis = analyze_text(&body.text);
            (analysis.sentiment, analysis.score)
        }
        _ => {
            return Err(AppError::Validation(
                "Sentiment and score must be supplied together".into(),
            ))
        }
    };

    let record = MoodRecord::new(date, sentiment, score, body.text)?.with_emoji(body.emoji);
    let total_entries = state.moods.log(&user_id, record.clone()).await;

    tracing::info!(
        user_id = %user_id,
        sentiment = %record.sentiment(),
        total_entries,
        "Mood logged"
    );

    Ok(Json(LogMoodResponse {
        record,
        total_entries,
    }))
}

pub async fn list_moods(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListMoodsQuery>,
) -> AppResult<Json<Vec<MoodRecord>>> {
    validate_user_id(&user_id)?;
    Ok(Json(state.moods.list(&user_id, query.limit).await))
}
