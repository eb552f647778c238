use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{EmergencyResponse, TipsQuery, TipsResponse};
use crate::services::wellness;
use crate::AppState;

pub async fn get_tips(
    State(state): State<AppState>,
    Query(query): Query<TipsQuery>,
) -> Json<TipsResponse> {
    let count = query.count.unwrap_or(state.config.tips_count);
    Json(TipsResponse {
        tips: wellness::tips(count),
    })
}

pub async fn get_emergency() -> Json<EmergencyResponse> {
    Json(EmergencyResponse {
        resources: wellness::emergency_resources(),
    })
}
