use axum::{extract::State, Json};
use chrono::Utc;

use crate::services::clients::{clients_report, ClientsReport};
use crate::AppState;

/// Aggregates for every client who has logged at least one mood.
pub async fn list_clients(State(state): State<AppState>) -> Json<ClientsReport> {
    let users = state.moods.users().await;
    let today = Utc::now().date_naive();
    let report = clients_report(&users, today, state.config.inactive_after_days);

    tracing::debug!(
        clients = report.total_clients,
        needs_attention = report.needs_attention,
        "Built client overview"
    );

    Json(report)
}
