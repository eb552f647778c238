//! Admin view: per-client aggregates built on top of the mood aggregator.

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregator::{summarize_moods, MoodSummary};
use crate::models::mood::MoodRecord;

const RECENT_MOODS: usize = 3;
const ATTENTION_SCORE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    Inactive,
    NeedsAttention,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOverview {
    pub id: String,
    pub total_entries: usize,
    pub last_entry: NaiveDate,
    pub average_score: f64,
    pub positive_days: usize,
    pub negative_days: usize,
    pub neutral_days: usize,
    pub recent_moods: Vec<MoodRecord>,
    pub status: ClientStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsReport {
    pub total_clients: usize,
    pub total_entries: usize,
    pub average_score: Option<f64>,
    pub needs_attention: usize,
    pub clients: Vec<ClientOverview>,
}

/// `None` for a client with no entries.
pub fn client_overview(
    id: &str,
    records: &[MoodRecord],
    today: NaiveDate,
    inactive_after_days: i64,
) -> Option<ClientOverview> {
    let MoodSummary::Ready(summary) = summarize_moods(records) else {
        return None;
    };
    let last_entry = records.iter().map(|r| r.date()).max()?;

    let status = if summary.average_score < ATTENTION_SCORE
        || summary.negative_days > summary.positive_days
    {
        ClientStatus::NeedsAttention
    } else if (today - last_entry).num_days() > inactive_after_days {
        ClientStatus::Inactive
    } else {
        ClientStatus::Active
    };

    Some(ClientOverview {
        id: id.to_string(),
        total_entries: summary.total_days,
        last_entry,
        average_score: summary.average_score,
        positive_days: summary.positive_days,
        negative_days: summary.negative_days,
        neutral_days: summary.neutral_days,
        recent_moods: records.iter().take(RECENT_MOODS).cloned().collect(),
        status,
    })
}

pub fn clients_report(
    users: &[(String, Vec<MoodRecord>)],
    today: NaiveDate,
    inactive_after_days: i64,
) -> ClientsReport {
    let clients: Vec<ClientOverview> = users
        .iter()
        .filter_map(|(id, records)| client_overview(id, records, today, inactive_after_days))
        .collect();

    let average_score = if clients.is_empty() {
        None
    } else {
        Some(clients.iter().map(|c| c.average_score).sum::<f64>() / clients.len() as f64)
    };

    ClientsReport {
        total_clients: clients.len(),
        total_entries: clients.iter().map(|c| c.total_entries).sum(),
        average_score,
        needs_attention: clients
            .iter()
            .filter(|c| c.status == ClientStatus::NeedsAttention)
            .count(),
        clients,
    }
}
