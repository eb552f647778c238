//! # MoodMate: Request/Response DTOs
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Query`    → deserialized from query params
//! - `*Response` → serialized to client JSON
//! - Length limits are expressed via `validator` derive macros

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::chat::{ChatMessage, ChatReply};
use crate::models::mood::MoodRecord;
use crate::services::chatbot::Topic;
use crate::services::narrator::Insight;
use crate::services::wellness::EmergencyResources;

// ============================================================================
// Moods
// ============================================================================

/// POST /api/analyze
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, max = 5000, message = "Text must be 1-5000 characters"))]
    pub text: String,
}

/// POST /api/users/{user_id}/moods
///
/// When `sentiment` and `score` are both omitted the entry text is run
/// through the keyword analyzer. Supplying only one of them is an error.
#[derive(Debug, Deserialize, Validate)]
pub struct LogMoodRequest {
    #[validate(length(max = 5000, message = "Text must be under 5000 characters"))]
    #[serde(default)]
    pub text: String,

    #[validate(length(max = 16, message = "Emoji too long"))]
    pub emoji: Option<String>,

    /// ISO date or RFC 3339 timestamp. Default: today (UTC)
    pub date: Option<String>,

    pub sentiment: Option<String>,
    pub score: Option<f64>,
}

/// GET /api/users/{user_id}/moods
#[derive(Debug, Deserialize)]
pub struct ListMoodsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMoodResponse {
    pub record: MoodRecord,
    pub total_entries: usize,
}

/// POST /api/insights/summary, POST /api/insights/narrate
#[derive(Debug, Deserialize)]
pub struct RecordsRequest {
    pub records: Vec<MoodRecord>,
}

/// Narrated insights, or the same empty marker the summary uses
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InsightsResponse {
    Empty,
    Ready { insights: Vec<Insight> },
}

// ============================================================================
// Chat
// ============================================================================

/// POST /api/chat, POST /api/chat/sessions/{id}/messages
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(max = 2000, message = "Message must be under 2000 characters"))]
    pub message: String,

    /// Prior turns from the client; accepted but not used for matching
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(flatten)]
    pub reply: ChatReply,
    pub topic: Topic,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

// ============================================================================
// Resources
// ============================================================================

/// GET /api/tips
#[derive(Debug, Deserialize)]
pub struct TipsQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct EmergencyResponse {
    pub resources: EmergencyResources,
}
