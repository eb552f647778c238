use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoodRecordError {
    #[error("Score must be between 0 and 1, got {0}")]
    ScoreOutOfRange(f64),

    #[error("Score must be a finite number")]
    NonFiniteScore,

    #[error("Unknown sentiment: {0}")]
    UnknownSentiment(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = MoodRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(MoodRecordError::UnknownSentiment(s.to_string())),
        }
    }
}

/// One logged mood entry.
///
/// Fields are private so that a record can only come into existence through
/// [`MoodRecord::new`] (or deserialization, which routes through it). The
/// score is therefore always finite and within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MoodRecordInput")]
pub struct MoodRecord {
    date: NaiveDate,
    sentiment: Sentiment,
    score: f64,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<String>,
}

impl MoodRecord {
    pub fn new(
        date: NaiveDate,
        sentiment: Sentiment,
        score: f64,
        text: impl Into<String>,
    ) -> Result<Self, MoodRecordError> {
        if !score.is_finite() {
            return Err(MoodRecordError::NonFiniteScore);
        }
        if !(0.0..=1.0).contains(&score) {
            return Err(MoodRecordError::ScoreOutOfRange(score));
        }
        Ok(Self {
            date,
            sentiment,
            score,
            text: text.into(),
            emoji: None,
        })
    }

    pub fn with_emoji(mut self, emoji: Option<String>) -> Self {
        self.emoji = emoji.filter(|e| !e.trim().is_empty());
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emoji(&self) -> Option<&str> {
        self.emoji.as_deref()
    }
}

/// Wire shape accepted from clients before validation.
#[derive(Debug, Deserialize)]
pub struct MoodRecordInput {
    pub date: String,
    pub sentiment: String,
    pub score: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub emoji: Option<String>,
}

impl TryFrom<MoodRecordInput> for MoodRecord {
    type Error = MoodRecordError;

    fn try_from(input: MoodRecordInput) -> Result<Self, Self::Error> {
        let date = parse_record_date(&input.date)?;
        let sentiment = input.sentiment.parse()?;
        Ok(MoodRecord::new(date, sentiment, input.score, input.text)?.with_emoji(input.emoji))
    }
}

/// Accepts a plain ISO date (`2024-01-27`) or a full RFC 3339 timestamp,
/// in which case the calendar date in the timestamp's own offset is used.
pub fn parse_record_date(raw: &str) -> Result<NaiveDate, MoodRecordError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| MoodRecordError::InvalidDate(raw.to_string()))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}
