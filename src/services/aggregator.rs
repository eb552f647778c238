//! Reduces a sequence of mood records to summary statistics.
//!
//! Everything here is a pure function of its input slice. Tie-breaking is
//! fixed so repeated calls on the same input are bit-identical:
//!
//! - best/worst day: first record in input order holding the extreme score
//! - best weekday: weekdays are scanned Sunday..Saturday and the first one
//!   with the strictly highest mean score wins
//! - `positive_percentage` uses `f64::round`, i.e. half-up for these
//!   non-negative values

use chrono::{Datelike, Weekday};
use serde::Serialize;

use crate::models::mood::{weekday_name, MoodRecord, Sentiment};

const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayAverage {
    pub day: &'static str,
    pub average: f64,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    pub total_days: usize,
    pub positive_percentage: u32,
    pub average_score: f64,
    pub best_day: MoodRecord,
    pub worst_day: MoodRecord,
    pub best_day_of_week: WeekdayAverage,
    pub positive_days: usize,
    pub negative_days: usize,
    pub neutral_days: usize,
}

/// Either a computed summary or the explicit "nothing logged yet" marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MoodSummary {
    Empty,
    Ready(InsightSummary),
}

impl MoodSummary {
    pub fn insights(&self) -> Option<&InsightSummary> {
        match self {
            MoodSummary::Empty => None,
            MoodSummary::Ready(summary) => Some(summary),
        }
    }
}

pub fn summarize_moods(records: &[MoodRecord]) -> MoodSummary {
    let Some(first) = records.first() else {
        return MoodSummary::Empty;
    };

    let n = records.len();
    let mut best = first;
    let mut worst = first;
    let mut total = 0.0;
    let (mut positive, mut negative, mut neutral) = (0usize, 0usize, 0usize);
    // (score sum, entry count), indexed by days from Sunday
    let mut by_weekday = [(0.0f64, 0usize); 7];

    for record in records {
        let score = record.score();
        if score > best.score() {
            best = record;
        }
        if score < worst.score() {
            worst = record;
        }
        total += score;

        match record.sentiment() {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => neutral += 1,
        }

        let slot = &mut by_weekday[record.date().weekday().num_days_from_sunday() as usize];
        slot.0 += score;
        slot.1 += 1;
    }

    // Summation error must not push the mean outside the observed range
    let average_score = (total / n as f64).clamp(worst.score(), best.score());
    let positive_percentage = (100.0 * positive as f64 / n as f64).round() as u32;

    let mut best_day_of_week: Option<WeekdayAverage> = None;
    for (day, (sum, count)) in WEEK.iter().zip(by_weekday) {
        if count == 0 {
            continue;
        }
        let average = sum / count as f64;
        if best_day_of_week
            .as_ref()
            .map_or(true, |current| average > current.average)
        {
            best_day_of_week = Some(WeekdayAverage {
                day: weekday_name(*day),
                average,
                entries: count,
            });
        }
    }

    // n >= 1 guarantees at least one populated weekday
    let best_day_of_week = best_day_of_week.unwrap_or(WeekdayAverage {
        day: weekday_name(first.date().weekday()),
        average: first.score(),
        entries: 1,
    });

    MoodSummary::Ready(InsightSummary {
        total_days: n,
        positive_percentage,
        average_score,
        best_day: best.clone(),
        worst_day: worst.clone(),
        best_day_of_week,
        positive_days: positive,
        negative_days: negative,
        neutral_days: neutral,
    })
}
