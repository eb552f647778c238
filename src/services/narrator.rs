//! Turns an [`InsightSummary`] into the four statements shown on the
//! insights page. Always four, always in the same order.

use serde::Serialize;

use super::aggregator::InsightSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Trend,
    Pattern,
    Emotion,
    Distribution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightTone {
    Positive,
    Mixed,
    Challenging,
    Informational,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub tone: InsightTone,
}

pub fn narrate_insights(summary: &InsightSummary) -> Vec<Insight> {
    let trend_tone = match summary.positive_percentage {
        p if p > 60 => InsightTone::Positive,
        p if p > 40 => InsightTone::Mixed,
        _ => InsightTone::Challenging,
    };

    let week = &summary.best_day_of_week;
    let best = &summary.best_day;

    vec![
        Insight {
            kind: InsightKind::Trend,
            title: "Overall Mood Trend".into(),
            description: format!(
                "You've been feeling positive {}% of the time over the last {}.",
                summary.positive_percentage,
                plural(summary.total_days, "day", "days"),
            ),
            tone: trend_tone,
        },
        Insight {
            kind: InsightKind::Pattern,
            title: "Best Day of the Week".into(),
            description: format!(
                "You tend to feel best on {}s with an average confidence of {}%.",
                week.day,
                as_percent(week.average),
            ),
            tone: InsightTone::Informational,
        },
        Insight {
            kind: InsightKind::Emotion,
            title: "Your Best Day".into(),
            description: format!(
                "Your happiest day was {} when you felt {} ({}% confidence).",
                best.date().format("%-m/%-d/%Y"),
                best.sentiment(),
                as_percent(best.score()),
            ),
            tone: InsightTone::Positive,
        },
        Insight {
            kind: InsightKind::Distribution,
            title: "Mood Distribution".into(),
            description: format!(
                "{}, {}, and {}.",
                plural(summary.positive_days, "positive day", "positive days"),
                plural(summary.negative_days, "challenging day", "challenging days"),
                plural(summary.neutral_days, "neutral day", "neutral days"),
            ),
            tone: InsightTone::Informational,
        },
    ]
}

fn as_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood::{MoodRecord, Sentiment};
    use crate::services::aggregator::{summarize_moods, MoodSummary};
    use chrono::NaiveDate;

    fn summary_of(entries: &[(&str, Sentiment, f64)]) -> InsightSummary {
        let records: Vec<MoodRecord> = entries
            .iter()
            .map(|(d, s, score)| {
                let date = NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap();
                MoodRecord::new(date, *s, *score, "").unwrap()
            })
            .collect();
        match summarize_moods(&records) {
            MoodSummary::Ready(summary) => summary,
            MoodSummary::Empty => panic!("expected a summary"),
        }
    }

    #[test]
    fn test_four_statements_in_fixed_order() {
        let summary = summary_of(&[
            ("2024-01-26", Sentiment::Neutral, 0.52),
            ("2024-01-27", Sentiment::Positive, 0.85),
        ]);
        let insights = narrate_insights(&summary);

        let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::Trend,
                InsightKind::Pattern,
                InsightKind::Emotion,
                InsightKind::Distribution
            ]
        );

        assert_eq!(
            insights[0].description,
            "You've been feeling positive 50% of the time over the last 2 days."
        );
        assert_eq!(insights[0].tone, InsightTone::Mixed);
        assert_eq!(
            insights[1].description,
            "You tend to feel best on Saturdays with an average confidence of 85%."
        );
        assert_eq!(
            insights[2].description,
            "Your happiest day was 1/27/2024 when you felt positive (85% confidence)."
        );
        assert_eq!(
            insights[3].description,
            "1 positive day, 0 challenging days, and 1 neutral day."
        );
    }

    #[test]
    fn test_degenerate_single_day_still_narrates() {
        let summary = summary_of(&[
            ("2024-03-03", Sentiment::Negative, 0.0),
            ("2024-03-03", Sentiment::Negative, 0.0),
        ]);
        let insights = narrate_insights(&summary);

        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0].tone, InsightTone::Challenging);
        assert!(insights[1].description.contains("Sundays"));
        assert!(insights[2].description.contains("0% confidence"));
        assert!(insights.iter().all(|i| !i.description.is_empty()));
    }

    #[test]
    fn test_same_summary_same_statements() {
        let summary = summary_of(&[("2024-02-14", Sentiment::Positive, 0.91)]);
        assert_eq!(narrate_insights(&summary), narrate_insights(&summary));
        assert_eq!(narrate_insights(&summary)[0].tone, InsightTone::Positive);
    }
}
