//! Keyword heuristic that assigns a sentiment and confidence to free text.
//!
//! This is a stand-in for a real classifier: each lexicon word found as a
//! substring of the lower-cased text counts once. The side with more hits
//! wins; equal counts (including none) are neutral.

use serde::Serialize;

use crate::models::mood::Sentiment;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "joy", "love", "amazing", "wonderful", "excellent", "fantastic",
    "awesome", "beautiful", "perfect", "delighted", "pleased", "content", "satisfied",
    "grateful", "blessed", "lucky", "fortunate",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "sad", "angry", "frustrated", "disappointed",
    "upset", "worried", "anxious", "stressed", "depressed", "miserable", "unhappy", "annoyed",
    "irritated", "furious", "devastated", "heartbroken",
];

const BASE_SCORE: f64 = 0.5;
const PER_HIT: f64 = 0.1;
const MAX_SCORE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub score: f64,
}

pub fn analyze_text(text: &str) -> SentimentScore {
    let lower = text.to_lowercase();
    let positive = count_hits(&lower, POSITIVE_WORDS);
    let negative = count_hits(&lower, NEGATIVE_WORDS);

    let (sentiment, score) = if positive > negative {
        (Sentiment::Positive, confidence(positive))
    } else if negative > positive {
        (Sentiment::Negative, confidence(negative))
    } else {
        (Sentiment::Neutral, BASE_SCORE)
    };

    SentimentScore {
        sentiment,
        score: (score * 100.0).round() / 100.0,
    }
}

fn count_hits(text: &str, lexicon: &[&str]) -> usize {
    lexicon.iter().filter(|word| text.contains(*word)).count()
}

fn confidence(hits: usize) -> f64 {
    (BASE_SCORE + hits as f64 * PER_HIT).min(MAX_SCORE)
}
