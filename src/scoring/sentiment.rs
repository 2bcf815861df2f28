//! Sentiment Heuristic
//!
//! Lightweight stand-in for a council sentiment scraper: maps meeting
//! transcript language to a 0-100 sentiment suitability estimate by counting
//! fixed positive and negative terms. Pure and deterministic.

use crate::weights::MAX_WEIGHT;
use serde::Serialize;

/// Returned for empty or whitespace-only text
pub const NEUTRAL_SENTIMENT: u8 = 50;

/// Score change per net keyword hit
const POINTS_PER_HIT: i64 = 10;

pub const POSITIVE_TERMS: [&str; 8] = [
    "support",
    "in favor",
    "approve",
    "opportunity",
    "jobs",
    "investment",
    "strategic",
    "tax base",
];

pub const NEGATIVE_TERMS: [&str; 9] = [
    "oppose",
    "against",
    "concern",
    "delay",
    "litigation",
    "moratorium",
    "protest",
    "traffic",
    "pollution",
];

/// Full result of one scraper run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentReading {
    /// Sentiment suitability, 0-100
    pub score: u8,
    pub positive_hits: usize,
    pub negative_hits: usize,
    /// Score mapped onto the 0-10 weight scale
    pub suggested_weight: u8,
}

/// Total substring occurrences of every term (case already folded)
fn count_hits(text: &str, terms: &[&str]) -> usize {
    terms.iter().map(|term| text.matches(term).count()).sum()
}

/// Run the heuristic and keep the hit counts
pub fn analyze_sentiment(text: &str) -> SentimentReading {
    if text.trim().is_empty() {
        return SentimentReading {
            score: NEUTRAL_SENTIMENT,
            positive_hits: 0,
            negative_hits: 0,
            suggested_weight: suggested_weight(NEUTRAL_SENTIMENT),
        };
    }

    let lowered = text.to_lowercase();
    let positive_hits = count_hits(&lowered, &POSITIVE_TERMS);
    let negative_hits = count_hits(&lowered, &NEGATIVE_TERMS);

    let net = i64::try_from(positive_hits).unwrap_or(i64::MAX / 2)
        - i64::try_from(negative_hits).unwrap_or(i64::MAX / 2);
    let base = i64::from(NEUTRAL_SENTIMENT).saturating_add(net.saturating_mul(POINTS_PER_HIT));
    let score = u8::try_from(base.clamp(0, 100)).unwrap_or(NEUTRAL_SENTIMENT);

    SentimentReading {
        score,
        positive_hits,
        negative_hits,
        suggested_weight: suggested_weight(score),
    }
}

/// Map transcript text to a 0-100 sentiment suitability score
pub fn simulate_sentiment_score(text: &str) -> u8 {
    analyze_sentiment(text).score
}

/// Map a 0-100 sentiment score onto the 0-10 weight scale
pub fn suggested_weight(sentiment_score: u8) -> u8 {
    let rounded = (f64::from(sentiment_score) / 10.0).round();
    // Bounded by the 0-100 input, so the cast cannot truncate
    (rounded as u8).min(MAX_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(simulate_sentiment_score(""), 50);
        assert_eq!(simulate_sentiment_score("   \n\t "), 50);
        assert_eq!(analyze_sentiment("").suggested_weight, 5);
    }

    #[test]
    fn test_positive_transcript() {
        // support, investment, jobs
        let reading = analyze_sentiment("We strongly support this investment and the jobs it brings");
        assert_eq!(reading.positive_hits, 3);
        assert_eq!(reading.negative_hits, 0);
        assert_eq!(reading.score, 80);
        assert_eq!(reading.suggested_weight, 8);
    }

    #[test]
    fn test_negative_transcript() {
        // oppose, traffic, pollution, concern (inside "concerns")
        let reading = analyze_sentiment("Residents oppose this due to traffic and pollution concerns");
        assert_eq!(reading.negative_hits, 4);
        assert_eq!(reading.score, 10);
        assert_eq!(reading.suggested_weight, 1);
    }

    #[test]
    fn test_case_insensitive_multiword_terms() {
        let reading = analyze_sentiment("IN FAVOR of growing the Tax Base");
        assert_eq!(reading.positive_hits, 2);
        assert_eq!(reading.score, 70);
    }

    #[test]
    fn test_repeated_terms_count_each_time() {
        assert_eq!(simulate_sentiment_score("jobs jobs jobs"), 80);
        assert_eq!(simulate_sentiment_score("delay, delay and more delay"), 20);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let glowing = "support ".repeat(12);
        assert_eq!(simulate_sentiment_score(&glowing), 100);
        let hostile = "protest litigation moratorium ".repeat(5);
        assert_eq!(simulate_sentiment_score(&hostile), 0);
        assert_eq!(suggested_weight(100), 10);
        assert_eq!(suggested_weight(0), 0);
    }

    #[test]
    fn test_mixed_transcript_cancels() {
        assert_eq!(
            simulate_sentiment_score("Some support the plan, others oppose it"),
            50
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "Council raised concern about traffic but sees a strategic opportunity";
        let first = simulate_sentiment_score(text);
        for _ in 0..5 {
            assert_eq!(simulate_sentiment_score(text), first);
        }
    }
}
