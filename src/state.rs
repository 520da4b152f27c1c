use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One scraped headline row. Consumed read-only by the analysis core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub link: String,
    pub headline: String,
    pub datetime: String,
    pub source: String,
    #[serde(default)]
    pub summary: String,
    pub authors: String,
    pub image_desc: String,
}

impl Headline {
    /// Best-effort parse of the publish datetime. The dataset mixes
    /// `YYYY-MM-DD HH:MM:SS` and RFC 3339 strings.
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        let raw = self.datetime.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(dt);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        None
    }
}

/// A player with pre-matched headline ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntity {
    pub name: String,
    pub matched_headlines: Vec<u32>,
    pub headline_count: usize,
}

/// One foul play row from the play-by-play feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub description: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub period: Option<u8>,
    #[serde(default)]
    pub clock: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalWord {
    pub word: String,
    pub count: u32,
    /// Average lexicon score across occurrences (sum / count at read-out).
    pub sentiment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: u32,
}

/// Output of one `analyze` call. All lists are descending by count with
/// first-occurrence order breaking ties, so identical inputs (same array,
/// same order) produce identical results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub total_headlines: usize,
    pub top_words: Vec<WordCount>,
    pub top_adjectives: Vec<WordCount>,
    pub top_verbs: Vec<WordCount>,
    pub top_positive_words: Vec<EmotionalWord>,
    pub top_negative_words: Vec<EmotionalWord>,
    pub top_phrases: Vec<PhraseCount>,
    pub overall_sentiment: f64,
}
