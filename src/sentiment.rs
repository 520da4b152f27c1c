//! Lexicon-based sentiment scoring with a quoted-text exclusion rule.
//!
//! Quoted spans carry the speaker's sentiment, not the outlet's editorial
//! framing, so they are stripped before any scoring. Token scores come from
//! the bundled integer valence lexicon (-5..=5); a token is emotionally
//! significant when its magnitude reaches [`EMOTION_THRESHOLD`].

use crate::lexicon::SENTIMENT_MAP;
use crate::tagger;

/// Fixed significance cutoff on the lexicon scale, not a percentile.
pub const EMOTION_THRESHOLD: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredToken {
    /// Cleaned lowercase word.
    pub value: String,
    /// Lexicon valence, when the word is in the lexicon at all.
    pub score: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentScore {
    /// Sum of token scores divided by the number of word tokens; 0.0 when the
    /// text has no word tokens.
    pub normalized: f64,
    pub tokens: Vec<ScoredToken>,
}

/// Remove substrings enclosed in matching double or single quotes.
/// Non-greedy and non-nested, scanning left to right; an opener with no
/// closing partner is kept as-is.
pub fn strip_quoted(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '"' || ch == '\'' {
            if let Some(close) = chars[i + 1..].iter().position(|&c| c == ch) {
                i += close + 2;
                continue;
            }
        }
        out.push(ch);
        i += 1;
    }
    out
}

/// Score a text token by token. Callers that want the quote exclusion apply
/// [`strip_quoted`] first; this function scores exactly what it is given.
pub fn score_text(text: &str) -> SentimentScore {
    let mut tokens = Vec::new();
    let mut total = 0i64;

    for raw in tagger::tokenize(text) {
        let clean = clean_word(&raw);
        if clean.is_empty() {
            continue;
        }
        let score = SENTIMENT_MAP.get(clean.as_str()).copied();
        if let Some(s) = score {
            total += i64::from(s);
        }
        tokens.push(ScoredToken { value: clean, score });
    }

    let normalized = if tokens.is_empty() {
        0.0
    } else {
        total as f64 / tokens.len() as f64
    };
    SentimentScore { normalized, tokens }
}

/// Strip non-word characters and lowercase, mirroring the cleaning the
/// aggregator applies to tagged tokens.
pub fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase()
}
