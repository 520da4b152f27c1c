//! Headline batch aggregation: frequency tables for words, adjectives,
//! verbs, phrases, and emotional words, plus overall sentiment.
//!
//! The whole pipeline is a pure in-memory computation over one batch. Every
//! counter remembers the global first-occurrence position of its key, and
//! read-out sorts by count descending with that position as the tie-break, so
//! a batch analyzed twice in the same order yields identical results.

use std::collections::{HashMap, HashSet};

use crate::exclusion::{name_token_set, should_exclude};
use crate::lexicon::{is_sports_noun, POS_OVERRIDE_MAP};
use crate::sentiment::{clean_word, score_text, strip_quoted, EMOTION_THRESHOLD};
use crate::state::{AnalysisResult, EmotionalWord, Headline, PhraseCount, WordCount};
use crate::tagger;

const TOP_WORDS: usize = 10;
const TOP_ADJECTIVES: usize = 5;
const TOP_VERBS: usize = 5;
const TOP_EMOTIONAL: usize = 5;
const TOP_PHRASES: usize = 20;
const MIN_PHRASE_COUNT: u32 = 2;

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: u32,
    first_seen: usize,
}

/// Frequency counter that records the order in which keys first appeared.
#[derive(Debug, Default)]
struct Counter {
    entries: HashMap<String, Tally>,
}

impl Counter {
    fn bump(&mut self, key: &str, seq: &mut usize) {
        *seq += 1;
        let order = *seq;
        self.entries
            .entry(key.to_string())
            .and_modify(|t| t.count += 1)
            .or_insert(Tally {
                count: 1,
                first_seen: order,
            });
    }

    fn into_sorted(self) -> Vec<(String, u32)> {
        let mut rows: Vec<(String, Tally)> = self.entries.into_iter().collect();
        rows.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.1.first_seen.cmp(&b.1.first_seen)));
        rows.into_iter().map(|(w, t)| (w, t.count)).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct EmoTally {
    count: u32,
    total_sentiment: i64,
    first_seen: usize,
}

/// Analyze one entity's headline batch against the global player roster.
///
/// The roster is all known players, not just the entity under analysis: any
/// fragment of any player name is excluded from every table. Input order is
/// the tie-break for equal counts, so callers must pass headlines in
/// data-load order for deterministic output.
pub fn analyze(headlines: &[Headline], all_player_names: &[String]) -> AnalysisResult {
    let name_tokens: HashSet<String> = name_token_set(all_player_names);

    let mut word_counts = Counter::default();
    let mut adjective_counts = Counter::default();
    let mut verb_counts = Counter::default();
    let mut phrase_counts = Counter::default();
    let mut emotional_words: HashMap<String, EmoTally> = HashMap::new();
    let mut seq = 0usize;
    let mut total_sentiment = 0.0f64;

    for h in headlines {
        let text = format!("{} {}", h.headline, h.summary);

        // Sentiment runs on the quote-stripped text so quoted speech cannot
        // tilt the score or feed the emotional tables.
        let scored = score_text(&strip_quoted(&text));
        total_sentiment += scored.normalized;

        for token in &scored.tokens {
            let Some(score) = token.score else { continue };
            if score.abs() < EMOTION_THRESHOLD {
                continue;
            }
            if should_exclude(&token.value, &name_tokens) || is_sports_noun(&token.value) {
                continue;
            }
            seq += 1;
            let order = seq;
            emotional_words
                .entry(token.value.clone())
                .and_modify(|t| {
                    t.count += 1;
                    t.total_sentiment += i64::from(score);
                })
                .or_insert(EmoTally {
                    count: 1,
                    total_sentiment: i64::from(score),
                    first_seen: order,
                });
        }

        // Tagging runs on the original text; quotes stay in for word counts.
        let words = tagger::tokenize(&text);
        let tags = tagger::pos_tag(&words);
        assert_eq!(
            tags.len(),
            words.len(),
            "tagger must return one tag per token"
        );

        for (word, tagged) in words.iter().zip(tags.iter().copied()) {
            let clean = clean_word(word);
            if clean.is_empty() || should_exclude(&clean, &name_tokens) {
                continue;
            }

            // Sports nouns count once in the general table and never reach
            // POS classification, whatever the tagger or overrides say.
            if is_sports_noun(&clean) {
                word_counts.bump(&clean, &mut seq);
                continue;
            }

            word_counts.bump(&clean, &mut seq);

            let tag = POS_OVERRIDE_MAP
                .get(clean.as_str())
                .copied()
                .unwrap_or(tagged);
            if tag.starts_with("jj") && !tag.starts_with("nn") {
                adjective_counts.bump(&clean, &mut seq);
            }
            if tag.starts_with("vb") && !tag.starts_with("nn") {
                verb_counts.bump(&clean, &mut seq);
            }
        }

        // Phrase extraction over the cleaned, non-empty token stream. A
        // window is dropped when any member would be excluded on its own.
        let tokens: Vec<String> = words
            .iter()
            .map(|w| clean_word(w))
            .filter(|w| !w.is_empty())
            .collect();

        for window in tokens.windows(2) {
            if window.iter().any(|w| should_exclude(w, &name_tokens)) {
                continue;
            }
            phrase_counts.bump(&window.join(" "), &mut seq);
        }
        for window in tokens.windows(3) {
            if window.iter().any(|w| should_exclude(w, &name_tokens)) {
                continue;
            }
            phrase_counts.bump(&window.join(" "), &mut seq);
        }
    }

    let top_words = truncate_words(word_counts, TOP_WORDS);
    let top_adjectives = truncate_words(adjective_counts, TOP_ADJECTIVES);
    let top_verbs = truncate_words(verb_counts, TOP_VERBS);

    let mut emotional: Vec<(String, u32, f64, usize)> = emotional_words
        .into_iter()
        .map(|(word, t)| {
            let avg = t.total_sentiment as f64 / f64::from(t.count);
            (word, t.count, avg, t.first_seen)
        })
        .collect();
    emotional.sort_by(|a, b| b.1.cmp(&a.1).then(a.3.cmp(&b.3)));

    let top_positive_words = emotional
        .iter()
        .filter(|(_, _, avg, _)| *avg >= f64::from(EMOTION_THRESHOLD))
        .take(TOP_EMOTIONAL)
        .map(|(word, count, avg, _)| EmotionalWord {
            word: word.clone(),
            count: *count,
            sentiment: *avg,
        })
        .collect();
    let top_negative_words = emotional
        .iter()
        .filter(|(_, _, avg, _)| *avg <= -f64::from(EMOTION_THRESHOLD))
        .take(TOP_EMOTIONAL)
        .map(|(word, count, avg, _)| EmotionalWord {
            word: word.clone(),
            count: *count,
            sentiment: *avg,
        })
        .collect();

    let top_phrases = phrase_counts
        .into_sorted()
        .into_iter()
        .filter(|(_, count)| *count >= MIN_PHRASE_COUNT)
        .take(TOP_PHRASES)
        .map(|(phrase, count)| PhraseCount { phrase, count })
        .collect();

    let overall_sentiment = if headlines.is_empty() {
        0.0
    } else {
        total_sentiment / headlines.len() as f64
    };

    AnalysisResult {
        total_headlines: headlines.len(),
        top_words,
        top_adjectives,
        top_verbs,
        top_positive_words,
        top_negative_words,
        top_phrases,
        overall_sentiment,
    }
}

fn truncate_words(counter: Counter, limit: usize) -> Vec<WordCount> {
    counter
        .into_sorted()
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}
