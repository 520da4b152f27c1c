//! Word tokenizer and rule-based part-of-speech tagger.
//!
//! The tagger emits lowercase Penn-Treebank-style tags and is tuned for the
//! vocabulary of sports headlines: a small closed-class lookup, an adjective
//! lexicon that covers the participial adjectives headlines lean on
//! ("stunning", "thrilling"), a base-verb lexicon with inflection stripping,
//! then suffix heuristics, defaulting to noun. Domain-specific corrections
//! live in `lexicon::POS_OVERRIDES` and are applied by the aggregator, not
//! here.

use std::collections::HashSet;

use once_cell::sync::Lazy;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "both",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "to", "of", "over", "under", "into", "onto",
    "against", "after", "before", "during", "between", "through", "about", "around", "despite",
    "behind", "beyond", "without", "amid", "since", "until",
];

const PRONOUNS: &[&str] = &[
    "she", "he", "they", "them", "her", "him", "his", "hers", "their", "theirs", "it", "its",
    "we", "us", "our", "you", "your", "i", "me", "my", "who", "whom",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "so", "yet"];

const MODALS: &[&str] = &[
    "will", "would", "can", "could", "may", "might", "shall", "should", "must",
];

const ADVERBS: &[&str] = &[
    "not", "never", "again", "still", "soon", "now", "then", "very", "too", "just", "already",
    "nearly", "almost", "once", "twice", "back",
];

const ADJECTIVES: &[&str] = &[
    "aggressive", "amazing", "angry", "astonishing", "available", "awful", "bad", "best", "big",
    "bold", "brilliant", "brutal", "calm", "clutch", "cold", "close", "confident", "consistent",
    "controversial", "dazzling", "deep", "devastating", "disappointing", "dismal", "dominant",
    "doubtful", "dramatic", "dreadful", "dynamic", "eager", "early", "efficient", "electric",
    "elite", "embarrassing", "emotional", "exciting", "explosive", "extraordinary", "fantastic",
    "fast", "fearless", "fierce", "final", "flawless", "frustrating", "furious", "good",
    "great", "gritty", "happy", "healthy", "heartbreaking", "historic", "hopeful", "horrible",
    "hot", "huge", "iconic", "impressive", "incredible", "injured", "key", "lackluster",
    "late", "legendary", "magnificent", "major", "masterful", "mediocre", "miserable",
    "narrow", "nervous", "outstanding", "passionate", "pathetic", "perfect", "phenomenal",
    "physical", "poised", "poor", "proud", "questionable", "ready", "reckless", "relentless",
    "remarkable", "resilient", "sad", "scrappy", "sensational", "shocking", "sloppy", "slow",
    "smart", "smooth", "solid", "special", "spectacular", "stellar", "strong", "stunning",
    "superb", "tense", "terrible", "terrific", "thrilling", "tough", "ugly", "unbeatable",
    "unstoppable", "veteran", "vicious", "weak", "wonderful", "worst", "young",
];

const VERBS: &[&str] = &[
    "accept", "acquire", "activate", "add", "address", "agree", "aim", "announce", "appeal",
    "attack", "attempt", "beat", "become", "blast", "block", "bounce", "break", "bring",
    "bury", "call", "carry", "celebrate", "claim", "climb", "clinch", "close", "coast",
    "commit", "confirm", "consider", "convert", "criticize", "cruise", "crush", "debut",
    "decline", "defeat", "defend", "deliver", "deny", "discuss", "dish", "dominate", "doubt",
    "drain", "drop", "earn", "edge", "eject", "emerge", "erupt", "expect", "explode",
    "extend", "face", "fall", "finish", "fire", "fuel", "get", "give", "grab", "help",
    "hire", "hold", "honor", "hope", "host", "hurt", "improve", "injure", "join", "jump",
    "keep", "land", "lead", "leave", "lift", "look", "make", "meet", "miss", "move",
    "need", "notch", "open", "outlast", "outscore", "overcome", "pass", "plan", "play",
    "post", "power", "praise", "prepare", "propel", "protest", "prove", "pull", "push",
    "put", "question", "rally", "reach", "react", "record", "regress", "reject", "release",
    "remain", "respond", "retire", "return", "reveal", "rip", "rise", "roll", "run", "say",
    "seal", "secure", "send", "set", "shine", "shoot", "show", "sideline", "sign", "sink",
    "slide", "snap", "soar", "spark", "stay", "steal", "struggle", "stumble", "stun",
    "suffer", "surge", "survive", "suspend", "sweep", "take", "tally", "tell", "thrive",
    "tie", "top", "trade", "trail", "urge", "visit", "vow", "waive", "want", "warn",
    "weigh",
];

static DETERMINER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DETERMINERS.iter().copied().collect());
static PREPOSITION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PREPOSITIONS.iter().copied().collect());
static PRONOUN_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PRONOUNS.iter().copied().collect());
static CONJUNCTION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CONJUNCTIONS.iter().copied().collect());
static MODAL_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| MODALS.iter().copied().collect());
static ADVERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ADVERBS.iter().copied().collect());
static ADJECTIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ADJECTIVES.iter().copied().collect());
static VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| VERBS.iter().copied().collect());

/// Split text into an ordered token sequence. A token is either a word run
/// (ASCII alphanumerics, underscores, and in-word apostrophes) or a single
/// punctuation character, so downstream cleaning can discard the latter while
/// indices stay aligned with the tag sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let chars: Vec<char> = text.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            word.push(ch);
        } else if (ch == '\'' || ch == '\u{2019}')
            && !word.is_empty()
            && chars
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_alphanumeric())
        {
            // Keep contractions ("don't") as one token.
            word.push('\'');
        } else {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if !ch.is_whitespace() {
                tokens.push(ch.to_string());
            }
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }
    tokens
}

/// Assign one lowercase tag per token, same length and order as the input.
pub fn pos_tag(tokens: &[String]) -> Vec<&'static str> {
    tokens.iter().map(|t| tag_word(t)).collect()
}

fn tag_word(raw: &str) -> &'static str {
    let word = raw.to_lowercase();
    if !word.chars().any(|c| c.is_ascii_alphanumeric()) {
        return ".";
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return "cd";
    }
    let w = word.as_str();
    if DETERMINER_SET.contains(w) {
        return "dt";
    }
    if PREPOSITION_SET.contains(w) {
        return "in";
    }
    if PRONOUN_SET.contains(w) {
        return "prp";
    }
    if CONJUNCTION_SET.contains(w) {
        return "cc";
    }
    if MODAL_SET.contains(w) {
        return "md";
    }
    if ADVERB_SET.contains(w) {
        return "rb";
    }
    if ADJECTIVE_SET.contains(w) {
        return "jj";
    }
    if let Some(tag) = verb_tag(w) {
        return tag;
    }
    if w.ends_with("ly") {
        return "rb";
    }
    if has_adjective_suffix(w) {
        return "jj";
    }
    if w.ends_with("ing") && w.len() > 4 {
        return "vbg";
    }
    if w.ends_with("ed") && w.len() > 3 {
        return "vbd";
    }
    if w.ends_with('s') && !w.ends_with("ss") && w.len() > 3 {
        return "nns";
    }
    "nn"
}

fn verb_tag(w: &str) -> Option<&'static str> {
    if VERB_SET.contains(w) {
        return Some("vb");
    }
    if let Some(stem) = w.strip_suffix("ies") {
        let restored = format!("{stem}y");
        if VERB_SET.contains(restored.as_str()) {
            return Some("vbz");
        }
    }
    if let Some(stem) = w.strip_suffix("es") {
        if VERB_SET.contains(stem) {
            return Some("vbz");
        }
    }
    if let Some(stem) = w.strip_suffix('s') {
        if VERB_SET.contains(stem) {
            return Some("vbz");
        }
    }
    if let Some(stem) = w.strip_suffix("ing") {
        if stem_is_verb(stem) {
            return Some("vbg");
        }
    }
    if let Some(stem) = w.strip_suffix("ied") {
        let restored = format!("{stem}y");
        if VERB_SET.contains(restored.as_str()) {
            return Some("vbd");
        }
    }
    if let Some(stem) = w.strip_suffix("ed") {
        if stem_is_verb(stem) {
            return Some("vbd");
        }
    }
    None
}

/// Check a stripped inflection stem against the verb lexicon, restoring
/// dropped final "e" and undoubling final consonants ("stunning" -> "stun").
fn stem_is_verb(stem: &str) -> bool {
    if VERB_SET.contains(stem) {
        return true;
    }
    let with_e = format!("{stem}e");
    if VERB_SET.contains(with_e.as_str()) {
        return true;
    }
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        if VERB_SET.contains(&stem[..stem.len() - 1]) {
            return true;
        }
    }
    false
}

fn has_adjective_suffix(w: &str) -> bool {
    const SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish", "ic"];
    w.len() > 4 && SUFFIXES.iter().any(|s| w.ends_with(s))
}
