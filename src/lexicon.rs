//! Static lexical data for the headline analysis pipeline. Everything in this
//! module is plain data so tests can substitute or reason about entries
//! directly; no control flow hides in here.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Common stop words plus league boilerplate that dominates every headline.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "as",
    "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "said", "after", "wnba", "vs", "game",
    "season", "team", "teams", "player", "players", "star", "win", "wins", "loss", "their",
    "her", "she", "they", "them", "who", "what", "when", "where", "how", "why", "all", "new",
    "first", "last", "over", "before", "year", "years", "following", "s", "this",
];

/// Team names and city fragments, excluded so franchise mentions do not crowd
/// out descriptive vocabulary.
pub const TEAM_NAMES: &[&str] = &[
    "liberty", "aces", "sparks", "sky", "mercury", "sun", "mystics", "fever", "lynx", "wings",
    "storm", "dream", "valkyries", "tempo", "indiana", "chicago", "phoenix", "connecticut",
    "washington", "minnesota", "dallas", "seattle", "atlanta", "las", "vegas", "los", "angeles",
    "new", "york", "golden", "state", "toronto",
];

/// Sports-specific nouns that generic taggers misread as adjectives or verbs.
/// These count in the general word table only.
pub const SPORTS_NOUNS: &[&str] = &[
    "foul", "fouls", "doubledouble", "allstar", "playoff", "playoffs", "championship", "draft",
    "rookie", "mvp", "coach", "coaching", "fans", "fan", "rebounds", "rebound", "assists",
    "assist", "points", "point", "scores", "score", "basket", "baskets", "quarter", "quarters",
    "half", "overtime", "ot", "finals", "semifinal", "semifinals", "guard", "forward", "center",
    "starter", "starters", "bench", "court", "arena", "home", "away",
];

/// Manual tag corrections, applied unconditionally in all contexts. The
/// rule-based tagger has no basketball register, so "fouls" and friends come
/// back as verbs without these.
pub const POS_OVERRIDES: &[(&str, &str)] = &[
    ("fans", "nn"),
    ("fan", "nn"),
    ("foul", "nn"),
    ("fouls", "nns"),
    ("tripledouble", "nn"),
    ("tripledoubles", "nns"),
    ("doubledouble", "nn"),
    ("allstar", "nn"),
    ("playoff", "nn"),
    ("playoffs", "nns"),
    ("finals", "nns"),
    ("rebounds", "nns"),
    ("assists", "nns"),
    ("scores", "nns"),
    ("unrivaled", "nn"),
];

/// AFINN-style valence lexicon, integer scores on a -5..=5 scale. Trimmed to
/// vocabulary that actually shows up in sports media coverage. Words at
/// |score| >= EMOTION_THRESHOLD feed the emotional-word tables.
pub const SENTIMENT_LEXICON: &[(&str, i32)] = &[
    ("abandon", -2),
    ("absentee", -1),
    ("abuse", -3),
    ("ache", -2),
    ("admire", 3),
    ("adorable", 3),
    ("adore", 3),
    ("agonizing", -3),
    ("agony", -3),
    ("amazed", 2),
    ("amazing", 4),
    ("angry", -3),
    ("anguish", -3),
    ("annoyed", -2),
    ("anxious", -2),
    ("appalling", -2),
    ("applaud", 2),
    ("astonishing", 3),
    ("astounding", 3),
    ("atrocious", -3),
    ("attack", -1),
    ("awesome", 4),
    ("awful", -3),
    ("bad", -3),
    ("battered", -2),
    ("beautiful", 3),
    ("best", 3),
    ("bitter", -2),
    ("blame", -2),
    ("bless", 2),
    ("blockbuster", 3),
    ("boost", 1),
    ("brave", 2),
    ("breathtaking", 5),
    ("brilliant", 4),
    ("broken", -1),
    ("brutal", -3),
    ("calm", 2),
    ("catastrophic", -4),
    ("celebrate", 3),
    ("champion", 2),
    ("chaos", -2),
    ("chaotic", -2),
    ("cheer", 2),
    ("cheerful", 2),
    ("clash", -2),
    ("clutch", 2),
    ("collapse", -2),
    ("collapsed", -2),
    ("comeback", 2),
    ("confident", 2),
    ("controversial", -2),
    ("controversy", -2),
    ("courageous", 2),
    ("crash", -2),
    ("criticism", -2),
    ("criticize", -2),
    ("criticized", -2),
    ("crucial", 1),
    ("crush", -1),
    ("crushed", -2),
    ("cry", -1),
    ("damage", -3),
    ("dazzling", 3),
    ("dead", -3),
    ("defeat", -2),
    ("defeated", -2),
    ("delight", 3),
    ("delighted", 3),
    ("demolish", -1),
    ("despair", -3),
    ("desperate", -3),
    ("destroy", -3),
    ("destroyed", -3),
    ("devastated", -2),
    ("devastating", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disappointment", -2),
    ("disaster", -2),
    ("disastrous", -3),
    ("disgrace", -2),
    ("disgraceful", -3),
    ("dismal", -2),
    ("disrespect", -2),
    ("dominant", 2),
    ("dominate", 2),
    ("dominated", 2),
    ("dominating", 2),
    ("doubt", -1),
    ("dreadful", -3),
    ("eager", 2),
    ("ecstatic", 4),
    ("electric", 2),
    ("electrifying", 3),
    ("elite", 2),
    ("embarrassing", -2),
    ("embarrassment", -2),
    ("energized", 2),
    ("enjoy", 2),
    ("epic", 2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("explosive", 2),
    ("extraordinary", 2),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fantastic", 4),
    ("fear", -2),
    ("fearless", 2),
    ("feud", -2),
    ("fierce", 1),
    ("fight", -1),
    ("fired", -2),
    ("flawless", 3),
    ("frustrated", -2),
    ("frustrating", -2),
    ("frustration", -2),
    ("fumble", -2),
    ("fun", 4),
    ("furious", -3),
    ("glorious", 2),
    ("glory", 2),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("greatest", 3),
    ("grief", -2),
    ("gritty", 1),
    ("happy", 3),
    ("hate", -3),
    ("heartbreaking", -3),
    ("heartbroken", -3),
    ("heroic", 3),
    ("historic", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("hopeless", -2),
    ("horrible", -3),
    ("horrific", -3),
    ("humiliating", -3),
    ("humiliation", -3),
    ("hurt", -2),
    ("immaculate", 5),
    ("impressive", 3),
    ("incredible", 3),
    ("injured", -2),
    ("injury", -2),
    ("inspire", 2),
    ("inspired", 2),
    ("inspiring", 2),
    ("intense", 1),
    ("jeopardy", -2),
    ("joy", 3),
    ("jubilant", 4),
    ("lackluster", -2),
    ("laugh", 1),
    ("legendary", 3),
    ("lose", -3),
    ("losing", -3),
    ("lost", -3),
    ("love", 3),
    ("lucky", 3),
    ("magical", 3),
    ("magnificent", 3),
    ("marvelous", 3),
    ("masterful", 3),
    ("mediocre", -2),
    ("mess", -2),
    ("miracle", 4),
    ("miraculous", 4),
    ("miserable", -3),
    ("misery", -2),
    ("missed", -1),
    ("mistake", -2),
    ("nervous", -2),
    ("nightmare", -3),
    ("outrage", -3),
    ("outrageous", -3),
    ("outstanding", 5),
    ("overwhelmed", -1),
    ("pain", -2),
    ("painful", -2),
    ("panic", -3),
    ("passion", 2),
    ("passionate", 2),
    ("pathetic", -3),
    ("perfect", 3),
    ("phenomenal", 4),
    ("poised", 2),
    ("poor", -2),
    ("positive", 2),
    ("powerful", 2),
    ("praise", 3),
    ("praised", 3),
    ("pressure", -1),
    ("proud", 2),
    ("punish", -2),
    ("quit", -1),
    ("rattled", -2),
    ("reckless", -2),
    ("regret", -2),
    ("relentless", 2),
    ("relief", 2),
    ("remarkable", 2),
    ("resilient", 2),
    ("rout", -2),
    ("ruin", -2),
    ("ruthless", -2),
    ("sad", -2),
    ("scandal", -3),
    ("scare", -2),
    ("sensational", 3),
    ("setback", -2),
    ("shame", -2),
    ("shine", 2),
    ("shining", 2),
    ("shocking", -2),
    ("sloppy", -2),
    ("smart", 1),
    ("smooth", 2),
    ("solid", 2),
    ("sorrow", -2),
    ("spectacular", 4),
    ("stellar", 3),
    ("strength", 2),
    ("strong", 2),
    ("struggle", -2),
    ("struggled", -2),
    ("struggles", -2),
    ("struggling", -2),
    ("stun", 2),
    ("stunned", -1),
    ("stunning", 4),
    ("stupid", -2),
    ("success", 2),
    ("successful", 3),
    ("suffer", -2),
    ("suffered", -2),
    ("superb", 5),
    ("surge", 1),
    ("survive", 2),
    ("suspended", -2),
    ("suspension", -2),
    ("tanking", -2),
    ("tense", -2),
    ("terrible", -3),
    ("terrific", 4),
    ("thrill", 3),
    ("thrilled", 5),
    ("thrilling", 3),
    ("tough", -1),
    ("tragedy", -3),
    ("tragic", -2),
    ("triumph", 4),
    ("triumphant", 4),
    ("trouble", -2),
    ("turmoil", -2),
    ("ugly", -3),
    ("unbeatable", 2),
    ("unbelievable", 2),
    ("unstoppable", 3),
    ("upset", -2),
    ("victorious", 3),
    ("victory", 3),
    ("vicious", -2),
    ("vindicated", 2),
    ("warning", -3),
    ("weak", -2),
    ("wonderful", 4),
    ("worried", -3),
    ("worry", -3),
    ("worst", -3),
    ("wow", 4),
    ("wrong", -2),
];

pub static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

pub static TEAM_NAME_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TEAM_NAMES.iter().copied().collect());

pub static SPORTS_NOUN_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SPORTS_NOUNS.iter().copied().collect());

pub static POS_OVERRIDE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| POS_OVERRIDES.iter().copied().collect());

pub static SENTIMENT_MAP: Lazy<HashMap<&'static str, i32>> =
    Lazy::new(|| SENTIMENT_LEXICON.iter().copied().collect());

pub fn is_sports_noun(word: &str) -> bool {
    SPORTS_NOUN_SET.contains(word)
}
