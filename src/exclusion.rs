use std::collections::HashSet;

use crate::lexicon::{STOP_WORD_SET, TEAM_NAME_SET};

/// Lowercase single-word fragments of every roster name. The set is global:
/// any fragment of any known player suppresses the word for every entity
/// under analysis, not just the selected one.
pub fn name_token_set(all_player_names: &[String]) -> HashSet<String> {
    all_player_names
        .iter()
        .flat_map(|name| name.split_whitespace())
        .map(|part| part.to_lowercase())
        .collect()
}

/// Whether a word is suppressed from the analytic aggregates. Pure function
/// of the word, the name-token set, and the static lists.
///
/// Words shorter than 3 characters are always excluded, even when
/// linguistically meaningful ("ot" never counts, "mvp" does). This is an
/// intentional noise suppressor for headline text.
pub fn should_exclude(word: &str, name_tokens: &HashSet<String>) -> bool {
    let lower = word.to_lowercase();
    STOP_WORD_SET.contains(lower.as_str())
        || TEAM_NAME_SET.contains(lower.as_str())
        || name_tokens.contains(&lower)
        || word.len() < 3
        || (!word.is_empty() && word.chars().all(|c| c.is_ascii_digit()))
}
