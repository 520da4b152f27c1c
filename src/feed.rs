//! Flat-file loading for the scraped dataset: a roster CSV with a
//! JSON-array-in-cell column of matched headline ids, an indexed headline
//! CSV, and a play-by-play file that sometimes arrives as Python literal
//! syntax instead of JSON.
//!
//! Malformed cells coerce to empty values instead of failing the whole load;
//! only unreadable files and unparseable id cells surface as errors.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::state::{Headline, Play, PlayerEntity};

/// Load the player roster. Entities come back sorted by headline count
/// descending, the order the entity picker presents them in.
pub fn load_player_entities(path: &Path) -> Result<Vec<PlayerEntity>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open roster csv {}", path.display()))?;

    let headers = reader.headers().context("roster csv headers")?.clone();
    let name_col = column(&headers, "full_name").context("roster csv needs full_name")?;
    let ids_col =
        column(&headers, "matched_headlines").context("roster csv needs matched_headlines")?;

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .context("read roster rows")?;

    // Cell parsing is independent per row; fan out but keep row order.
    let mut entities: Vec<PlayerEntity> = records
        .par_iter()
        .map(|record| {
            let name = record.get(name_col).unwrap_or("").to_string();
            let ids = parse_headline_ids(record.get(ids_col).unwrap_or("[]"))
                .with_context(|| format!("matched_headlines for {name}"))?;
            Ok(PlayerEntity {
                name,
                headline_count: ids.len(),
                matched_headlines: ids,
            })
        })
        .collect::<Result<_>>()?;

    entities.sort_by(|a, b| b.headline_count.cmp(&a.headline_count));
    Ok(entities)
}

/// Load the indexed headline file into an id -> headline map. The index sits
/// in the unnamed leading column; rows without a numeric index are dropped,
/// missing cells become empty strings.
pub fn load_headlines(path: &Path) -> Result<HashMap<u32, Headline>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open headline csv {}", path.display()))?;

    let headers = reader.headers().context("headline csv headers")?.clone();
    let col = |name: &str| column(&headers, name);
    let link = col("link");
    let title = col("headline");
    let datetime = col("datetime");
    let source = col("source");
    let summary = col("summary");
    let authors = col("authors");
    let image_desc = col("image_desc");

    let mut headlines = HashMap::new();
    for record in reader.records() {
        let record = record.context("read headline row")?;
        let Some(index) = record.get(0).and_then(|raw| raw.trim().parse::<u32>().ok()) else {
            continue;
        };
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };
        headlines.insert(
            index,
            Headline {
                link: cell(link),
                headline: cell(title),
                datetime: cell(datetime),
                source: cell(source),
                summary: cell(summary),
                authors: cell(authors),
                image_desc: cell(image_desc),
            },
        );
    }
    Ok(headlines)
}

/// Resolve an entity's matched ids against the headline map, keeping id
/// order. Analysis input order equals this data-load order; any shuffle for
/// display happens downstream and never feeds back into analysis.
pub fn resolve_headlines(
    entity: &PlayerEntity,
    headlines: &HashMap<u32, Headline>,
) -> Vec<Headline> {
    entity
        .matched_headlines
        .iter()
        .filter_map(|id| headlines.get(id).cloned())
        .collect()
}

/// Load foul plays from a JSON file. The scrape pipeline occasionally emits
/// Python literal syntax instead of JSON; repair before the retry.
pub fn load_game_plays(path: &Path) -> Result<Vec<Play>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read plays file {}", path.display()))?;
    match serde_json::from_str::<Vec<Play>>(&raw) {
        Ok(plays) => Ok(plays),
        Err(_) => serde_json::from_str(&repair_python_literal(&raw))
            .with_context(|| format!("parse plays file {}", path.display())),
    }
}

/// Parse a JSON-array cell of headline ids, repairing Python list syntax
/// (`['1', '2']`, `None`) when strict parsing fails.
pub fn parse_headline_ids(cell: &str) -> Result<Vec<u32>> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if let Ok(ids) = serde_json::from_str::<Vec<u32>>(trimmed) {
        return Ok(ids);
    }
    let repaired = repair_python_literal(trimmed);
    if let Ok(ids) = serde_json::from_str::<Vec<u32>>(&repaired) {
        return Ok(ids);
    }
    // Some exports quote the ids.
    let quoted: Vec<String> =
        serde_json::from_str(&repaired).context("headline id cell is not a list")?;
    quoted
        .iter()
        .map(|s| s.trim().parse::<u32>().context("non-numeric headline id"))
        .collect()
}

/// Rewrite Python literal syntax into JSON: single-quoted strings become
/// double-quoted (apostrophes inside words survive), and bare `None`/`True`/
/// `False` become their JSON spellings. Keyword substitution skips string
/// content, so a description like "Nonetheless a strong take foul" loads
/// intact.
pub fn repair_python_literal(raw: &str) -> String {
    const KEYWORDS: &[(&str, &str)] = &[("None", "null"), ("True", "true"), ("False", "false")];

    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    // The delimiter that opened the string we are inside, if any.
    let mut string_open: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let word_internal = i > 0
            && chars[i - 1].is_ascii_alphanumeric()
            && chars
                .get(i + 1)
                .is_some_and(|c| c.is_ascii_alphanumeric());

        if let Some(open) = string_open {
            if ch == open && !(open == '\'' && word_internal) {
                out.push('"');
                string_open = None;
            } else {
                out.push(ch);
            }
            i += 1;
            continue;
        }

        match ch {
            '"' => {
                string_open = Some('"');
                out.push('"');
                i += 1;
            }
            '\'' if word_internal => {
                // Apostrophe inside a word, not a string delimiter.
                out.push('\'');
                i += 1;
            }
            '\'' => {
                string_open = Some('\'');
                out.push('"');
                i += 1;
            }
            _ => {
                if let Some((keyword, json)) = KEYWORDS
                    .iter()
                    .find(|(k, _)| bare_keyword_at(&chars, i, k))
                {
                    out.push_str(json);
                    i += keyword.len();
                } else {
                    out.push(ch);
                    i += 1;
                }
            }
        }
    }
    out
}

/// True when `keyword` starts at position `i` with non-alphanumeric
/// boundaries on both sides.
fn bare_keyword_at(chars: &[char], i: usize, keyword: &str) -> bool {
    if !chars[i..]
        .iter()
        .zip(keyword.chars())
        .take(keyword.len())
        .all(|(&a, b)| a == b)
        || chars[i..].len() < keyword.len()
    {
        return false;
    }
    let before_ok = i == 0 || !chars[i - 1].is_ascii_alphanumeric();
    let after_ok = chars
        .get(i + keyword.len())
        .is_none_or(|c| !c.is_ascii_alphanumeric());
    before_ok && after_ok
}

fn column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}
