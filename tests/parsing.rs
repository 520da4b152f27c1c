use std::path::PathBuf;

use courtwire::analysis::analyze;
use courtwire::feed::{load_game_plays, load_headlines, load_player_entities, resolve_headlines};
use courtwire::plays::group_plays;

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn roster_sorts_by_coverage_and_repairs_python_cells() {
    let entities = load_player_entities(&fixture("player_headlines.csv")).expect("roster parses");
    assert_eq!(entities.len(), 2);
    // Aria has two matched headlines, so she leads despite appearing second.
    assert_eq!(entities[0].name, "Aria Quill");
    assert_eq!(entities[0].matched_headlines, vec![0, 2]);
    assert_eq!(entities[0].headline_count, 2);
    // Nova's cell uses Python list syntax with quoted ids.
    assert_eq!(entities[1].matched_headlines, vec![1]);
}

#[test]
fn headlines_key_by_leading_index_and_coerce_missing_cells() {
    let headlines = load_headlines(&fixture("all_headlines.csv")).expect("headlines parse");
    assert_eq!(headlines.len(), 3);
    let first = &headlines[&0];
    assert_eq!(first.headline, "Aria Quill delivers stunning win");
    assert_eq!(first.summary, "");
    assert_eq!(first.image_desc, "Action shot");
    assert!(first.published_at().is_some());
    assert_eq!(headlines[&1].summary, "A brutal night from the field.");
}

#[test]
fn resolution_preserves_matched_id_order() {
    let entities = load_player_entities(&fixture("player_headlines.csv")).expect("roster parses");
    let headlines = load_headlines(&fixture("all_headlines.csv")).expect("headlines parse");
    let batch = resolve_headlines(&entities[0], &headlines);
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].headline, "Aria Quill delivers stunning win");
    assert_eq!(batch[1].headline, "Fans call performance stunning");
}

#[test]
fn end_to_end_analysis_over_fixture_data() {
    let entities = load_player_entities(&fixture("player_headlines.csv")).expect("roster parses");
    let headlines = load_headlines(&fixture("all_headlines.csv")).expect("headlines parse");
    let roster: Vec<String> = entities.iter().map(|e| e.name.clone()).collect();

    let batch = resolve_headlines(&entities[0], &headlines);
    let result = analyze(&batch, &roster);

    assert_eq!(result.total_headlines, 2);
    // Roster fragments never surface, whichever entity they belong to.
    for fragment in ["aria", "quill", "nova", "trent"] {
        assert!(result.top_words.iter().all(|r| r.word != fragment));
    }
    let stunning = result
        .top_words
        .iter()
        .find(|r| r.word == "stunning")
        .expect("stunning should be counted");
    assert_eq!(stunning.count, 2);
}

#[test]
fn plays_file_in_python_syntax_loads_and_groups() {
    let plays = load_game_plays(&fixture("game_plays.json")).expect("plays parse");
    assert_eq!(plays.len(), 3);
    assert_eq!(plays[0].period, Some(2));
    assert_eq!(plays[1].video_url.as_deref(), Some("https://example.com/v.mp4"));

    let grouped = group_plays(plays);
    assert_eq!(grouped.technical_fouls.len(), 1);
    assert_eq!(grouped.flagrant_fouls.len(), 1);
    assert_eq!(grouped.regular_fouls.len(), 1);
    assert_eq!(grouped.regular_fouls[0].description, "Shooting foul, two shots");
}
