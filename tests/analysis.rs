use courtwire::analysis::analyze;
use courtwire::state::Headline;

fn h(text: &str) -> Headline {
    Headline {
        headline: text.to_string(),
        ..Headline::default()
    }
}

fn h_with_summary(text: &str, summary: &str) -> Headline {
    Headline {
        headline: text.to_string(),
        summary: summary.to_string(),
        ..Headline::default()
    }
}

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn total_headlines_matches_input_length() {
    let batch = vec![h("Dominant fourth quarter"), h("Stunning comeback"), h("")];
    let result = analyze(&batch, &[]);
    assert_eq!(result.total_headlines, 3);
}

#[test]
fn tables_are_sorted_non_increasing_with_positive_counts() {
    let batch = vec![
        h("Stunning defense fuels stunning streak"),
        h("Defense holds again as streak reaches seven"),
        h("Streak ends in heartbreaking fashion"),
    ];
    let result = analyze(&batch, &[]);

    let assert_sorted = |counts: Vec<u32>| {
        assert!(counts.iter().all(|&c| c >= 1));
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    };
    assert_sorted(result.top_words.iter().map(|r| r.count).collect());
    assert_sorted(result.top_adjectives.iter().map(|r| r.count).collect());
    assert_sorted(result.top_verbs.iter().map(|r| r.count).collect());
    assert_sorted(result.top_phrases.iter().map(|r| r.count).collect());
}

#[test]
fn analysis_is_idempotent() {
    let batch = vec![
        h("Stunning win streak reaches ten"),
        h_with_summary("Tough stretch ahead", "A brutal schedule looms."),
    ];
    let names = roster(&["Jane Doe"]);
    assert_eq!(analyze(&batch, &names), analyze(&batch, &names));
}

#[test]
fn fully_quoted_headline_is_sentiment_neutral() {
    // The whole text sits inside quotes, so nothing reaches the scorer and
    // nothing enters the emotional tables.
    let batch = vec![h("\"terrible awful disaster\"")];
    let result = analyze(&batch, &[]);
    assert_eq!(result.overall_sentiment, 0.0);
    assert!(result.top_positive_words.is_empty());
    assert!(result.top_negative_words.is_empty());
    // Word counting still sees the original text.
    assert!(result.top_words.iter().any(|r| r.word == "terrible"));
}

#[test]
fn roster_name_only_headline_yields_empty_tables() {
    let batch = vec![h("Jane Doe")];
    let result = analyze(&batch, &roster(&["Jane Doe"]));
    assert!(result.top_words.is_empty());
    assert!(result.top_adjectives.is_empty());
    assert!(result.top_verbs.is_empty());
    assert!(result.top_phrases.is_empty());
}

#[test]
fn name_exclusion_is_global_not_scoped_to_one_entity() {
    // "Doe" belongs to a different roster entry than the one under analysis;
    // the fragment is excluded all the same.
    let batch = vec![h("Doe dominates again")];
    let result = analyze(&batch, &roster(&["Jane Doe", "Ada Vale"]));
    assert!(result.top_words.iter().all(|r| r.word != "doe"));
    assert!(result.top_words.iter().any(|r| r.word == "dominates"));
}

#[test]
fn sports_nouns_stay_out_of_adjective_and_verb_tables() {
    let batch = vec![h("Fouls mount late"), h("Fouls decide the finish")];
    let result = analyze(&batch, &[]);
    let fouls = result
        .top_words
        .iter()
        .find(|r| r.word == "fouls")
        .expect("fouls should be a counted word");
    assert_eq!(fouls.count, 2);
    assert!(result.top_adjectives.iter().all(|r| r.word != "fouls"));
    assert!(result.top_verbs.iter().all(|r| r.word != "fouls"));
}

#[test]
fn phrase_windows_containing_excluded_words_are_dropped() {
    let batch = vec![h("the great performance"), h("the great performance")];
    let result = analyze(&batch, &[]);
    assert!(result.top_phrases.iter().any(|r| r.phrase == "great performance"));
    assert!(result.top_phrases.iter().all(|r| !r.phrase.contains("the")));
}

#[test]
fn single_occurrence_phrases_are_filtered() {
    let batch = vec![h("great performance tonight")];
    let result = analyze(&batch, &[]);
    assert!(result.top_phrases.is_empty());
}

#[test]
fn scenario_stunning_counts_and_fans_stays_noun() {
    let batch = vec![
        h("Player X delivers stunning win"),
        h("Fans call performance stunning"),
    ];
    let result = analyze(&batch, &roster(&["Player X"]));

    let stunning = result
        .top_words
        .iter()
        .find(|r| r.word == "stunning")
        .expect("stunning should be counted");
    assert_eq!(stunning.count, 2);

    let stunning_adj = result
        .top_adjectives
        .iter()
        .find(|r| r.word == "stunning")
        .expect("stunning should be an adjective");
    assert_eq!(stunning_adj.count, 2);

    assert!(result.top_verbs.iter().all(|r| r.word != "fans"));
    assert!(result.top_verbs.iter().any(|r| r.word == "delivers"));
}

#[test]
fn two_character_words_never_surface() {
    // "thriller stuns" recurs, so the phrase table is non-empty and the
    // assertion actually exercises the windows next to "ot".
    let batch = vec![
        h("OT thriller stuns crowd in OT"),
        h("Another OT thriller stuns crowd"),
    ];
    let result = analyze(&batch, &[]);
    assert!(result.top_words.iter().all(|r| r.word != "ot"));
    assert!(!result.top_phrases.is_empty());
    assert!(result
        .top_phrases
        .iter()
        .flat_map(|r| r.phrase.split_whitespace())
        .all(|w| w != "ot"));
    assert!(result.top_phrases.iter().any(|r| r.phrase == "thriller stuns"));
}

#[test]
fn empty_batch_returns_well_formed_zero_result() {
    let result = analyze(&[], &roster(&["Jane Doe"]));
    assert_eq!(result.total_headlines, 0);
    assert!(result.top_words.is_empty());
    assert!(result.top_adjectives.is_empty());
    assert!(result.top_verbs.is_empty());
    assert!(result.top_positive_words.is_empty());
    assert!(result.top_negative_words.is_empty());
    assert!(result.top_phrases.is_empty());
    assert_eq!(result.overall_sentiment, 0.0);
}

#[test]
fn emotional_words_average_their_scores() {
    let batch = vec![h("A stunning night"), h("Simply stunning basketball")];
    let result = analyze(&batch, &[]);
    let stunning = result
        .top_positive_words
        .iter()
        .find(|r| r.word == "stunning")
        .expect("stunning should be emotionally significant");
    assert_eq!(stunning.count, 2);
    assert!((stunning.sentiment - 4.0).abs() < 1e-9);
}

#[test]
fn quoted_praise_does_not_feed_emotional_tables() {
    let batch = vec![h("Coach reacts: \"stunning effort\" from the bench")];
    let result = analyze(&batch, &[]);
    assert!(result.top_positive_words.is_empty());
    // The word itself still counts outside sentiment.
    assert!(result.top_words.iter().any(|r| r.word == "stunning"));
}
