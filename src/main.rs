use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use rand::seq::SliceRandom;

use courtwire::analysis::analyze;
use courtwire::feed::{load_headlines, load_player_entities, resolve_headlines};
use courtwire::state::{AnalysisResult, Headline};

struct Args {
    roster_csv: PathBuf,
    headlines_csv: PathBuf,
    entity: Option<String>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut roster_csv = None;
    let mut headlines_csv = None;
    let mut entity = None;
    let mut json = false;

    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if roster_csv.is_none() {
            roster_csv = Some(PathBuf::from(arg));
        } else if headlines_csv.is_none() {
            headlines_csv = Some(PathBuf::from(arg));
        } else {
            entity = Some(arg);
        }
    }

    let (Some(roster_csv), Some(headlines_csv)) = (roster_csv, headlines_csv) else {
        bail!("usage: courtwire <roster.csv> <headlines.csv> [player name] [--json]");
    };
    Ok(Args {
        roster_csv,
        headlines_csv,
        entity,
        json,
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let entities = load_player_entities(&args.roster_csv)?;
    let headlines = load_headlines(&args.headlines_csv)?;
    let roster: Vec<String> = entities.iter().map(|e| e.name.clone()).collect();

    let entity = match &args.entity {
        Some(name) => entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .with_context(|| format!("no player named {name:?} in the roster"))?,
        // Entities are sorted by coverage; default to the most-covered one.
        None => entities.first().context("roster is empty")?,
    };

    let batch = resolve_headlines(entity, &headlines);
    let result = analyze(&batch, &roster);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&entity.name, &batch, &result);
    Ok(())
}

fn print_report(name: &str, batch: &[Headline], result: &AnalysisResult) {
    println!("{name} — {} matched headlines", result.total_headlines);
    if let (Some(first), Some(last)) = (
        batch.iter().filter_map(|h| h.published_at()).min(),
        batch.iter().filter_map(|h| h.published_at()).max(),
    ) {
        println!("coverage: {first} .. {last}");
    }
    println!("overall sentiment: {:+.3}", result.overall_sentiment);

    println!("\ntop words");
    for row in &result.top_words {
        println!("  {:>4}  {}", row.count, row.word);
    }
    println!("\ntop adjectives");
    for row in &result.top_adjectives {
        println!("  {:>4}  {}", row.count, row.word);
    }
    println!("\ntop verbs");
    for row in &result.top_verbs {
        println!("  {:>4}  {}", row.count, row.word);
    }
    println!("\npositive words");
    for row in &result.top_positive_words {
        println!("  {:>4}  {}  (avg {:+.1})", row.count, row.word, row.sentiment);
    }
    println!("\nnegative words");
    for row in &result.top_negative_words {
        println!("  {:>4}  {}  (avg {:+.1})", row.count, row.word, row.sentiment);
    }
    println!("\ntop phrases");
    for row in &result.top_phrases {
        println!("  {:>4}  {}", row.count, row.phrase);
    }

    // Display-only sample; analysis already ran on load order.
    let mut sample: Vec<&Headline> = batch.iter().collect();
    sample.shuffle(&mut rand::thread_rng());
    if !sample.is_empty() {
        println!("\nsample headlines");
        for h in sample.iter().take(5) {
            println!("  [{}] {}", h.source, h.headline);
        }
    }
}
