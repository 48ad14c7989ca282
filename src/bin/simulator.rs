use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tracing::warn;

use finder_core::core::engine::DEFAULT_LOCALE;
use finder_core::lexicon::WordlistDictionary;
use finder_core::pool::{NumberSource, LONG_RUN};
use finder_core::FinderEngine;

/// Batch-scan a fabricated pool of toll-free numbers and report every word
/// each number spells.
#[derive(Parser)]
#[command(name = "pool_simulator")]
struct Args {
    /// How many candidate numbers to fabricate
    #[arg(long, default_value_t = LONG_RUN)]
    count: usize,

    /// Fixed RNG seed for a reproducible pool
    #[arg(long)]
    seed: Option<u64>,

    /// Plain one-word-per-line wordlist
    #[arg(long, default_value = "/usr/share/dict/words")]
    wordlist: PathBuf,

    /// Dictionary locale tag
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SpelledNumber {
    number: String,
    words: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let dictionary = WordlistDictionary::from_file(&args.wordlist, &args.locale)?;
    let engine = FinderEngine::with_locale(Arc::new(dictionary), &args.locale);
    let mut source = match args.seed {
        Some(seed) => NumberSource::with_seed(seed),
        None => NumberSource::new(),
    };

    let mut report = Vec::new();
    for number in source.batch(args.count) {
        match engine.words_for_number(&number) {
            Ok(mut words) if !words.is_empty() => {
                words.sort_by_key(|word| std::cmp::Reverse(word.len()));
                report.push(SpelledNumber { number, words });
            }
            Ok(_) => {}
            Err(e) => warn!(number = %number, error = %e, "skipping entry"),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for row in &report {
            println!("{}: {}", row.number, row.words.join(", "));
        }
        println!(
            "{} of {} numbers spell at least one word",
            report.len(),
            args.count
        );
    }
    Ok(())
}
