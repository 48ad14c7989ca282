use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::sync::Arc;

use crossterm::style::Stylize;
use tracing::warn;

use finder_core::core::engine::DEFAULT_LOCALE;
use finder_core::core::types::MAX_WORD_LEN;
use finder_core::lexicon::WordlistDictionary;
use finder_core::pool::NumberSource;
use finder_core::suggest::{filter_spellable, ScriptedSuggestions, SuggestionService};
use finder_core::{FinderEngine, FinderError};

const CACHE_PATH: &str = "lexicon_cache.bin";
const DEFAULT_WORDLIST: &str = "/usr/share/dict/words";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let wordlist = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_WORDLIST.to_string());
    let dictionary = match WordlistDictionary::from_cache_or_source(
        Path::new(CACHE_PATH),
        Path::new(&wordlist),
        DEFAULT_LOCALE,
    ) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Could not load a dictionary: {}", e);
            eprintln!("Pass a wordlist path as the first argument.");
            std::process::exit(1);
        }
    };

    let engine = FinderEngine::new(Arc::new(dictionary));
    let mut source = NumberSource::new();
    let available_numbers = source.long_batch();

    println!("1-800 Number Finder");
    loop {
        println!();
        println!("Choose what you want to do:");
        println!("  1) Check if my word is available");
        println!("  2) Suggest some words");
        println!("  3) Show me some available words");
        println!("  exit) Leave the program");
        match prompt("> ").as_str() {
            "1" => check_word(&engine, &available_numbers),
            "2" => suggest_words(&engine, &available_numbers),
            "3" => show_available_words(&engine, &mut source),
            "exit" | "quit" | "q" => break,
            _ => println!("Pick 1, 2, 3 or exit."),
        }
    }
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    stdout().flush().unwrap();
    let mut input = String::new();
    stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

fn check_word(engine: &FinderEngine, pool: &[String]) {
    println!("Enter a word here to see if it is available.");
    println!("Note: words must be 3-7 letters.");
    let word = prompt("word> ");
    if word.chars().count() > MAX_WORD_LEN {
        println!("1-800 numbers only accommodate words up to seven letters long.");
        println!("Please try a shorter word.");
        return;
    }
    match engine.search_pool_for_word(&word, pool) {
        Err(FinderError::InvalidQuery(_)) => {
            println!("You need to input a word to find its matching numbers.");
        }
        Err(e) => println!("Search failed: {}", e),
        Ok(result) => {
            println!(
                "You are looking for a number ending with {}.",
                engine.number_for_word(&word)
            );
            match result {
                Some(number) => {
                    println!(
                        "{}",
                        format!("The number you are looking for is available! It's {}", number)
                            .blue()
                    );
                    offer_purchase(&number);
                }
                None => {
                    println!("Sorry. That number is not available.");
                    println!("Try another word, or pick the menu option to see available words.");
                }
            }
        }
    }
}

fn suggest_words(engine: &FinderEngine, pool: &[String]) {
    println!("Write a short description of your organization.");
    println!("Include aspects that you would like to highlight in your marketing.");
    let description = prompt("description> ");
    let service = ScriptedSuggestions::default();
    let suggestions = match service.suggest_words(&description) {
        Ok(words) => filter_spellable(words),
        Err(e) => {
            warn!(error = %e, "suggestion service failed");
            println!("Sorry! Something went wrong. Please try again.");
            return;
        }
    };

    println!("{:<15}{:<9}{}", "Suggestion", "Number", "Availability");
    let mut purchasable: Vec<(String, String)> = Vec::new();
    for word in &suggestions {
        let number = engine.number_for_word(word);
        match engine.search_pool_for_word(word, pool) {
            Ok(Some(available)) => {
                println!("{}", format!("{:<15}{:<9}Available!", word, number).blue());
                purchasable.push((word.clone(), available));
            }
            Ok(None) => {
                println!(
                    "{}",
                    format!("{:<15}{:<9}Not available.", word, number).dark_grey()
                );
            }
            Err(e) => warn!(word = %word, error = %e, "skipping suggestion"),
        }
    }

    if purchasable.is_empty() {
        return;
    }
    let choice = prompt("Type an available word to purchase its number, or press Enter to go back: ");
    if let Some((_, number)) = purchasable
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(&choice))
    {
        offer_purchase(number);
    }
}

fn show_available_words(engine: &FinderEngine, source: &mut NumberSource) {
    println!("Finding available words...");
    let mut combos: Vec<(String, Vec<String>)> = Vec::new();
    for number in source.short_batch() {
        match engine.words_for_number(&number) {
            Ok(mut words) if !words.is_empty() => {
                // longest words first
                words.sort_by_key(|word| std::cmp::Reverse(word.len()));
                combos.push((number, words));
            }
            Ok(_) => {}
            Err(e) => warn!(number = %number, error = %e, "skipping entry"),
        }
    }

    if combos.is_empty() {
        println!("None of this batch spells a word. Run the option again for a new batch.");
        return;
    }
    println!("Here are some available numbers, and the words they spell.");
    for (index, (number, words)) in combos.iter().enumerate() {
        println!(
            "{}",
            format!("  [{}] {}: {}", index + 1, number, words.join(", ")).blue()
        );
    }
    let choice = prompt("Enter an index to purchase that number, or press Enter to go back: ");
    if let Ok(index) = choice.parse::<usize>() {
        if index >= 1 && index <= combos.len() {
            offer_purchase(&combos[index - 1].0);
        }
    }
}

fn offer_purchase(number: &str) {
    let answer = prompt(&format!("Do you want to purchase the number {}? [y/N] ", number));
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        println!();
        println!("{}", "Congratulations!".green());
        println!("You have successfully purchased the number: {}", number);
        println!("Pick a menu option to find more numbers, or type exit to leave.");
    }
}
