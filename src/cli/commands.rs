//! Command implementations for the Orthos CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use crate::checker::SpellChecker;
use crate::cli::args::{CheckArgs, Command, FuzzArgs, OrthosArgs, OutputFormat, ReplArgs};
use crate::cli::output::{CheckReport, FuzzReport, FuzzTrial, print_check_reports, print_fuzz_reports, print_json};
use crate::dictionary::Dictionary;
use crate::error::{OrthosError, Result};
use crate::typo;

/// Execute a CLI command.
pub fn execute_command(args: OrthosArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_words(check_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
        Command::Fuzz(fuzz_args) => run_fuzz(fuzz_args.clone(), &args),
    }
}

/// Load the word list and report timing at normal verbosity.
fn load_checker(path: &Path, cli_args: &OrthosArgs) -> Result<SpellChecker> {
    if !path.exists() {
        return Err(OrthosError::dictionary(format!(
            "cannot find the word list at '{}'",
            path.display()
        )));
    }

    let start_time = Instant::now();
    let dictionary = Dictionary::load_from_file(path)?;
    let duration = start_time.elapsed();

    if cli_args.verbosity() > 0 && cli_args.output_format == OutputFormat::Human {
        println!(
            "Loaded {} words in {:.3} seconds.",
            dictionary.word_count(),
            duration.as_secs_f64()
        );
    }

    Ok(SpellChecker::new(dictionary))
}

/// Check each word given on the command line.
fn check_words(args: CheckArgs, cli_args: &OrthosArgs) -> Result<()> {
    let checker = load_checker(&args.dictionary, cli_args)?;

    let reports: Vec<CheckReport> = args
        .words
        .iter()
        .map(|word| CheckReport::new(word.as_str(), checker.check(word)))
        .collect();

    print_check_reports(&reports, cli_args)
}

/// Prompt for words on standard input until EOF.
fn run_repl(args: ReplArgs, cli_args: &OrthosArgs) -> Result<()> {
    let checker = load_checker(&args.dictionary, cli_args)?;

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let word = input.trim();
        if word.is_empty() {
            continue;
        }

        let correction = checker.check(word);
        match cli_args.output_format {
            OutputFormat::Human => {
                println!("Suggest: {}", correction.display_suggestion());
                if !correction.alternates.is_empty() {
                    println!("Other suggestions: {}", correction.alternates.join(", "));
                }
            }
            OutputFormat::Json => {
                print_json(&CheckReport::new(word, correction), cli_args)?;
            }
        }
    }

    Ok(())
}

/// Sample random dictionary words, derive misspellings, and check each.
fn run_fuzz(args: FuzzArgs, cli_args: &OrthosArgs) -> Result<()> {
    let checker = load_checker(&args.dictionary, cli_args)?;
    let mut rng = rand::rng();

    let mut reports = Vec::new();
    for _ in 0..args.count {
        let sampled = match checker.dictionary().sample_random_word() {
            Some(word) => word.to_string(),
            None => return Err(OrthosError::dictionary("the word list is empty")),
        };

        let inputs = vec![
            ("Corrected", sampled.clone()),
            ("Repeated letter", typo::repeat_letters(&sampled, &mut rng)),
            ("Case error", typo::scramble_case(&sampled, &mut rng)),
            ("Incorrect vowel", typo::swap_vowels(&sampled, &mut rng)),
            ("Mixed errors", typo::garble(&sampled, &mut rng)),
        ];

        let trials = inputs
            .into_iter()
            .map(|(kind, input)| {
                let correction = checker.check(&input);
                FuzzTrial {
                    kind: kind.to_string(),
                    recovered: correction.suggestion.as_deref() == Some(sampled.as_str()),
                    input,
                    suggestion: correction.suggestion,
                }
            })
            .collect();

        reports.push(FuzzReport { sampled, trials });
    }

    print_fuzz_reports(&reports, cli_args)
}
