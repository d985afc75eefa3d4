//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OrthosArgs, OutputFormat};
use crate::error::Result;
use crate::suggest::{Correction, NO_SUGGESTION};

/// Result structure for a single word check.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub input: String,
    pub suggestion: Option<String>,
    pub alternates: Vec<String>,
}

impl CheckReport {
    /// Pair an input word with the correction produced for it.
    pub fn new<S: Into<String>>(input: S, correction: Correction) -> Self {
        CheckReport {
            input: input.into(),
            suggestion: correction.suggestion,
            alternates: correction.alternates,
        }
    }
}

/// One garbled input checked during a fuzz round.
#[derive(Debug, Serialize, Deserialize)]
pub struct FuzzTrial {
    pub kind: String,
    pub input: String,
    pub suggestion: Option<String>,
    pub recovered: bool,
}

/// Result structure for one fuzz round.
#[derive(Debug, Serialize, Deserialize)]
pub struct FuzzReport {
    pub sampled: String,
    pub trials: Vec<FuzzTrial>,
}

/// Print the reports of a check command.
pub fn print_check_reports(reports: &[CheckReport], args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for report in reports {
                println!(
                    "{}: {}",
                    report.input,
                    report.suggestion.as_deref().unwrap_or(NO_SUGGESTION)
                );
                if !report.alternates.is_empty() {
                    println!("  other suggestions: {}", report.alternates.join(", "));
                }
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&reports, args),
    }
}

/// Print the reports of a fuzz command.
pub fn print_fuzz_reports(reports: &[FuzzReport], args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for report in reports {
                println!();
                println!("Generated word: {}", report.sampled);
                for trial in &report.trials {
                    println!(
                        "{}: {} -> {}",
                        trial.kind,
                        trial.input,
                        trial.suggestion.as_deref().unwrap_or(NO_SUGGESTION)
                    );
                }
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&reports, args),
    }
}

/// Serialize a value to stdout as JSON, honoring the pretty flag.
pub fn print_json<T: Serialize>(value: &T, args: &OrthosArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_report_from_correction() {
        let report = CheckReport::new(
            "collor",
            Correction {
                suggestion: Some("color".to_string()),
                alternates: vec!["collar".to_string()],
            },
        );
        assert_eq!(report.input, "collor");
        assert_eq!(report.suggestion.as_deref(), Some("color"));
        assert_eq!(report.alternates, vec!["collar".to_string()]);
    }

    #[test]
    fn test_check_report_serializes_missing_suggestion_as_null() {
        let report = CheckReport::new("qqq", Correction::none());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"suggestion\":null"));
    }
}
