//! Implementation of the `blame-text check` command.

use blame_text::lint_template;
use miette::{IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::TokenDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Format template to check
    #[arg(long, required = true)]
    pub format: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single warning.
#[derive(Debug, Serialize)]
struct WarningJson {
    message: String,
    start: usize,
    end: usize,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let warnings = lint_template(&args.format);

    if args.json {
        let json_data: Vec<WarningJson> = warnings
            .iter()
            .map(|w| WarningJson {
                message: w.to_string(),
                start: w.span().start,
                end: w.span().end,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json_data).into_diagnostic()?
        );
    } else if warnings.is_empty() {
        println!("{} template is valid", "ok:".green());
    } else {
        for warning in &warnings {
            let diagnostic = TokenDiagnostic::from_warning(&args.format, warning);
            eprintln!("{:?}", Report::new(diagnostic));
        }
    }

    if warnings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
