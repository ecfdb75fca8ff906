//! Implementation of the `blame-text render` command.

use std::fs::read_to_string;
use std::io::{read_to_string as read_all, stdin};
use std::path::{Path, PathBuf};

use blame_text::{CommitRecord, StatusConfig};
use chrono::{DateTime, Utc};
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;
use tracing::debug;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Commit record as JSON (`-` reads from stdin)
    #[arg(long, required = true)]
    pub commit: PathBuf,

    /// Format template, overriding the configured one
    #[arg(long)]
    pub format: Option<String>,

    /// Configuration file (.toml)
    #[arg(long, env = "BLAME_TEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Render as of this unix timestamp instead of the current time
    #[arg(long)]
    pub now: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub result: String,
}

/// Read the commit record from a file or stdin.
fn read_commit(path: &Path) -> Result<CommitRecord> {
    let content = if path.as_os_str() == "-" {
        read_all(stdin())
            .into_diagnostic()
            .map_err(|e| miette!("Cannot read commit from stdin: {}", e))?
    } else {
        read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Cannot read commit file {}: {}", path.display(), e))?
    };
    serde_json::from_str(&content)
        .into_diagnostic()
        .map_err(|e| miette!("Invalid commit record: {}", e))
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> Result<i32> {
    let commit = read_commit(&args.commit)?;

    let mut config = match &args.config {
        Some(path) => StatusConfig::load(path).into_diagnostic()?,
        None => StatusConfig::default(),
    };
    if let Some(format) = args.format {
        config.message_format = Some(format);
    }

    let now = match args.now {
        Some(seconds) => DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| miette!("Timestamp {} is out of range", seconds))?,
        None => Utc::now(),
    };
    debug!(hash = %commit.hash, %now, "rendering status text");

    let result = config.render_at(&commit, now);
    if args.json {
        let output = RenderResult { result };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
