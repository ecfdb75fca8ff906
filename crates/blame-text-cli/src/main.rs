//! `blame-text` binary.
//!
//! Renders and inspects the status-bar templates used to describe the commit
//! behind a blamed line. Commit records are read as JSON; templates come from
//! `--format` or a TOML config file.

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_render, run_tokens, CheckArgs, RenderArgs, TokensArgs};
use miette::{MietteHandlerOpts, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "blame-text", version)]
#[command(about = "Render and lint blame status text templates")]
struct Cli {
    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    color: ColorWhen,

    /// Log engine decisions (unknown tokens, blank commits) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorWhen {
    /// Follow the terminal and `NO_COLOR` / `FORCE_COLOR`
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// The forced color setting, or `None` to let owo-colors detect it.
    fn forced(self) -> Option<bool> {
        match self {
            ColorWhen::Auto => None,
            ColorWhen::Always => Some(true),
            ColorWhen::Never => Some(false),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render status text for a commit record (JSON)
    Render(RenderArgs),
    /// Show the pieces a template scans into
    Tokens(TokensArgs),
    /// Report unknown tokens and modifiers in a template
    Check(CheckArgs),
}

impl Cli {
    /// Run the selected subcommand and return its exit code.
    fn dispatch(self) -> Result<i32> {
        match self.command {
            Commands::Render(args) => run_render(args),
            Commands::Tokens(args) => run_tokens(args),
            Commands::Check(args) => run_check(args),
        }
    }
}

/// Default filter level; `RUST_LOG` overrides it.
fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_writer(stderr)
        .with_env_filter(filter)
        .init();
}

fn install_report_handler() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(MietteHandlerOpts::new().unicode(true).context_lines(1).build())
    }))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(forced) = cli.color.forced() {
        owo_colors::set_override(forced);
    }
    init_logging(cli.verbose);
    install_report_handler()?;

    let code = cli.dispatch().unwrap_or_else(|report| {
        eprintln!("{report:?}");
        exitcode::SOFTWARE
    });
    exit(code)
}
