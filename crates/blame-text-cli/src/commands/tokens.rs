//! Implementation of the `blame-text tokens` command.

use blame_text::parser::scan;
use miette::Result;

use crate::output::table::format_pieces_table;

/// Arguments for the tokens command.
#[derive(Debug, clap::Args)]
pub struct TokensArgs {
    /// Format template to scan
    #[arg(long, required = true)]
    pub format: String,
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<i32> {
    let template = scan(&args.format);
    println!("{}", format_pieces_table(&template));
    Ok(exitcode::OK)
}
