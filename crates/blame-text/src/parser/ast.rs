//! Public AST types for status format templates.
//!
//! These types are public to enable external tooling (linters, the CLI token dump).

use std::ops::Range;

/// A scanned template: literal runs and tokens in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub pieces: Vec<Piece>,
}

impl Template {
    /// Iterate over the tokens of this template, skipping literals.
    pub fn tokens(&self) -> impl Iterator<Item = (&ParsedToken, &Range<usize>)> {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Token { token, span } => Some((token, span)),
            Piece::Literal(_) => None,
        })
    }
}

/// A piece of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    /// Literal text, copied to the output verbatim. May be empty.
    Literal(String),
    /// A `${...}` region.
    Token {
        token: ParsedToken,
        /// Byte range of the whole `${...}` region in the source template.
        span: Range<usize>,
    },
}

/// The body of a token split into its parts: `function[,parameter][|modifier]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedToken {
    /// Binding name, e.g. `commit.hash_short`.
    pub function: String,
    /// Argument passed to the binding. Empty when absent.
    pub parameter: String,
    /// Display modifier code, e.g. `u`. Empty when absent.
    pub modifier: String,
}
