//! Template scanner using winnow.
//!
//! Splits a format template into literal runs and `${...}` tokens in a single
//! left-to-right pass. Handles:
//! - Token opening only on `$`, `{` followed by an ASCII letter
//! - Token closing on the first `}` (no nesting, no escapes)
//! - Unterminated tokens, which are kept as literal text

use tracing::trace;
use winnow::combinator::{delimited, not, peek, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_till};

use super::ast::{Piece, Template};
use super::token::parse_body;

/// Scan a template string into pieces.
///
/// Scanning never fails. Every token is preceded by a literal piece and the
/// template always ends with one, so a template with `n` tokens has `2n + 1`
/// pieces. An unterminated token adds one more literal holding the rest of
/// the input from its `$`.
///
/// # Example
///
/// ```
/// use blame_text::parser::{Piece, scan};
///
/// let template = scan("by ${author.name|u}");
/// assert_eq!(template.pieces.len(), 3);
/// assert_eq!(template.pieces[0], Piece::Literal("by ".into()));
/// ```
pub fn scan(input: &str) -> Template {
    let mut remaining = input;
    let mut pieces = Vec::new();

    loop {
        let literal = literal_run(&mut remaining).unwrap_or_default();
        pieces.push(Piece::Literal(literal.to_string()));
        if remaining.is_empty() {
            break;
        }

        // A failed attempt may have consumed input, so parse from a copy.
        let start = input.len() - remaining.len();
        let mut attempt = remaining;
        match token_body(&mut attempt) {
            Ok(body) => {
                remaining = attempt;
                let end = input.len() - remaining.len();
                pieces.push(Piece::Token {
                    token: parse_body(body),
                    span: start..end,
                });
            }
            Err(_) => {
                pieces.push(Piece::Literal(remaining.to_string()));
                break;
            }
        }
    }

    trace!(pieces = pieces.len(), "scanned template");
    Template { pieces }
}

/// Parse literal text up to the next token opener or the end of input.
fn literal_run<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    repeat::<_, _, (), _, _>(0.., preceded(not(token_open), any))
        .take()
        .parse_next(input)
}

/// Parse a token: `${` letter ... `}`. Yields the text between the braces.
fn token_body<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited(token_open, take_till(0.., '}'), '}').parse_next(input)
}

/// Match `${` when followed by an ASCII letter. The letter is not consumed.
fn token_open(input: &mut &str) -> ModalResult<()> {
    ("${", peek(one_of(|c: char| c.is_ascii_alphabetic())))
        .void()
        .parse_next(input)
}
