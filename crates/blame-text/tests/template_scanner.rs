//! Integration tests for template scanning and token body splitting.

use blame_text::parser::{ParsedToken, Piece, parse_body, scan};

fn token(function: &str, parameter: &str, modifier: &str) -> ParsedToken {
    ParsedToken {
        function: function.into(),
        parameter: parameter.into(),
        modifier: modifier.into(),
    }
}

fn lit(text: &str) -> Piece {
    Piece::Literal(text.into())
}

fn tok(function: &str, start: usize, end: usize) -> Piece {
    Piece::Token {
        token: token(function, "", ""),
        span: start..end,
    }
}

// =============================================================================
// Literal-only templates
// =============================================================================

#[test]
fn test_pure_literal() {
    let t = scan("Hello, world!");
    assert_eq!(t.pieces, vec![lit("Hello, world!")]);
}

#[test]
fn test_empty_string() {
    let t = scan("");
    assert_eq!(t.pieces, vec![lit("")]);
}

#[test]
fn test_dollar_brace_without_letter_is_literal() {
    for input in ["${1abc}", "${ abc}", "${}", "${", "$", "{abc}", "$ {abc}", "${_x}"] {
        assert_eq!(scan(input).pieces, vec![lit(input)], "input: {input}");
    }
}

// =============================================================================
// Tokens
// =============================================================================

#[test]
fn test_single_token() {
    let t = scan("${a}");
    assert_eq!(t.pieces, vec![lit(""), tok("a", 0, 4), lit("")]);
}

#[test]
fn test_tokens_between_literals() {
    let t = scan("x ${author.name} y ${commit.summary,3|u} z");
    assert_eq!(
        t.pieces,
        vec![
            lit("x "),
            tok("author.name", 2, 16),
            lit(" y "),
            Piece::Token {
                token: token("commit.summary", "3", "u"),
                span: 19..40,
            },
            lit(" z"),
        ]
    );
}

#[test]
fn test_adjacent_tokens_have_empty_literal_between() {
    let t = scan("${a}${b}");
    assert_eq!(
        t.pieces,
        vec![lit(""), tok("a", 0, 4), lit(""), tok("b", 4, 8), lit("")]
    );
}

#[test]
fn test_piece_count_is_two_per_token_plus_one() {
    let t = scan("${a} ${b} ${c}");
    assert_eq!(t.pieces.len(), 7);
    assert_eq!(t.tokens().count(), 3);
}

#[test]
fn test_dollar_before_token_stays_literal() {
    let t = scan("$${a}");
    assert_eq!(t.pieces, vec![lit("$"), tok("a", 1, 5), lit("")]);
}

#[test]
fn test_uppercase_letter_opens_token() {
    let t = scan("${Z}");
    assert_eq!(t.pieces, vec![lit(""), tok("Z", 0, 4), lit("")]);
}

#[test]
fn test_body_ends_at_first_closing_brace() {
    let t = scan("${a${b}c}");
    assert_eq!(t.pieces, vec![lit(""), tok("a${b", 0, 7), lit("c}")]);
}

#[test]
fn test_spans_are_byte_offsets() {
    let t = scan("é ${author.name} ü");
    assert_eq!(
        t.pieces,
        vec![lit("é "), tok("author.name", 3, 17), lit(" ü")]
    );
}

// =============================================================================
// Unterminated tokens
// =============================================================================

#[test]
fn test_unterminated_token_is_literal() {
    let t = scan("abc ${foo");
    assert_eq!(t.pieces, vec![lit("abc "), lit("${foo")]);
}

#[test]
fn test_unterminated_after_complete_token() {
    let t = scan("${a} ${b");
    assert_eq!(
        t.pieces,
        vec![lit(""), tok("a", 0, 4), lit(" "), lit("${b")]
    );
}

#[test]
fn test_unterminated_keeps_inner_openers() {
    let t = scan("${a ${b");
    assert_eq!(t.pieces, vec![lit(""), lit("${a ${b")]);
}

// =============================================================================
// Token bodies
// =============================================================================

#[test]
fn test_body_function_only() {
    assert_eq!(parse_body("commit.hash"), token("commit.hash", "", ""));
}

#[test]
fn test_body_with_parameter() {
    assert_eq!(
        parse_body("commit.hash_short,10"),
        token("commit.hash_short", "10", "")
    );
}

#[test]
fn test_body_with_modifier() {
    assert_eq!(parse_body("author.name|u"), token("author.name", "", "u"));
}

#[test]
fn test_body_with_parameter_and_modifier() {
    assert_eq!(
        parse_body("commit.summary,20|l"),
        token("commit.summary", "20", "l")
    );
}

#[test]
fn test_body_splits_on_first_comma_and_pipe() {
    assert_eq!(parse_body("a,b,c|d|e"), token("a", "b,c", "d|e"));
}

#[test]
fn test_body_pipe_before_comma_uses_both_indices() {
    // comma at 3, pipe at 1: the parameter spans the two positions in order.
    assert_eq!(parse_body("f|m,p"), token("f|m", "|m,", "m,p"));
}

#[test]
fn test_body_pipe_directly_before_comma() {
    assert_eq!(parse_body("f|,p"), token("f|", "|,", ",p"));
}

#[test]
fn test_body_empty_parts() {
    assert_eq!(parse_body("a,|"), token("a", "", ""));
    assert_eq!(parse_body("a,"), token("a", "", ""));
    assert_eq!(parse_body("a|"), token("a", "", ""));
}
