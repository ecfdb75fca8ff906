//! Token body splitting.

use super::ast::ParsedToken;

/// Split a token body into function, parameter and modifier.
///
/// The first `,` and the first `|` are located independently. The parameter
/// runs between them and the modifier follows the pipe; their relative order
/// is not checked. When the pipe comes first, the parameter is the text
/// between the two positions taken in ascending order.
///
/// # Example
///
/// ```
/// use blame_text::parser::parse_body;
///
/// let token = parse_body("commit.summary,20|u");
/// assert_eq!(token.function, "commit.summary");
/// assert_eq!(token.parameter, "20");
/// assert_eq!(token.modifier, "u");
/// ```
pub fn parse_body(body: &str) -> ParsedToken {
    match (body.find(','), body.find('|')) {
        (Some(comma), Some(pipe)) => ParsedToken {
            function: body[..comma].to_string(),
            parameter: slice_between(body, comma + 1, pipe).to_string(),
            modifier: body[pipe + 1..].to_string(),
        },
        (Some(comma), None) => ParsedToken {
            function: body[..comma].to_string(),
            parameter: body[comma + 1..].to_string(),
            modifier: String::new(),
        },
        (None, Some(pipe)) => ParsedToken {
            function: body[..pipe].to_string(),
            parameter: String::new(),
            modifier: body[pipe + 1..].to_string(),
        },
        (None, None) => ParsedToken {
            function: body.to_string(),
            ..ParsedToken::default()
        },
    }
}

/// Slice `text` between two byte offsets given in either order.
fn slice_between(text: &str, a: usize, b: usize) -> &str {
    &text[a.min(b)..a.max(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_between_orders_bounds() {
        assert_eq!(slice_between("abcdef", 1, 4), "bcd");
        assert_eq!(slice_between("abcdef", 4, 1), "bcd");
        assert_eq!(slice_between("abcdef", 3, 3), "");
    }
}
