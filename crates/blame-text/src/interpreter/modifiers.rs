//! Display modifiers applied to resolved token values.

/// A modifier code from the `|` suffix of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier<'a> {
    /// No modifier given.
    None,
    /// `u`: uppercase the value.
    Upper,
    /// `l`: lowercase the value.
    Lower,
    /// Any other code. Kept visible as a `|code` suffix.
    Unknown(&'a str),
}

impl<'a> Modifier<'a> {
    /// Classify a modifier code.
    pub fn parse(code: &'a str) -> Modifier<'a> {
        match code {
            "" => Modifier::None,
            "u" => Modifier::Upper,
            "l" => Modifier::Lower,
            other => Modifier::Unknown(other),
        }
    }

    /// Transform `value` according to this modifier.
    pub fn apply(self, value: String) -> String {
        match self {
            Modifier::None => value,
            Modifier::Upper => value.to_uppercase(),
            Modifier::Lower => value.to_lowercase(),
            Modifier::Unknown(code) => format!("{value}|{code}"),
        }
    }
}

/// Apply the modifier `code` to `value`.
///
/// ```
/// use blame_text::interpreter::apply_modifier;
///
/// assert_eq!(apply_modifier("abc", "u"), "ABC");
/// assert_eq!(apply_modifier("x", "zz"), "x|zz");
/// ```
pub fn apply_modifier(value: &str, code: &str) -> String {
    Modifier::parse(code).apply(value.to_string())
}
