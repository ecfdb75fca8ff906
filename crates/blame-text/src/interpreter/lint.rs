//! Static checks for format templates.
//!
//! Rendering never rejects a template, so mistakes such as a misspelled token
//! name only show up as odd output. The lint finds them ahead of time.

use std::ops::Range;

use thiserror::Error;

use crate::interpreter::bindings::TOKEN_NAMES;
use crate::interpreter::modifiers::Modifier;
use crate::parser::{Template, scan};

/// A problem found in a template. Each carries the byte span of its token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenWarning {
    /// The function name has no binding and will be echoed verbatim.
    #[error("unknown token '{name}'{}", did_you_mean(.suggestions))]
    UnknownToken {
        name: String,
        span: Range<usize>,
        suggestions: Vec<String>,
    },

    /// The modifier is not `u` or `l` and will be appended as `|code`.
    #[error("unknown modifier '{modifier}' on '{name}'")]
    UnknownModifier {
        name: String,
        modifier: String,
        span: Range<usize>,
    },
}

impl TokenWarning {
    /// Byte range of the offending `${...}` region.
    pub fn span(&self) -> &Range<usize> {
        match self {
            TokenWarning::UnknownToken { span, .. } | TokenWarning::UnknownModifier { span, .. } => {
                span
            }
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Check a template string against the token vocabulary.
pub fn lint_template(template: &str) -> Vec<TokenWarning> {
    lint_scanned(&scan(template))
}

/// Check an already scanned template against the token vocabulary.
pub fn lint_scanned(template: &Template) -> Vec<TokenWarning> {
    let mut warnings = Vec::new();
    for (token, span) in template.tokens() {
        if !TOKEN_NAMES.contains(&token.function.as_str()) {
            warnings.push(TokenWarning::UnknownToken {
                name: token.function.clone(),
                span: span.clone(),
                suggestions: compute_suggestions(&token.function, TOKEN_NAMES),
            });
        }
        if let Modifier::Unknown(code) = Modifier::parse(&token.modifier) {
            warnings.push(TokenWarning::UnknownModifier {
                name: token.function.clone(),
                modifier: code.to_string(),
                span: span.clone(),
            });
        }
    }
    warnings
}

const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Up to three names from `available` close to `name`, closest first.
///
/// Names within Levenshtein distance 2 qualify.
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
