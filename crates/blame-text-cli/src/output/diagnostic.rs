//! Miette diagnostic wrapper for template lint warnings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use blame_text::TokenWarning;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at a token in a template.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(blame_text::lint), severity(Warning))]
pub struct TokenDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TokenDiagnostic {
    /// Create a diagnostic from a lint warning on `template`.
    pub fn from_warning(template: &str, warning: &TokenWarning) -> Self {
        let span = warning.span();
        // Clamp to the template to avoid miette panic on out-of-bounds
        let start = span.start.min(template.len());
        let len = span.end.min(template.len()).saturating_sub(start);

        let help = match warning {
            TokenWarning::UnknownToken { name, .. } => {
                Some(format!("unknown tokens render as their own name: '{name}'"))
            }
            TokenWarning::UnknownModifier { modifier, .. } => Some(format!(
                "only 'u' and 'l' are modifiers; '|{modifier}' is appended to the value"
            )),
        };

        TokenDiagnostic {
            src: NamedSource::new("format", template.to_string()),
            span: (start, len).into(),
            message: warning.to_string(),
            help,
        }
    }
}
