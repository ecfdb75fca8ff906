//! Template evaluation against a binding table.
//!
//! Literal pieces are copied to the output; each token is looked up by
//! function name, resolved with its parameter, and passed through its
//! modifier. Evaluation never fails: unknown names echo themselves.

use tracing::debug;

use crate::interpreter::bindings::BindingTable;
use crate::interpreter::modifiers::Modifier;
use crate::parser::{Piece, Template, scan};

/// Render a format template string.
///
/// # Example
///
/// ```
/// use blame_text::interpreter::{Binding, BindingTable, render};
///
/// let mut table = BindingTable::new();
/// table.insert("author.name", Binding::Text("Authorname".into()));
///
/// assert_eq!(render("by ${author.name|u}", &table), "by AUTHORNAME");
/// assert_eq!(render("${nope}", &table), "nope");
/// ```
pub fn render(template: &str, table: &BindingTable) -> String {
    render_template(&scan(template), table)
}

/// Render an already scanned template.
pub fn render_template(template: &Template, table: &BindingTable) -> String {
    let mut output = String::new();
    for piece in &template.pieces {
        match piece {
            Piece::Literal(text) => output.push_str(text),
            Piece::Token { token, .. } => {
                // 1. Resolve the binding with its parameter
                let value = lookup(table, &token.function, &token.parameter);
                // 2. Apply the display modifier
                output.push_str(&Modifier::parse(&token.modifier).apply(value));
            }
        }
    }
    output
}

/// Resolve `function` with `parameter`.
///
/// A name with no binding resolves to the name itself, so templates written
/// for a richer vocabulary still render something readable.
pub fn lookup(table: &BindingTable, function: &str, parameter: &str) -> String {
    match table.get(function) {
        Some(binding) => binding.resolve(parameter),
        None => {
            debug!(function, "no binding for token, echoing its name");
            function.to_string()
        }
    }
}
