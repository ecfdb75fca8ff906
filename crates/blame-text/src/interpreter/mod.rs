//! Token evaluation for status templates.
//!
//! This module turns a commit record into a table of bindings and evaluates
//! scanned templates against it. It also holds the pieces evaluation needs:
//! display modifiers, humanized elapsed time and plural selection.

mod ago;
mod bindings;
mod evaluator;
mod lint;
mod modifiers;
mod plural;

pub use ago::{Elapsed, humanize};
pub use bindings::{
    Binding, BindingTable, DEFAULT_HASH_LENGTH, DEFAULT_SUMMARY_LENGTH, TOKEN_NAMES, normalize,
};
pub use evaluator::{lookup, render, render_template};
pub use lint::{TokenWarning, compute_suggestions, lint_scanned, lint_template};
pub use modifiers::{Modifier, apply_modifier};
pub use plural::{is_singular, plural_text};
