//! Format template scanner.
//!
//! This module splits status format templates into literal text and `${...}`
//! tokens. The output is consumed by the evaluator and by external tooling
//! such as the lint and the CLI token dump.

pub mod ast;
mod template;
mod token;

pub use ast::*;
pub use template::scan;
pub use token::parse_body;
