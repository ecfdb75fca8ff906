//! Blame status text rendering.
//!
//! Substitutes `${...}` tokens in a format template with values taken from a
//! commit record, such as `${author.name}`, `${commit.hash_short,10}` or
//! `${time.ago|u}`.
//!
//! ```
//! use blame_text::{CommitRecord, Party, render_commit_text_at};
//! use chrono::DateTime;
//!
//! let commit = CommitRecord::builder()
//!     .hash("1234567890123456789012345678901234567890")
//!     .author(Party::builder().name("Authorname").timestamp(1337).build())
//!     .build();
//! let now = DateTime::from_timestamp(1337 + 180, 0).unwrap();
//!
//! let text = render_commit_text_at(
//!     &commit,
//!     Some("${commit.hash_short} by ${author.name} ${time.ago}"),
//!     None,
//!     now,
//! );
//! assert_eq!(text, "1234567 by Authorname right now");
//! ```

pub mod config;
pub mod interpreter;
pub mod parser;
mod status;
pub mod types;

pub use config::{ConfigError, StatusConfig};
pub use interpreter::{BindingTable, TokenWarning, lint_template, normalize, render};
pub use status::{render_commit_text, render_commit_text_at};
pub use types::{CommitRecord, Party};
