//! Token bindings derived from a commit record.
//!
//! A [`BindingTable`] maps each token name of the fixed vocabulary to a
//! [`Binding`]. Bindings hold the data they need and produce their string on
//! lookup, so a table is plain data built once per render.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::interpreter::ago::humanize;
use crate::types::{CommitRecord, Party};

/// Every token name a normalized commit provides.
pub const TOKEN_NAMES: &[&str] = &[
    "author.mail",
    "author.name",
    "author.timestamp",
    "author.tz",
    "author.date",
    "commit.hash",
    "commit.hash_short",
    "commit.summary",
    "committer.mail",
    "committer.name",
    "committer.timestamp",
    "committer.tz",
    "committer.date",
    "time.ago",
    "time.c_ago",
    "time.from",
    "time.c_from",
];

/// Characters kept by `commit.hash_short` without a parameter.
pub const DEFAULT_HASH_LENGTH: usize = 7;

/// Characters kept by `commit.summary` without a parameter.
pub const DEFAULT_SUMMARY_LENGTH: usize = 65536;

/// A value source for one token name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// A fixed string. Any parameter is ignored.
    Text(String),

    /// A string cut to a leading number of characters given by the parameter,
    /// or `default_len` when the parameter is empty.
    Prefix { text: String, default_len: usize },
}

impl Binding {
    /// Produce this binding's string for `parameter`.
    pub fn resolve(&self, parameter: &str) -> String {
        match self {
            Binding::Text(value) => value.clone(),
            Binding::Prefix { text, default_len } => {
                let len = if parameter.is_empty() {
                    *default_len
                } else {
                    leading_length(parameter)
                };
                text.chars().take(len).collect()
            }
        }
    }
}

/// Read a length from the start of `parameter`.
///
/// Leading whitespace and a `+` sign are skipped and the following run of
/// digits is used; trailing text is ignored. No digits, or a `-` sign, means
/// zero. Values too large for `usize` saturate.
fn leading_length(parameter: &str) -> usize {
    let trimmed = parameter.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(usize::MAX)
}

/// Token name to binding mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    bindings: BTreeMap<String, Binding>,
}

impl BindingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, binding: Binding) {
        self.bindings.insert(name.into(), binding);
    }

    /// Get the binding for `name`.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no names are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Build the binding table for `commit`, measuring "ago" values from `now`.
///
/// # Example
///
/// ```
/// use blame_text::interpreter::{lookup, normalize};
/// use blame_text::CommitRecord;
/// use chrono::Utc;
///
/// let commit = CommitRecord::builder()
///     .hash("1234567890123456789012345678901234567890")
///     .summary("Fake commit")
///     .build();
/// let table = normalize(&commit, Utc::now());
///
/// assert_eq!(lookup(&table, "commit.hash_short", ""), "1234567");
/// assert_eq!(lookup(&table, "commit.summary", "4"), "Fake");
/// ```
pub fn normalize(commit: &CommitRecord, now: DateTime<Utc>) -> BindingTable {
    let mut table = BindingTable::new();

    let ago = insert_party(&mut table, "author", &commit.author, now);
    let c_ago = insert_party(&mut table, "committer", &commit.committer, now);

    table.insert("commit.hash", Binding::Text(commit.hash.clone()));
    table.insert(
        "commit.hash_short",
        Binding::Prefix {
            text: commit.hash.clone(),
            default_len: DEFAULT_HASH_LENGTH,
        },
    );
    table.insert(
        "commit.summary",
        Binding::Prefix {
            text: commit.summary.clone(),
            default_len: DEFAULT_SUMMARY_LENGTH,
        },
    );

    table.insert("time.ago", Binding::Text(ago.clone()));
    table.insert("time.from", Binding::Text(ago));
    table.insert("time.c_ago", Binding::Text(c_ago.clone()));
    table.insert("time.c_from", Binding::Text(c_ago));

    table
}

/// Bind the `<role>.*` names for `party` and return its humanized age.
fn insert_party(table: &mut BindingTable, role: &str, party: &Party, now: DateTime<Utc>) -> String {
    table.insert(format!("{role}.mail"), Binding::Text(party.mail.clone()));
    table.insert(format!("{role}.name"), Binding::Text(party.name.clone()));
    table.insert(
        format!("{role}.timestamp"),
        Binding::Text(party.timestamp.to_string()),
    );
    table.insert(format!("{role}.tz"), Binding::Text(party.tz.clone()));

    let Some(time) = party.time() else {
        warn!(role, timestamp = party.timestamp, "commit timestamp out of range");
        table.insert(format!("{role}.date"), Binding::Text(String::new()));
        return String::new();
    };

    table.insert(
        format!("{role}.date"),
        Binding::Text(time.format("%Y-%m-%d").to_string()),
    );
    humanize(now, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_length_reads_digit_prefix() {
        assert_eq!(leading_length("12"), 12);
        assert_eq!(leading_length("  5"), 5);
        assert_eq!(leading_length("+3"), 3);
        assert_eq!(leading_length("10abc"), 10);
    }

    #[test]
    fn leading_length_without_digits_is_zero() {
        assert_eq!(leading_length("abc"), 0);
        assert_eq!(leading_length("-4"), 0);
        assert_eq!(leading_length(" "), 0);
    }

    #[test]
    fn leading_length_saturates() {
        assert_eq!(leading_length("99999999999999999999999999"), usize::MAX);
    }
}
