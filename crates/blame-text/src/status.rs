//! Status text for a single blamed line.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::DEFAULT_NO_COMMIT_MESSAGE;
use crate::interpreter::{normalize, render};
use crate::types::CommitRecord;

/// Render the status text for `commit` at the current time.
///
/// See [`render_commit_text_at`].
pub fn render_commit_text(
    commit: &CommitRecord,
    format: Option<&str>,
    no_commit_message: Option<&str>,
) -> String {
    render_commit_text_at(commit, format, no_commit_message, Utc::now())
}

/// Render the status text for `commit` as seen at `now`.
///
/// - A blank commit skips the template and yields `no_commit_message`, or
///   `"Not Committed Yet"` when that is absent or empty.
/// - An absent `format` yields an empty string.
/// - Otherwise the template is rendered against the commit's bindings.
///
/// # Example
///
/// ```
/// use blame_text::{CommitRecord, render_commit_text};
///
/// let text = render_commit_text(&CommitRecord::blank(), Some("${author.name}"), None);
/// assert_eq!(text, "Not Committed Yet");
/// ```
pub fn render_commit_text_at(
    commit: &CommitRecord,
    format: Option<&str>,
    no_commit_message: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    if commit.is_blank() {
        debug!(hash = %commit.hash, "blank commit, using no-commit message");
        return match no_commit_message {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => DEFAULT_NO_COMMIT_MESSAGE.to_string(),
        };
    }

    let Some(format) = format else {
        return String::new();
    };

    render(format, &normalize(commit, now))
}
