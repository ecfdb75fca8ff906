use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hash reported for lines that have not been committed yet.
pub const UNCOMMITTED_HASH: &str = "0000000000000000000000000000000000000000";

/// One side of a commit: the author or the committer.
///
/// # Example
///
/// ```
/// use blame_text::Party;
///
/// let author = Party::builder()
///     .name("Authorname")
///     .mail("author@mail.example")
///     .timestamp(1337)
///     .tz("+0200")
///     .build();
///
/// assert_eq!(author.name, "Authorname");
/// assert_eq!(author.time().map(|t| t.timestamp()), Some(1337));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    #[builder(default, into)]
    pub name: String,

    #[builder(default, into)]
    pub mail: String,

    /// Seconds since the unix epoch.
    #[builder(default)]
    pub timestamp: i64,

    /// Timezone offset as reported by git, e.g. `+0200`.
    #[builder(default, into)]
    pub tz: String,
}

impl Party {
    /// The timestamp as a UTC instant, or `None` when it is out of range.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Commit metadata for a single blamed line.
///
/// Records are supplied by a source-control provider and consumed once per
/// render; nothing here is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRecord {
    /// Full commit hash.
    #[builder(default, into)]
    pub hash: String,

    #[builder(default)]
    pub author: Party,

    #[builder(default)]
    pub committer: Party,

    /// First line of the commit message.
    #[builder(default, into)]
    pub summary: String,

    /// Path of the blamed file at this commit.
    #[builder(default, into)]
    pub filename: String,

    /// Set by the provider when the record was synthesized rather than read
    /// from history.
    #[builder(default)]
    pub generated: bool,
}

impl CommitRecord {
    /// The record a provider returns for lines with no history yet.
    pub fn blank() -> CommitRecord {
        CommitRecord::builder()
            .hash(UNCOMMITTED_HASH)
            .generated(true)
            .build()
    }

    /// Whether this record stands for "not committed yet".
    pub fn is_blank(&self) -> bool {
        self.generated || self.hash == UNCOMMITTED_HASH
    }
}
