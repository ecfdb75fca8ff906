mod commit;

pub use commit::{CommitRecord, Party, UNCOMMITTED_HASH};
