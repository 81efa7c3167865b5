#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The flat key=value text format.
pub mod format;
/// The file-backed record store.
pub mod store;

pub use format::FormatError;
pub use store::{LoadOutcome, Record, RecordStore, StoreError};
