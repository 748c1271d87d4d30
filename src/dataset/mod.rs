//! Typed player records, their flattened rows, and the artifacts that hold them.
//!
//! - `record`: the validated [`PlayerRecord`] stored in the intermediate document
//! - `row`: the flat 30-column [`FlatPlayerRow`] and per-game metrics
//! - `document`: reading, writing and validating the intermediate JSON document
//! - `summary`: descriptive summary of a finished dataset

pub mod document;
pub mod record;
pub mod row;
pub mod summary;

pub use document::{
    parse_document, read_document, to_document, validate_entry, write_document, RawDocument,
};
pub use record::{age_on, PlayerRecord, StatLine};
pub use row::{per_game, FlatPlayerRow, PerGame, COLUMNS};
pub use summary::{ColumnStats, DatasetSummary};
