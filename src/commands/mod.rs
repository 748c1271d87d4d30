//! Pipeline steps: collection and transformation

pub mod collect;
pub mod transform;

pub use collect::{handle_collect, CollectReport, Collector};
pub use transform::{
    handle_transform, transform_document, write_csv, SkippedEntry, TransformReport, Transformer,
};
