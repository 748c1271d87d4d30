//! Core utilities shared across pipeline steps
//!
//! - `files`: file system helpers for the intermediate and final artifacts

pub mod files;

pub use files::{read_to_string, write_atomic};
