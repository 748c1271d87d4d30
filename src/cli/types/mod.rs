//! Type-safe wrappers for NHL identifiers.

pub mod ids;
pub mod team;

pub use ids::PlayerId;
pub use team::TeamAbbrev;
