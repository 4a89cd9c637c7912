//! Section directory.
//!
//! Read-mostly store of track sections consumed by the scheduling
//! engine. Stands in for the original deployment's database; reads
//! lazily seed a small illustrative default set when empty.

mod store;

pub use store::SectionDirectory;
