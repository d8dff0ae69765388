//! Serialization and writing of the generated files.

pub mod writer;

pub use writer::{OutputPaths, to_pretty_json, write_outputs};
