//! Gamedata - merge component `data.json` fragments into consolidated game data.
//!
//! This library provides the core functionality for gamedata, including:
//! - Fragment discovery and depth ordering
//! - Ancestor-wins deep merge of fragments
//! - Recursive camelCase renaming of keys
//! - Writing the merged and camelCase documents as tab-indented JSON
//!
//! # Example
//!
//! ```no_run
//! use gamedata_cli::config::Options;
//! use gamedata_cli::pipeline::{CompileHook, DataJsonOptimizer};
//! use std::path::Path;
//!
//! let plugin = DataJsonOptimizer::new(Options::default());
//! plugin.on_compile_start(Path::new("/path/to/app"));
//! ```

pub mod config;
pub mod discover;
pub mod error;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod report;

pub use error::{GameDataError, Result};
