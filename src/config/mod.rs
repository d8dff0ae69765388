//! Options loading and parsing for gamedata.
//!
//! This module handles:
//! - The `Options` type and its defaults
//! - TOML options file parsing
//! - Locating the optional `.gamedata.toml` at the project root

pub mod loader;
pub mod parser;
pub mod types;

pub use loader::{OPTIONS_FILE_NAME, generate_init_template, load_options, options_path};
pub use parser::{parse_options_file, parse_options_str};
pub use types::{LoadedOptions, Options};
