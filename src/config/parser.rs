use crate::config::types::Options;
use crate::error::{GameDataError, Result};
use std::path::Path;

/// Parse an options file from the given path.
pub fn parse_options_file(path: &Path) -> Result<Options> {
	let content =
		std::fs::read_to_string(path).map_err(|source| GameDataError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_options_str(&content, path)
}

/// Parse options from a string (useful for testing).
pub fn parse_options_str(content: &str, path: &Path) -> Result<Options> {
	toml::from_str(content).map_err(|source| GameDataError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}
