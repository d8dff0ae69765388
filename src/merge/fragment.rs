use crate::error::{GameDataError, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A parsed fragment file.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
	/// Top-level mapping of the fragment.
	pub data: Map<String, Value>,

	/// The file this fragment was loaded from.
	pub path: PathBuf,
}

/// Read and parse a fragment file.
pub fn load_fragment(path: &Path) -> Result<Fragment> {
	let content =
		std::fs::read_to_string(path).map_err(|source| GameDataError::FragmentReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_fragment_str(&content, path)
}

/// Parse a fragment from a string (useful for testing).
///
/// The top level must be a JSON object.
pub fn parse_fragment_str(content: &str, path: &Path) -> Result<Fragment> {
	let value: Value =
		serde_json::from_str(content).map_err(|source| GameDataError::FragmentParseError {
			path: path.to_path_buf(),
			source,
		})?;

	match value {
		Value::Object(data) => Ok(Fragment {
			data,
			path: path.to_path_buf(),
		}),
		_ => Err(GameDataError::FragmentNotObject {
			path: path.to_path_buf(),
		}),
	}
}
