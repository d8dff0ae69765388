use crate::config::Options;
use crate::error::{GameDataError, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

/// Where the two generated files were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
	/// Merged data with original keys.
	pub merged: PathBuf,

	/// Merged data with camelCase keys.
	pub camel_case: PathBuf,
}

/// Pretty-print `value` with one tab per indent level and no trailing newline.
pub fn to_pretty_json(value: &Value) -> Result<String> {
	let mut buf = Vec::new();
	let formatter = PrettyFormatter::with_indent(b"\t");
	let mut ser = Serializer::with_formatter(&mut buf, formatter);
	value
		.serialize(&mut ser)
		.map_err(|source| GameDataError::SerializeError { source })?;

	Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}

/// Serialize both documents, then write them under `root`.
///
/// Nothing touches the filesystem until both documents have serialized.
/// The output directory is created if missing.
pub fn write_outputs(
	root: &Path,
	options: &Options,
	merged: &Value,
	camel_case: &Value,
) -> Result<OutputPaths> {
	let merged_json = to_pretty_json(merged)?;
	let camel_case_json = to_pretty_json(camel_case)?;

	let paths = OutputPaths {
		merged: options.merged_path(root),
		camel_case: options.camel_case_path(root),
	};

	write_file(&paths.merged, &merged_json)?;
	write_file(&paths.camel_case, &camel_case_json)?;

	Ok(paths)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
	let to_error = |source: std::io::Error| GameDataError::OutputWriteError {
		path: path.to_path_buf(),
		source,
	};

	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).map_err(to_error)?;
	}
	std::fs::write(path, content).map_err(to_error)
}
