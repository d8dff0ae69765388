use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default glob, relative to the project root, for fragment discovery.
pub const DEFAULT_FRAGMENT_PATTERN: &str = "components/**/data.json";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Default file name for the merged document with original keys.
pub const DEFAULT_MERGED_FILE: &str = "game-data.json";

/// Default file name for the merged document with camelCase keys.
pub const DEFAULT_CAMEL_CASE_FILE: &str = "game-data-in-camel-case.json";

/// Options from a `.gamedata.toml` file.
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the fixed layout: `components/**/data.json` in, `data/game-data.json` and
/// `data/game-data-in-camel-case.json` out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Options {
	/// Glob pattern, relative to the root, matching fragment files.
	pub fragment_pattern: String,

	/// Directory, relative to the root, that receives both output files.
	pub output_dir: PathBuf,

	/// File name of the merged document with original keys.
	pub merged_file: String,

	/// File name of the merged document with camelCase keys.
	pub camel_case_file: String,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			fragment_pattern: DEFAULT_FRAGMENT_PATTERN.to_string(),
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			merged_file: DEFAULT_MERGED_FILE.to_string(),
			camel_case_file: DEFAULT_CAMEL_CASE_FILE.to_string(),
		}
	}
}

impl Options {
	/// Absolute location of the original-key output under `root`.
	pub fn merged_path(&self, root: &Path) -> PathBuf {
		root.join(&self.output_dir).join(&self.merged_file)
	}

	/// Absolute location of the camelCase output under `root`.
	pub fn camel_case_path(&self, root: &Path) -> PathBuf {
		root.join(&self.output_dir).join(&self.camel_case_file)
	}
}

/// Options with the file they were loaded from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedOptions {
	/// The resolved options.
	pub options: Options,

	/// The config file these options came from. `None` means defaults.
	pub path: Option<PathBuf>,
}
