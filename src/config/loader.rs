use crate::config::parser::parse_options_file;
use crate::config::types::LoadedOptions;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Name of the optional options file at the project root.
pub const OPTIONS_FILE_NAME: &str = ".gamedata.toml";

/// Path of the options file for a project root.
pub fn options_path(root: &Path) -> PathBuf {
	root.join(OPTIONS_FILE_NAME)
}

/// Load `<root>/.gamedata.toml` if it exists, otherwise fall back to defaults.
///
/// Only the root is consulted; there is no directory cascade.
pub fn load_options(root: &Path) -> Result<LoadedOptions> {
	let path = options_path(root);

	if path.is_file() {
		let options = parse_options_file(&path)?;
		Ok(LoadedOptions {
			options,
			path: Some(path),
		})
	} else {
		Ok(LoadedOptions::default())
	}
}

/// Template written by `gamedata --init`.
pub fn generate_init_template() -> String {
	r#"# gamedata options
#
# Every key is optional; the values below are the defaults.

# Glob, relative to this directory, matching fragment files.
fragment-pattern = "components/**/data.json"

# Directory receiving both generated files.
output-dir = "data"

# Merged data with the original keys.
merged-file = "game-data.json"

# Merged data with every key converted to camelCase.
camel-case-file = "game-data-in-camel-case.json"
"#
	.to_string()
}
