//! The end-to-end run: discover, sort, merge, rename, write.

use crate::config::Options;
use crate::discover::{discover_fragments, sort_by_depth};
use crate::error::Result;
use crate::merge::{KeyCollision, RenamedDocument, load_fragment, merge_fragments, rename_keys};
use crate::output::{OutputPaths, write_outputs};
use crate::report::{LogReporter, Reporter, format_error_chain};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Label used for the start/end messages and timing.
const RUN_LABEL: &str = "game data json";

/// Merged and renamed data, before anything is written.
#[derive(Debug, Clone)]
pub struct PreparedData {
	/// Fragment files in merge order (shallowest first).
	pub fragments: Vec<PathBuf>,

	/// The merged document with original keys.
	pub merged: Value,

	/// The camelCase copy of `merged`.
	pub renamed: RenamedDocument,
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
	/// Fragment files in merge order (shallowest first).
	pub fragments: Vec<PathBuf>,

	/// Keys dropped from the camelCase output.
	pub collisions: Vec<KeyCollision>,

	/// The two files written.
	pub outputs: OutputPaths,
}

/// Discover, sort, load and merge all fragments, then derive the renamed copy.
///
/// Any unreadable or malformed fragment fails the whole preparation.
pub fn prepare(root: &Path, options: &Options) -> Result<PreparedData> {
	let fragments = sort_by_depth(discover_fragments(root, &options.fragment_pattern)?);

	let loaded = fragments
		.iter()
		.map(|path| load_fragment(path))
		.collect::<Result<Vec<_>>>()?;

	let merged = merge_fragments(&loaded);
	let renamed = rename_keys(&merged);

	Ok(PreparedData {
		fragments,
		merged,
		renamed,
	})
}

/// Build both output files for the project at `root`.
///
/// Collisions from the camelCase rename are reported as warnings.
pub fn build_game_data(
	root: &Path,
	options: &Options,
	reporter: &dyn Reporter,
) -> Result<BuildSummary> {
	let prepared = prepare(root, options)?;

	reporter.info(&format!(
		"Merged {} data file(s)",
		prepared.fragments.len()
	));
	report_collisions(&prepared.renamed.collisions, reporter);

	let outputs = write_outputs(
		root,
		options,
		&prepared.merged,
		&prepared.renamed.value,
	)?;

	Ok(BuildSummary {
		fragments: prepared.fragments,
		collisions: prepared.renamed.collisions,
		outputs,
	})
}

/// Warn about every key dropped by the camelCase rename.
pub fn report_collisions(collisions: &[KeyCollision], reporter: &dyn Reporter) {
	for collision in collisions {
		let location = if collision.path.is_empty() {
			"/"
		} else {
			collision.path.as_str()
		};
		reporter.warn(&format!(
			"key \"{}\" at {} collides with \"{}\"; its value is dropped from the camelCase output",
			collision.original_key, location, collision.camel_key
		));
	}
}

/// Run a build and swallow any failure.
///
/// Start and end messages are always emitted. A failure is reported through
/// `reporter.error` and leaves any file not yet written untouched.
pub fn run(root: &Path, options: &Options, reporter: &dyn Reporter) -> Option<BuildSummary> {
	reporter.info("[Start] Creating game data json files");
	let started = Instant::now();

	let summary = match build_game_data(root, options, reporter) {
		Ok(summary) => Some(summary),
		Err(e) => {
			reporter.error(&format_error_chain(&e));
			None
		}
	};

	reporter.info("[End] Created game data json files");
	reporter.info(&format!(
		"{}: {:.3}ms",
		RUN_LABEL,
		started.elapsed().as_secs_f64() * 1000.0
	));

	summary
}

/// A build-tool plugin notified when compilation starts.
pub trait CompileHook {
	/// Called once per compilation with the project root.
	fn on_compile_start(&self, context: &Path);
}

/// Plugin that regenerates the game data files on every compile.
#[derive(Debug, Clone, Default)]
pub struct DataJsonOptimizer<R = LogReporter> {
	options: Options,
	reporter: R,
}

impl DataJsonOptimizer<LogReporter> {
	/// Create a plugin that reports through the `log` facade.
	pub fn new(options: Options) -> Self {
		Self {
			options,
			reporter: LogReporter,
		}
	}
}

impl<R: Reporter> DataJsonOptimizer<R> {
	/// Create a plugin with a caller-supplied reporter.
	pub fn with_reporter(options: Options, reporter: R) -> Self {
		Self { options, reporter }
	}

	pub fn options(&self) -> &Options {
		&self.options
	}

	pub fn reporter(&self) -> &R {
		&self.reporter
	}
}

impl<R: Reporter> CompileHook for DataJsonOptimizer<R> {
	fn on_compile_start(&self, context: &Path) {
		run(context, &self.options, &self.reporter);
	}
}
