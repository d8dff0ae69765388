#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn gamedata_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("gamedata").unwrap()
}

fn write_file(root: &Path, rel: &str, content: &str) {
	let path = root.join(rel);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, content).unwrap();
}

fn read_json(path: &Path) -> serde_json::Value {
	serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	gamedata_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Merge component data.json fragments"));
}

#[test]
fn test_version_flag() {
	gamedata_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("gamedata"));
}

// ============================================================================
// Build tests
// ============================================================================

#[test]
fn test_build_writes_both_files() {
	let temp_dir = tempfile::tempdir().unwrap();
	let root = temp_dir.path();
	write_file(root, "components/data.json", r#"{"x": {"y": 1}}"#);
	write_file(
		root,
		"components/hud/score-board/data.json",
		r#"{"x": {"y": 2, "z": 3}, "item-id": 5, "nested-thing": {"sub-key": 1}}"#,
	);

	gamedata_cmd()
		.arg(root)
		.assert()
		.success()
		.stdout(predicate::str::contains("[Start] Creating game data json files"))
		.stdout(predicate::str::contains("[End] Created game data json files"));

	assert_eq!(
		read_json(&root.join("data/game-data.json")),
		serde_json::json!({
			"x": {"y": 1, "z": 3},
			"item-id": 5,
			"nested-thing": {"sub-key": 1}
		})
	);
	assert_eq!(
		read_json(&root.join("data/game-data-in-camel-case.json")),
		serde_json::json!({
			"x": {"y": 1, "z": 3},
			"itemId": 5,
			"nestedThing": {"subKey": 1}
		})
	);
}

#[test]
fn test_build_uses_current_dir_by_default() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_file(temp_dir.path(), "components/data.json", r#"{"a-b": 1}"#);

	gamedata_cmd()
		.current_dir(temp_dir.path())
		.assert()
		.success();

	assert_eq!(
		fs::read_to_string(temp_dir.path().join("data/game-data-in-camel-case.json")).unwrap(),
		"{\n\t\"aB\": 1\n}"
	);
}

#[test]
fn test_build_empty_project() {
	let temp_dir = tempfile::tempdir().unwrap();

	gamedata_cmd().arg(temp_dir.path()).assert().success();

	assert_eq!(
		fs::read_to_string(temp_dir.path().join("data/game-data.json")).unwrap(),
		"{}"
	);
	assert_eq!(
		fs::read_to_string(temp_dir.path().join("data/game-data-in-camel-case.json")).unwrap(),
		"{}"
	);
}

#[test]
fn test_build_root_with_brackets_finds_fragments() {
	let temp_dir = tempfile::tempdir().unwrap();
	let root = temp_dir.path().join("game[v2]");
	write_file(&root, "components/data.json", r#"{"hit-points": 3}"#);
	write_file(&root, "data/game-data-in-camel-case.json", r#"{"stale": true}"#);

	gamedata_cmd().arg(&root).assert().success();

	assert_eq!(
		read_json(&root.join("data/game-data-in-camel-case.json")),
		serde_json::json!({"hitPoints": 3})
	);
}

#[test]
fn test_build_ignores_hidden_directories() {
	let temp_dir = tempfile::tempdir().unwrap();
	let root = temp_dir.path();
	write_file(root, "components/data.json", r#"{"a": 1}"#);
	write_file(root, "components/.cache/data.json", r#"{"b": 2}"#);

	gamedata_cmd().arg(root).assert().success();

	assert_eq!(
		read_json(&root.join("data/game-data.json")),
		serde_json::json!({"a": 1})
	);
}

#[test]
fn test_build_malformed_fragment_is_not_fatal() {
	let temp_dir = tempfile::tempdir().unwrap();
	let root = temp_dir.path();
	write_file(root, "components/bad/data.json", "{ nope");

	gamedata_cmd()
		.arg(root)
		.assert()
		.success()
		.stderr(predicate::str::contains("Failed to parse fragment"))
		.stdout(predicate::str::contains("[End] Created game data json files"));

	assert!(!root.join("data/game-data.json").exists());
}

#[test]
fn test_build_malformed_fragment_strict_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_file(temp_dir.path(), "components/data.json", "[");

	gamedata_cmd()
		.arg("--strict")
		.arg(temp_dir.path())
		.assert()
		.failure();
}

#[test]
fn test_build_reports_collisions() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_file(
		temp_dir.path(),
		"components/data.json",
		r#"{"foo-bar": 1, "foo_bar": 2}"#,
	);

	gamedata_cmd()
		.arg(temp_dir.path())
		.assert()
		.success()
		.stderr(predicate::str::contains("Warning: key \"foo_bar\""));
}

#[test]
fn test_build_quiet() {
	let temp_dir = tempfile::tempdir().unwrap();

	gamedata_cmd()
		.args(["--quiet"])
		.arg(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::is_empty());
}

#[test]
fn test_build_with_options_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let root = temp_dir.path();
	write_file(
		root,
		".gamedata.toml",
		"fragment-pattern = \"widgets/**/config.json\"\noutput-dir = \"out\"\n",
	);
	write_file(root, "widgets/a/config.json", r#"{"max-speed": 3}"#);

	gamedata_cmd().arg(root).assert().success();

	assert_eq!(
		read_json(&root.join("out/game-data-in-camel-case.json")),
		serde_json::json!({"maxSpeed": 3})
	);
}

#[test]
fn test_build_cli_overrides_options_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let root = temp_dir.path();
	write_file(root, ".gamedata.toml", "output-dir = \"out\"\n");
	write_file(root, "components/data.json", r#"{"k": 1}"#);

	gamedata_cmd()
		.arg(root)
		.args(["--output-dir", "elsewhere"])
		.assert()
		.success();

	assert!(root.join("elsewhere/game-data.json").exists());
	assert!(!root.join("out").exists());
}

#[test]
fn test_build_invalid_options_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_file(temp_dir.path(), ".gamedata.toml", "invalid toml [[[");

	gamedata_cmd()
		.arg(temp_dir.path())
		.assert()
		.success()
		.stderr(predicate::str::contains("Failed to load options"));

	gamedata_cmd()
		.arg("--strict")
		.arg(temp_dir.path())
		.assert()
		.failure();
}

// ============================================================================
// --init tests
// ============================================================================

#[test]
fn test_init_creates_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".gamedata.toml");

	gamedata_cmd()
		.arg("--init")
		.current_dir(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("Created .gamedata.toml"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("fragment-pattern = \"components/**/data.json\""));
}

#[test]
fn test_init_fails_if_exists() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".gamedata.toml"), "# existing").unwrap();

	gamedata_cmd()
		.arg("--init")
		.current_dir(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".gamedata.toml");
	fs::write(&config_path, "# existing").unwrap();

	gamedata_cmd()
		.args(["--init", "--force"])
		.current_dir(temp_dir.path())
		.assert()
		.success();

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("output-dir"));
}

// ============================================================================
// list / check subcommand tests
// ============================================================================

#[test]
fn test_list_no_fragments() {
	let temp_dir = tempfile::tempdir().unwrap();

	gamedata_cmd()
		.arg("list")
		.arg(temp_dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("No data files found"));
}

#[test]
fn test_list_shows_merge_order() {
	let temp_dir = tempfile::tempdir().unwrap();
	let root = temp_dir.path();
	write_file(root, "components/a/b/data.json", "{}");
	write_file(root, "components/data.json", "{}");

	let output = gamedata_cmd()
		.arg("list")
		.arg(root)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	let stdout = String::from_utf8(output).unwrap();

	let shallow = stdout
		.find(&root.join("components/data.json").display().to_string())
		.unwrap();
	let deep = stdout
		.find(&root.join("components/a/b/data.json").display().to_string())
		.unwrap();
	assert!(shallow < deep);
}

#[test]
fn test_check_valid_fragments_writes_nothing() {
	let temp_dir = tempfile::tempdir().unwrap();
	let root = temp_dir.path();
	write_file(root, "components/data.json", r#"{"a": 1}"#);
	write_file(root, "components/x/data.json", r#"{"b": 2}"#);

	gamedata_cmd()
		.arg("check")
		.arg(root)
		.assert()
		.success()
		.stdout(predicate::str::contains("All 2 data file(s) are valid"));

	assert!(!root.join("data").exists());
}

#[test]
fn test_check_invalid_fragment_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_file(temp_dir.path(), "components/data.json", "not json");

	gamedata_cmd()
		.arg("check")
		.arg(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Data error"));
}
