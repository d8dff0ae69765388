use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gamedata_cli::config::{Options, generate_init_template, load_options, options_path};
use gamedata_cli::discover::{discover_fragments, path_depth, sort_by_depth};
use gamedata_cli::pipeline::{prepare, report_collisions, run};
use gamedata_cli::report::{ConsoleReporter, Reporter};

#[derive(Parser)]
#[command(name = "gamedata")]
#[command(
	author,
	version,
	about = "Merge component data.json fragments into consolidated game data files"
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[command(flatten)]
	build: BuildArgs,

	/// Create a template .gamedata.toml in the project root
	#[arg(long)]
	init: bool,

	/// Overwrite existing .gamedata.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Exit with a failure code when the build fails
	#[arg(long)]
	strict: bool,

	/// Only print warnings and errors
	#[arg(short, long)]
	quiet: bool,
}

#[derive(Args)]
struct BuildArgs {
	/// Project root containing the components directory
	#[arg(value_name = "ROOT")]
	root: Option<PathBuf>,

	/// Override the fragment glob (relative to ROOT)
	#[arg(long, value_name = "GLOB")]
	pattern: Option<String>,

	/// Override the output directory (relative to ROOT)
	#[arg(long, value_name = "DIR")]
	output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// List data files in merge order with their depth
	List(BuildArgs),
	/// Load and merge every data file without writing anything
	Check(BuildArgs),
}

fn main() -> ExitCode {
	match run_cli() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run_cli() -> Result<ExitCode> {
	let cli = Cli::parse();
	let reporter = ConsoleReporter { quiet: cli.quiet };

	// Handle --init
	if cli.init {
		return handle_init(&cli.build, cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::List(args) => handle_list(&args),
			Commands::Check(args) => handle_check(&args, &reporter),
		};
	}

	handle_build(&cli.build, cli.strict, &reporter)
}

fn project_root(args: &BuildArgs) -> Result<PathBuf> {
	match &args.root {
		Some(root) => Ok(root.clone()),
		None => std::env::current_dir().context("Failed to get current directory"),
	}
}

fn resolve_options(root: &Path, args: &BuildArgs) -> Result<Options> {
	let loaded = load_options(root).context("Failed to load options")?;
	let mut options = loaded.options;

	if let Some(ref pattern) = args.pattern {
		options.fragment_pattern = pattern.clone();
	}
	if let Some(ref output_dir) = args.output_dir {
		options.output_dir = output_dir.clone();
	}

	Ok(options)
}

fn handle_init(args: &BuildArgs, force: bool) -> Result<ExitCode> {
	let root = project_root(args)?;
	let config_path = options_path(&root);

	if config_path.exists() && !force {
		anyhow::bail!(".gamedata.toml already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created .gamedata.toml");
	Ok(ExitCode::SUCCESS)
}

fn handle_build(args: &BuildArgs, strict: bool, reporter: &ConsoleReporter) -> Result<ExitCode> {
	let root = project_root(args)?;

	// Like a failed build, bad options are reported rather than raised
	let options = match resolve_options(&root, args) {
		Ok(options) => options,
		Err(e) => {
			reporter.error(&format!("{e:#}"));
			return Ok(exit_code(strict, false));
		}
	};

	let summary = run(&root, &options, reporter);
	Ok(exit_code(strict, summary.is_some()))
}

fn exit_code(strict: bool, succeeded: bool) -> ExitCode {
	if strict && !succeeded {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}

fn handle_list(args: &BuildArgs) -> Result<ExitCode> {
	let root = project_root(args)?;
	let options = resolve_options(&root, args)?;

	let files = discover_fragments(&root, &options.fragment_pattern)
		.context("Failed to discover data files")?;

	if files.is_empty() {
		println!("No data files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Data files (in merge order):\n");
	for file in sort_by_depth(files) {
		println!("  {:>3}  {}", path_depth(&file), file.display());
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_check(args: &BuildArgs, reporter: &ConsoleReporter) -> Result<ExitCode> {
	let root = project_root(args)?;
	let options = resolve_options(&root, args)?;

	match prepare(&root, &options) {
		Ok(prepared) => {
			report_collisions(&prepared.renamed.collisions, reporter);
			if prepared.fragments.is_empty() {
				println!("No data files found.");
			} else {
				println!(
					"All {} data file(s) are valid",
					prepared.fragments.len()
				);
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Data error: {:#}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}
