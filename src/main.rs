use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use sprout_migrate::config::{LoadedRules, load_rules};
use sprout_migrate::migrate::{Mode, migrate_vault};
use sprout_migrate::rules::Transformer;

#[derive(Parser)]
#[command(name = "sprout-migrate")]
#[command(
	author,
	version,
	about = "Migrate org-drill note frontmatter to the sprout schema"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Vault directory whose notes are migrated
	#[arg(required_unless_present = "show_config")]
	vault: Option<PathBuf>,

	/// Write changes back to the notes (default is a dry run)
	#[arg(long)]
	apply: bool,

	/// Migration rules file (default: <VAULT>/.sprout-migrate.toml, then ~/.sprout-migrate.toml)
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Report format
	#[arg(long, value_enum, default_value_t = OutputFormat::Human)]
	format: OutputFormat,

	/// Print the effective migration rules and exit
	#[arg(long)]
	show_config: bool,

	/// Enable debug logging (RUST_LOG takes precedence)
	#[arg(short, long)]
	verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
	Human,
	Json,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(if verbose {
			"sprout_migrate=debug"
		} else {
			"sprout_migrate=warn"
		})
	});
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	let loaded = load_rules(cli.config.as_deref(), cli.vault.as_deref())
		.context("Failed to load migration rules")?;

	if cli.show_config {
		return handle_show_config(&loaded);
	}

	let Some(vault) = cli.vault else {
		anyhow::bail!("a vault directory is required");
	};

	handle_migrate(vault, loaded, Mode::from_apply(cli.apply), cli.format)
}

fn handle_show_config(loaded: &LoadedRules) -> Result<ExitCode> {
	match &loaded.source {
		Some(path) => println!("# Source: {}", path.display()),
		None => println!("# Source: built-in defaults"),
	}

	println!("remove-fields:");
	for field in &loaded.rules.remove_fields {
		println!("  {}", field);
	}

	println!("maturity-tags:");
	for tag in &loaded.rules.maturity_tags {
		println!("  {}", tag);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_migrate(
	vault: PathBuf,
	loaded: LoadedRules,
	mode: Mode,
	format: OutputFormat,
) -> Result<ExitCode> {
	let vault = if vault.is_dir() {
		std::fs::canonicalize(&vault)
			.with_context(|| format!("Failed to resolve {}", vault.display()))?
	} else {
		vault
	};

	let transformer = Transformer::new(loaded.rules).context("Failed to compile line patterns")?;
	let report = migrate_vault(&vault, &transformer, mode)?;

	match format {
		OutputFormat::Human => print!("{}", report.to_human()),
		OutputFormat::Json => println!(
			"{}",
			report.to_json().context("Failed to serialize report")?
		),
	}

	if report.has_failures() {
		Ok(ExitCode::FAILURE)
	} else {
		Ok(ExitCode::SUCCESS)
	}
}
