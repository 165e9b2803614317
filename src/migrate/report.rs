use crate::migrate::{FileOutcome, Mode};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Outcome of migrating a whole vault.
#[derive(Debug, Clone)]
pub struct MigrationReport {
	pub mode: Mode,
	pub vault: PathBuf,

	/// Notes found by the scan.
	pub scanned: usize,

	/// File name and outcome per note, in processing order.
	pub files: Vec<(String, FileOutcome)>,
}

/// JSON view of a report.
#[derive(Serialize)]
struct JsonReport<'a> {
	mode: Mode,
	vault: &'a Path,
	files: Vec<JsonFile<'a>>,
	migrated: usize,
	skipped: usize,
	failed: usize,
}

#[derive(Serialize)]
struct JsonFile<'a> {
	file: &'a str,
	status: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<&'a str>,
}

impl MigrationReport {
	pub fn new(mode: Mode, vault: &Path, scanned: usize) -> Self {
		MigrationReport {
			mode,
			vault: vault.to_path_buf(),
			scanned,
			files: Vec::with_capacity(scanned),
		}
	}

	/// Record the outcome for one note, keyed by its file name.
	pub fn record(&mut self, path: &Path, outcome: FileOutcome) {
		let file = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| path.display().to_string());
		self.files.push((file, outcome));
	}

	pub fn migrated(&self) -> usize {
		self.count(|o| *o == FileOutcome::Migrated)
	}

	pub fn skipped(&self) -> usize {
		self.count(FileOutcome::is_skipped)
	}

	pub fn failed(&self) -> usize {
		self.count(|o| matches!(o, FileOutcome::Failed(_)))
	}

	pub fn has_failures(&self) -> bool {
		self.failed() > 0
	}

	fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
		self.files.iter().filter(|(_, o)| pred(o)).count()
	}

	/// Render the report as console text.
	pub fn to_human(&self) -> String {
		let mut out = String::new();
		let _ = writeln!(
			out,
			"[{}] Scanning {} markdown files in {}\n",
			self.mode.label(),
			self.scanned,
			self.vault.display()
		);

		for (file, outcome) in &self.files {
			let _ = match outcome {
				FileOutcome::NoFrontmatter => writeln!(out, "  SKIP (no frontmatter): {file}"),
				FileOutcome::Unchanged => writeln!(out, "  SKIP (no changes): {file}"),
				FileOutcome::Migrated => writeln!(out, "  MIGRATE: {file}"),
				FileOutcome::Failed(reason) => writeln!(out, "  ERROR: {file} ({reason})"),
			};
		}

		let _ = write!(
			out,
			"\nSummary: {} migrated, {} skipped",
			self.migrated(),
			self.skipped()
		);
		if self.has_failures() {
			let _ = write!(out, ", {} failed", self.failed());
		}
		out.push('\n');

		if self.mode == Mode::DryRun && self.migrated() > 0 {
			out.push_str("Run with --apply to write changes.\n");
		}

		out
	}

	/// Render the report as a JSON document.
	pub fn to_json(&self) -> serde_json::Result<String> {
		let files = self
			.files
			.iter()
			.map(|(file, outcome)| {
				let (status, error) = match outcome {
					FileOutcome::NoFrontmatter => ("no-frontmatter", None),
					FileOutcome::Unchanged => ("unchanged", None),
					FileOutcome::Migrated => ("migrated", None),
					FileOutcome::Failed(reason) => ("failed", Some(reason.as_str())),
				};
				JsonFile {
					file,
					status,
					error,
				}
			})
			.collect();

		serde_json::to_string_pretty(&JsonReport {
			mode: self.mode,
			vault: &self.vault,
			files,
			migrated: self.migrated(),
			skipped: self.skipped(),
			failed: self.failed(),
		})
	}
}
