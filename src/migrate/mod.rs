//! Vault migration for sprout-migrate.
//!
//! This module handles:
//! - Finding the notes of a vault (direct children with a `.md` extension)
//! - Migrating a single note, writing it only in apply mode
//! - Running a whole vault and collecting a report

pub mod report;

use crate::error::{MigrateError, Result};
use crate::frontmatter;
use crate::rules::Transformer;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub use report::MigrationReport;

/// Whether changes are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
	DryRun,
	Apply,
}

impl Mode {
	pub fn from_apply(apply: bool) -> Self {
		if apply { Mode::Apply } else { Mode::DryRun }
	}

	/// Banner shown at the top of a human-readable report.
	pub fn label(&self) -> &'static str {
		match self {
			Mode::DryRun => "DRY RUN",
			Mode::Apply => "APPLYING",
		}
	}
}

/// What happened to one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
	/// No well-formed frontmatter block; left untouched.
	NoFrontmatter,

	/// Frontmatter already in the target shape; left untouched.
	Unchanged,

	/// Frontmatter rewritten (on disk only in apply mode).
	Migrated,

	/// The note could not be read or written.
	Failed(String),
}

impl FileOutcome {
	pub fn is_skipped(&self) -> bool {
		matches!(self, FileOutcome::NoFrontmatter | FileOutcome::Unchanged)
	}
}

/// List the notes of a vault in lexical order.
///
/// Only direct children that are regular files with the exact `md` extension
/// are returned.
pub fn scan_vault(vault: &Path) -> Result<Vec<PathBuf>> {
	if !vault.is_dir() {
		return Err(MigrateError::NotADirectory {
			path: vault.to_path_buf(),
		});
	}

	let read_error = |source| MigrateError::VaultReadError {
		path: vault.to_path_buf(),
		source,
	};

	let mut notes = Vec::new();
	for entry in fs::read_dir(vault).map_err(read_error)? {
		let path = entry.map_err(read_error)?.path();
		if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
			notes.push(path);
		}
	}

	if notes.is_empty() {
		return Err(MigrateError::NoMarkdownFiles {
			path: vault.to_path_buf(),
		});
	}

	notes.sort();
	Ok(notes)
}

/// Migrate a single note.
pub fn migrate_file(path: &Path, transformer: &Transformer, mode: Mode) -> Result<FileOutcome> {
	let content = fs::read_to_string(path).map_err(|source| MigrateError::NoteReadError {
		path: path.to_path_buf(),
		source,
	})?;

	let Some(fm) = frontmatter::split(&content) else {
		return Ok(FileOutcome::NoFrontmatter);
	};

	let yaml = transformer.transform(fm.yaml);
	if yaml == fm.yaml {
		return Ok(FileOutcome::Unchanged);
	}

	if mode == Mode::Apply {
		fs::write(path, frontmatter::assemble(&yaml, fm.body)).map_err(|source| {
			MigrateError::NoteWriteError {
				path: path.to_path_buf(),
				source,
			}
		})?;
	}

	Ok(FileOutcome::Migrated)
}

/// Migrate every note of a vault.
///
/// Fails fast when the vault cannot be listed. Per-note read and write
/// errors are recorded in the report and the remaining notes are still
/// processed.
pub fn migrate_vault(vault: &Path, transformer: &Transformer, mode: Mode) -> Result<MigrationReport> {
	let notes = scan_vault(vault)?;
	let mut report = MigrationReport::new(mode, vault, notes.len());

	for path in &notes {
		let outcome = migrate_file(path, transformer, mode).unwrap_or_else(|e| {
			tracing::warn!(path = %path.display(), error = %e, "note migration failed");
			FileOutcome::Failed(error_chain(&e))
		});
		tracing::debug!(path = %path.display(), outcome = ?outcome, "note processed");
		report.record(path, outcome);
	}

	Ok(report)
}

/// Render an error with its sources, `outer: inner`.
fn error_chain(error: &MigrateError) -> String {
	use std::error::Error;

	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
