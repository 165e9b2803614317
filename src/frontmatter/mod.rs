//! Frontmatter splitting and reassembly.
//!
//! Only the exact `---` line convention at the very start of a file is
//! recognised. An opening delimiter without a closing one means the file has
//! no frontmatter.

const OPEN: &str = "---\n";
const CLOSE: &str = "\n---\n";

/// A note split into its raw YAML block and its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
	/// Text between the delimiters, including its trailing newline.
	pub yaml: &'a str,

	/// Everything after the closing delimiter line, untouched.
	pub body: &'a str,
}

/// Split note content into frontmatter and body.
///
/// Returns `None` when the content does not start with `---\n` or when no
/// closing `\n---\n` follows.
pub fn split(content: &str) -> Option<Frontmatter<'_>> {
	if !content.starts_with(OPEN) {
		return None;
	}

	let end = OPEN.len() + content[OPEN.len()..].find(CLOSE)?;

	Some(Frontmatter {
		yaml: &content[OPEN.len()..=end],
		body: &content[end + CLOSE.len()..],
	})
}

/// Rebuild note content from a YAML block and a body.
pub fn assemble(yaml: &str, body: &str) -> String {
	format!("{OPEN}{yaml}{OPEN}{body}")
}
