use crate::config::MigrationRules;
use crate::error::{MigrateError, Result};
use regex::Regex;

const TAGS_HEADER: &str = r"^tags:\s*$";
const INLINE_TAGS: &str = r"^tags:\s*\[(.+)\]\s*$";
const KEY: &str = r"^(\w[\w_]*):";
const BAREWORD: &str = r"^\w[\w_]*$";
const DATE_CREATED: &str = r"^date_created:\s*'?(\d{4}-\d{2}-\d{2})'?\s*$";
const DRILL_EASE: &str = r"^drill_ease:\s*(\S+)\s*$";
const DRILL_LAST_INTERVAL: &str = r"^drill_last_interval:\s*(\S+)\s*$";
const QUOTED_REVIEW_DATE: &str = r"^(next_review|last_review):\s*'(\d{4}-\d{2}-\d{2})'\s*$";

/// Prefix of an item line inside a `tags:` block.
const TAG_ITEM_PREFIX: &str = "- ";

/// What a single frontmatter line is, in rule priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
	/// `tags:` opening a block list; items follow on the next lines.
	TagsHeader,

	/// `tags: [a, b]`, with each value already trimmed.
	InlineTags(Vec<&'a str>),

	/// A key listed in the removal table.
	RemovableKey,

	/// `date_created:` with a bare or single-quoted date.
	DateCreated { date: &'a str },

	/// `drill_ease:` with a finite numeric value.
	DrillEase(f64),

	/// `drill_last_interval:` with a finite numeric value.
	DrillLastInterval(f64),

	/// `next_review:` or `last_review:` with a single-quoted date.
	QuotedReviewDate { key: &'a str, date: &'a str },

	/// Anything else; copied verbatim.
	PassThrough,
}

/// The compiled line patterns.
#[derive(Debug)]
pub struct LinePatterns {
	tags_header: Regex,
	inline_tags: Regex,
	key: Regex,
	date_created: Regex,
	drill_ease: Regex,
	drill_last_interval: Regex,
	quoted_review_date: Regex,
}

impl LinePatterns {
	/// Compile every line pattern.
	pub fn compile() -> Result<Self> {
		Ok(LinePatterns {
			tags_header: compile_regex(TAGS_HEADER)?,
			inline_tags: compile_regex(INLINE_TAGS)?,
			key: compile_regex(KEY)?,
			date_created: compile_regex(DATE_CREATED)?,
			drill_ease: compile_regex(DRILL_EASE)?,
			drill_last_interval: compile_regex(DRILL_LAST_INTERVAL)?,
			quoted_review_date: compile_regex(QUOTED_REVIEW_DATE)?,
		})
	}

	/// Classify a line. The first matching rule wins.
	pub fn classify<'a>(&self, line: &'a str, rules: &MigrationRules) -> LineKind<'a> {
		if self.tags_header.is_match(line) {
			return LineKind::TagsHeader;
		}

		if let Some(caps) = self.inline_tags.captures(line)
			&& let Some(values) = caps.get(1)
		{
			return LineKind::InlineTags(values.as_str().split(',').map(str::trim).collect());
		}

		if let Some(key) = capture(&self.key, line, 1)
			&& rules.removes_field(key)
		{
			return LineKind::RemovableKey;
		}

		if let Some(date) = capture(&self.date_created, line, 1) {
			return LineKind::DateCreated { date };
		}

		if let Some(value) = capture(&self.drill_ease, line, 1).and_then(parse_number) {
			return LineKind::DrillEase(value);
		}

		if let Some(value) = capture(&self.drill_last_interval, line, 1).and_then(parse_number) {
			return LineKind::DrillLastInterval(value);
		}

		if let Some(caps) = self.quoted_review_date.captures(line)
			&& let (Some(key), Some(date)) = (caps.get(1), caps.get(2))
		{
			return LineKind::QuotedReviewDate {
				key: key.as_str(),
				date: date.as_str(),
			};
		}

		LineKind::PassThrough
	}
}

/// The trimmed value of a `- value` line inside a tags block.
pub fn tag_item(line: &str) -> Option<&str> {
	line.strip_prefix(TAG_ITEM_PREFIX).map(str::trim)
}

/// Whole-string match for the key shape the removable-key rule recognises.
pub(crate) fn bareword_pattern() -> Result<Regex> {
	compile_regex(BAREWORD)
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| MigrateError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

fn capture<'a>(regex: &Regex, line: &'a str, group: usize) -> Option<&'a str> {
	regex
		.captures(line)
		.and_then(|caps| caps.get(group))
		.map(|m| m.as_str())
}

/// Tokens that do not parse, or parse to infinity/NaN, are left alone.
fn parse_number(token: &str) -> Option<f64> {
	token.parse::<f64>().ok().filter(|value| value.is_finite())
}
