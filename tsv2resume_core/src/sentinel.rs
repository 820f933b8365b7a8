use std::sync::LazyLock;

use regex::Regex;

use crate::model::DEFAULT_FOLD_SUMMARY;
use crate::model::RawRow;

static SECTION_SENTINEL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^\s*SECTION\s*:\s*(.+)$")
		.unwrap_or_else(|e| panic!("invalid section pattern: {e}"))
});

static FOLD_SENTINEL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^\s*HIDDEN\b(.*)$").unwrap_or_else(|e| panic!("invalid fold pattern: {e}"))
});

/// What a single input row asks the section builder to do. Every field is
/// already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
	/// All three fields are empty.
	Blank,
	/// `SECTION: <label>` in the heading.
	SectionStart { label: String },
	/// `HIDDEN` (optionally followed by `OPEN`) in the heading.
	FoldStart { summary: String, open: bool },
	/// Anything else. The heading may be empty.
	Content {
		heading: String,
		content: String,
		meta: String,
	},
}

/// Classify a raw row by the reserved words in its heading. Only the heading
/// is matched; content and meta are never interpreted here.
pub fn classify(raw: &RawRow) -> RowKind {
	let heading = raw.heading.trim();
	let content = raw.content.trim();
	let meta = raw.meta.trim();

	if heading.is_empty() && content.is_empty() && meta.is_empty() {
		return RowKind::Blank;
	}

	if let Some(captures) = SECTION_SENTINEL.captures(heading) {
		let label = captures.get(1).map_or("", |m| m.as_str()).trim();
		return RowKind::SectionStart {
			label: label.to_string(),
		};
	}

	if let Some(captures) = FOLD_SENTINEL.captures(heading) {
		let flags = captures.get(1).map_or("", |m| m.as_str());
		let summary = if content.is_empty() {
			DEFAULT_FOLD_SUMMARY
		} else {
			content
		};

		return RowKind::FoldStart {
			summary: summary.to_string(),
			open: flags.to_uppercase().contains("OPEN"),
		};
	}

	RowKind::Content {
		heading: heading.to_string(),
		content: content.to_string(),
		meta: meta.to_string(),
	}
}
