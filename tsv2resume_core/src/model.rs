use std::sync::LazyLock;

use derive_more::Deref;
use derive_more::DerefMut;
use regex::Regex;
use serde::Serialize;

/// Label given to a section that is created because a row needed a home and
/// no section had been started yet.
pub const DEFAULT_SECTION_LABEL: &str = "Section";

/// Identifier used when a label has no characters left after slugifying.
pub const DEFAULT_SECTION_ID: &str = "section";

/// Summary shown on a fold block whose start row has no content.
pub const DEFAULT_FOLD_SUMMARY: &str = "More details";

static TAG: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"<[^>]+>").unwrap_or_else(|e| panic!("invalid tag pattern: {e}"))
});

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[^a-z0-9]+").unwrap_or_else(|e| panic!("invalid slug pattern: {e}"))
});

/// One record of the input: heading, content and meta, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
	pub heading: String,
	pub content: String,
	pub meta: String,
}

impl RawRow {
	pub fn new(
		heading: impl Into<String>,
		content: impl Into<String>,
		meta: impl Into<String>,
	) -> Self {
		Self {
			heading: heading.into(),
			content: content.into(),
			meta: meta.into(),
		}
	}

	/// Build a row from the leading fields of a record. Fields past the third
	/// are ignored and missing fields are empty.
	pub fn from_fields<I, S>(fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut fields = fields.into_iter().map(Into::into);
		let heading = fields.next().unwrap_or_default();
		let content = fields.next().unwrap_or_default();
		let meta = fields.next().unwrap_or_default();

		Self {
			heading,
			content,
			meta,
		}
	}
}

impl<H, C, M> From<(H, C, M)> for RawRow
where
	H: Into<String>,
	C: Into<String>,
	M: Into<String>,
{
	fn from((heading, content, meta): (H, C, M)) -> Self {
		Self::new(heading, content, meta)
	}
}

/// A named group of rows rendered as one grid entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
	pub label: String,
	/// Derived from `label` when the section is created.
	pub id: String,
	pub rows: Vec<Row>,
}

impl Section {
	pub fn new(label: impl Into<String>) -> Self {
		let label = label.into();
		let id = slugify(&label);

		Self {
			label,
			id,
			rows: vec![],
		}
	}

	/// Returns true when no pair row in this section carries a meta value,
	/// which means the section is laid out in two columns instead of three.
	pub fn is_two_column(&self) -> bool {
		!self
			.rows
			.iter()
			.any(|row| matches!(row, Row::Pair { meta, .. } if !meta.is_empty()))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Row {
	/// A primary line with an optional right-aligned annotation.
	Pair { main: String, meta: String },
	/// A free-form block spanning the content columns.
	Description { html: String },
	/// A collapsible block of secondary lines.
	FoldBlock(FoldBlock),
}

impl Row {
	pub fn pair(main: impl Into<String>, meta: impl Into<String>) -> Self {
		Self::Pair {
			main: main.into(),
			meta: meta.into(),
		}
	}

	pub fn description(html: impl Into<String>) -> Self {
		Self::Description { html: html.into() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldBlock {
	pub summary: String,
	/// Whether the block starts expanded.
	pub open: bool,
	pub items: Vec<FoldItem>,
}

impl FoldBlock {
	pub fn new(summary: impl Into<String>, open: bool) -> Self {
		Self {
			summary: summary.into(),
			open,
			items: vec![],
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldItem {
	pub html: String,
	pub meta: String,
}

impl FoldItem {
	pub fn new(html: impl Into<String>, meta: impl Into<String>) -> Self {
		Self {
			html: html.into(),
			meta: meta.into(),
		}
	}
}

/// The ordered sections of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref, DerefMut)]
#[serde(transparent)]
pub struct Sections(Vec<Section>);

/// Turn a label into an identifier: markup is stripped, the rest is
/// lower-cased and every run of characters outside `[a-z0-9]` becomes a single
/// `-`.
///
/// ```
/// use tsv2resume_core::slugify;
///
/// assert_eq!(slugify("<b>Work</b> Experience"), "work-experience");
/// assert_eq!(slugify("!!!"), "section");
/// ```
pub fn slugify(label: &str) -> String {
	let text = TAG.replace_all(label, "");
	let text = text.trim().to_lowercase();
	let slug = NON_ALPHANUMERIC.replace_all(&text, "-");
	let slug = slug.trim_matches('-');

	if slug.is_empty() {
		DEFAULT_SECTION_ID.to_string()
	} else {
		slug.to_string()
	}
}
