use tracing::debug;

use crate::ResumeError;
use crate::ResumeResult;
use crate::builder::build_sections;
use crate::config::ResumeConfig;
use crate::model::RawRow;
use crate::model::Sections;
use crate::page::render_page;
use crate::render::render;

/// What a conversion writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputKind {
	/// A complete page: the rendered body wrapped in the page shell.
	#[default]
	Html,
	/// The section tree as pretty-printed JSON.
	Json,
}

/// Result of converting a set of rows.
#[derive(Debug)]
pub struct Conversion {
	/// The section tree the output was rendered from.
	pub sections: Sections,
	/// The text to write.
	pub output: String,
}

/// Run the whole pipeline: build sections from `rows`, then render them as
/// `kind`.
pub fn convert(
	rows: &[RawRow],
	title: &str,
	config: &ResumeConfig,
	kind: OutputKind,
) -> ResumeResult<Conversion> {
	let sections = build_sections(rows);

	let output = match kind {
		OutputKind::Html => {
			let body = render(title, &sections, &config.render_options());
			let shell = config.load_template()?;
			render_page(title, &body, shell.as_deref())?
		}
		OutputKind::Json => sections_to_json(&sections)?,
	};

	debug!(sections = sections.len(), bytes = output.len(), ?kind, "rendered output");
	Ok(Conversion { sections, output })
}

/// Serialize the section tree as pretty-printed JSON.
pub fn sections_to_json(sections: &Sections) -> ResumeResult<String> {
	let mut json =
		serde_json::to_string_pretty(sections).map_err(|e| ResumeError::Serialize(e.to_string()))?;
	json.push('\n');

	Ok(json)
}
