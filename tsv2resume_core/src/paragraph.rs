use std::sync::LazyLock;

use regex::Regex;

use crate::lexer::LINE_BREAK;
use crate::lexer::convert_line_breaks;
use crate::lexer::has_markup;

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\n\s*\n").unwrap_or_else(|e| panic!("invalid blank line pattern: {e}"))
});

/// Options controlling how text fields are turned into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
	/// When `false`, text fields are emitted exactly as they appear in the
	/// input.
	pub auto_paragraph: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			auto_paragraph: true,
		}
	}
}

/// Format a text field for output according to `options`.
pub fn format_text(text: &str, options: &RenderOptions) -> String {
	if options.auto_paragraph {
		auto_paragraph(text)
	} else {
		text.to_string()
	}
}

/// Turn a text field into markup.
///
/// - Plain text is split on blank lines into `<p>` blocks, and single line
///   breaks inside a block become [`LINE_BREAK`].
/// - Text that already contains tags is left unwrapped and only has its line
///   breaks converted by [`convert_line_breaks`].
pub fn auto_paragraph(text: &str) -> String {
	if text.trim().is_empty() {
		return String::new();
	}

	let text = normalize_line_endings(text);

	if has_markup(&text) {
		return convert_line_breaks(&text);
	}

	BLANK_LINE
		.split(text.trim())
		.map(|block| format!("<p>{}</p>", block.trim().replace('\n', LINE_BREAK)))
		.collect::<Vec<_>>()
		.join("\n")
}

fn normalize_line_endings(text: &str) -> String {
	text.replace("\r\n", "\n").replace('\r', "\n")
}
