use std::sync::LazyLock;

use logos::Logos;
use regex::Regex;

/// The marker written wherever a raw line break becomes visible.
pub const LINE_BREAK: &str = "<br>";

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"</?[a-zA-Z][^>]*>").unwrap_or_else(|e| panic!("invalid tag pattern: {e}"))
});

/// Raw tokens produced by logos for flat tokenization of a text field. Only
/// the characters that can change the scanner context get their own token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
	#[token("<")]
	AngleOpen,
	#[token(">")]
	AngleClose,
	#[token("\"")]
	DoubleQuote,
	#[token("'")]
	SingleQuote,
	#[token("\n")]
	Newline,
	#[regex(r#"[^<>"'\n]+"#)]
	Text,
}

/// Context states for the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanContext {
	/// Plain text between tags.
	Outside,
	/// Inside `<...>` but not inside a quoted attribute value.
	Tag,
	/// Inside a quoted attribute value, closed by the same quote token.
	Quoted(RawToken),
}

/// Walks the logos token stream and rewrites raw line breaks according to the
/// surrounding context.
struct LineBreakWalker<'a> {
	/// The full text being converted.
	source: &'a str,
	/// The collected raw tokens and their byte spans.
	raw_tokens: Vec<(Result<RawToken, ()>, std::ops::Range<usize>)>,
	/// Current index into `raw_tokens`.
	cursor: usize,
	context: ScanContext,
	output: String,
}

impl<'a> LineBreakWalker<'a> {
	fn new(source: &'a str) -> Self {
		let raw_tokens: Vec<_> = RawToken::lexer(source).spanned().collect();

		Self {
			source,
			raw_tokens,
			cursor: 0,
			context: ScanContext::Outside,
			output: String::with_capacity(source.len()),
		}
	}

	/// Get the text slice for the current raw token.
	fn current_slice(&self) -> &'a str {
		let (_, span) = &self.raw_tokens[self.cursor];
		&self.source[span.clone()]
	}

	/// Copy the current token through unchanged and advance.
	fn copy_token(&mut self) {
		let slice = self.current_slice();
		self.output.push_str(slice);
		self.cursor += 1;
	}

	/// Write `replacement` in place of the current token and advance.
	fn replace_token(&mut self, replacement: &str) {
		self.output.push_str(replacement);
		self.cursor += 1;
	}

	/// A line break is formatting whitespace when the nearest non-whitespace
	/// character before it closes a tag and the nearest one after it opens a
	/// tag.
	fn is_formatting_break(&self) -> bool {
		let (_, span) = &self.raw_tokens[self.cursor];
		let before = self.source[..span.start].trim_end();
		let after = self.source[span.end..].trim_start();

		before.ends_with('>') && after.starts_with('<')
	}

	/// Drop the current line break together with all whitespace that follows
	/// it.
	fn skip_formatting_break(&mut self) {
		self.cursor += 1;

		while self.cursor < self.raw_tokens.len() {
			match self.raw_tokens[self.cursor].0 {
				Ok(RawToken::Newline) => self.cursor += 1,
				Ok(RawToken::Text) => {
					let slice = self.current_slice();
					let rest = slice.trim_start();
					self.cursor += 1;

					if !rest.is_empty() {
						self.output.push_str(rest);
						return;
					}
				}
				_ => return,
			}
		}
	}

	fn process(&mut self) {
		while self.cursor < self.raw_tokens.len() {
			// Unrecognized bytes are never structural.
			let Ok(raw) = self.raw_tokens[self.cursor].0 else {
				self.copy_token();
				continue;
			};

			match self.context {
				ScanContext::Outside => {
					match raw {
						RawToken::AngleOpen => {
							self.context = ScanContext::Tag;
							self.copy_token();
						}
						RawToken::Newline if self.is_formatting_break() => {
							self.skip_formatting_break();
						}
						RawToken::Newline => self.replace_token(LINE_BREAK),
						_ => self.copy_token(),
					}
				}
				ScanContext::Tag => {
					match raw {
						RawToken::DoubleQuote | RawToken::SingleQuote => {
							self.context = ScanContext::Quoted(raw);
							self.copy_token();
						}
						RawToken::AngleClose => {
							self.context = ScanContext::Outside;
							self.copy_token();
						}
						// A tag never carries a visible break.
						RawToken::Newline => self.replace_token(" "),
						_ => self.copy_token(),
					}
				}
				ScanContext::Quoted(quote) => {
					if raw == quote {
						self.context = ScanContext::Tag;
					}
					self.copy_token();
				}
			}
		}
	}
}

/// Replace every raw line break in `text` with [`LINE_BREAK`], except breaks
/// that only separate a closing `>` from an opening `<`. Those are removed
/// together with the whitespace that follows them.
///
/// Inside a tag a line break becomes a single space, and inside a quoted
/// attribute value everything is left untouched.
///
/// ```
/// use tsv2resume_core::convert_line_breaks;
///
/// assert_eq!(convert_line_breaks("one\ntwo"), "one<br>two");
/// assert_eq!(
/// 	convert_line_breaks("<ul>\n  <li>a</li>\n</ul>"),
/// 	"<ul><li>a</li></ul>"
/// );
/// ```
pub fn convert_line_breaks(text: &str) -> String {
	let mut walker = LineBreakWalker::new(text);
	walker.process();
	walker.output
}

/// Returns true when `text` contains at least one markup tag, i.e. a `<`
/// followed by a letter (optionally after `/`) and closed by a later `>`.
pub fn has_markup(text: &str) -> bool {
	TAG_PATTERN.is_match(text)
}
