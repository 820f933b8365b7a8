use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use tsv2resume_core::OutputKind;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Convert a 3-column TSV (heading, content, meta) into a grid-layout resume page.",
	long_about = "tsv2resume turns a spreadsheet export with three columns (heading, content, \
	              meta) into a styled HTML resume. The first row is a header and is \
	              discarded.\n\nReserved headings:\n  SECTION: Name   Start a section called \
	              Name\n  HIDDEN [OPEN]   Start a collapsible block; following rows with an \
	              empty heading go inside it"
)]
pub struct ResumeCli {
	/// Input TSV file (tab-separated) with a header in the first row.
	pub input: PathBuf,

	/// Output file path (e.g. `resume.html`).
	pub output: PathBuf,

	/// Document title. Defaults to the config `title`, then to the output file
	/// name without its extension.
	#[arg(long)]
	pub title: Option<String>,

	/// Output format. `html` writes the full page, `json` writes the section
	/// tree for inspection.
	#[arg(long, value_enum, default_value_t = OutputFormat::Html)]
	pub format: OutputFormat,

	/// Copy text fields through untouched instead of wrapping plain text in
	/// paragraphs and turning line breaks into `<br>`.
	#[arg(long, default_value_t = false)]
	pub no_auto_paragraph: bool,

	/// Path to a config file. When omitted, `tsv2resume.toml`,
	/// `.tsv2resume.toml` and `.config/tsv2resume.toml` are looked up in the
	/// current directory.
	#[arg(long, short)]
	pub config: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl ResumeCli {
	/// The title to use when neither the flag nor the config provides one.
	pub fn default_title(&self) -> String {
		self.output
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_default()
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// A complete HTML page.
	Html,
	/// The section tree as JSON.
	Json,
}

impl From<OutputFormat> for OutputKind {
	fn from(format: OutputFormat) -> Self {
		match format {
			OutputFormat::Html => Self::Html,
			OutputFormat::Json => Self::Json,
		}
	}
}
