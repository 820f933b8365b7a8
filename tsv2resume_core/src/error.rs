use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ResumeError {
	#[error(transparent)]
	#[diagnostic(code(tsv2resume::io_error))]
	Io(#[from] std::io::Error),

	#[error("input file not found: `{path}`")]
	#[diagnostic(
		code(tsv2resume::input_not_found),
		help("pass the path to a tab-separated file whose first row is a header")
	)]
	InputNotFound { path: String },

	#[error("failed to read tab-separated input: {0}")]
	#[diagnostic(
		code(tsv2resume::tsv),
		help("check that the file is UTF-8 and that quoted fields use doubled quotes (\"\")")
	)]
	Tsv(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(tsv2resume::config_parse),
		help("check that tsv2resume.toml is valid TOML with `title`, `auto_paragraph` or `template` keys")
	)]
	ConfigParse(String),

	#[error("page template rendering failed: {0}")]
	#[diagnostic(
		code(tsv2resume::template_render),
		help("a custom page template must reference `{{{{ body }}}}` and may use `{{{{ title }}}}`")
	)]
	TemplateRender(String),

	#[error("failed to serialize sections: {0}")]
	#[diagnostic(code(tsv2resume::serialize))]
	Serialize(String),
}

impl From<csv::Error> for ResumeError {
	fn from(error: csv::Error) -> Self {
		Self::Tsv(error.to_string())
	}
}

impl From<minijinja::Error> for ResumeError {
	fn from(error: minijinja::Error) -> Self {
		Self::TemplateRender(error.to_string())
	}
}

pub type ResumeResult<T> = Result<T, ResumeError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
