use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ResumeError;
use crate::ResumeResult;
use crate::paragraph::RenderOptions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"tsv2resume.toml",
	".tsv2resume.toml",
	".config/tsv2resume.toml",
];

/// Configuration loaded from a `tsv2resume.toml` file.
///
/// ```toml
/// title = "Jane Doe"
/// auto_paragraph = true
/// template = "shell.html"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ResumeConfig {
	/// Document title. When absent the output file name is used.
	#[serde(default)]
	pub title: Option<String>,
	/// Wrap plain text in paragraphs and turn line breaks into `<br>`. Set to
	/// `false` to copy every field through untouched.
	#[serde(default = "default_auto_paragraph")]
	pub auto_paragraph: bool,
	/// A custom page shell, relative to the directory holding the config
	/// file. It receives `title` and `body`.
	#[serde(default)]
	pub template: Option<PathBuf>,
	/// Directory the config was loaded from.
	#[serde(skip)]
	pub root: PathBuf,
}

fn default_auto_paragraph() -> bool {
	true
}

impl Default for ResumeConfig {
	fn default() -> Self {
		Self {
			title: None,
			auto_paragraph: default_auto_paragraph(),
			template: None,
			root: PathBuf::new(),
		}
	}
}

impl ResumeConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ResumeResult<Option<ResumeConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_file(&config_path).map(Some)
	}

	/// Load the config at an explicit path.
	pub fn load_file(path: &Path) -> ResumeResult<ResumeConfig> {
		let content = std::fs::read_to_string(path)?;
		let mut config: ResumeConfig =
			toml::from_str(&content).map_err(|e| ResumeError::ConfigParse(e.to_string()))?;
		config.root = path
			.parent()
			.map(Path::to_path_buf)
			.unwrap_or_default();

		Ok(config)
	}

	pub fn render_options(&self) -> RenderOptions {
		RenderOptions {
			auto_paragraph: self.auto_paragraph,
		}
	}

	/// Read the custom page shell, if one is configured.
	pub fn load_template(&self) -> ResumeResult<Option<String>> {
		let Some(template) = &self.template else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(self.root.join(template))?;
		Ok(Some(content))
	}
}
