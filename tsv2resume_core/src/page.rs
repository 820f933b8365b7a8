use minijinja::Environment;
use minijinja::context;

use crate::ResumeResult;

/// The built-in page shell. It carries the grid stylesheet and expects
/// `title` and `body`.
pub const DEFAULT_PAGE_TEMPLATE: &str = include_str!("page.html");

/// Wrap a rendered body in a full page.
///
/// `shell` replaces [`DEFAULT_PAGE_TEMPLATE`] when given. Neither value is
/// escaped: the body is already markup and the title is inserted verbatim.
pub fn render_page(title: &str, body: &str, shell: Option<&str>) -> ResumeResult<String> {
	let mut env = Environment::new();
	env.set_keep_trailing_newline(true);
	env.add_template("page", shell.unwrap_or(DEFAULT_PAGE_TEMPLATE))?;

	let template = env.get_template("page")?;
	let page = template.render(context! { title => title, body => body })?;

	Ok(page)
}
