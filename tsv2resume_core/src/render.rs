use crate::model::FoldBlock;
use crate::model::Row;
use crate::model::Section;
use crate::paragraph::RenderOptions;
use crate::paragraph::format_text;

/// Render the document body: the title heading followed by one `<section>`
/// per section, in order.
///
/// Row fields pass through [`format_text`]; nothing else is escaped, so any
/// markup in the input reaches the output as markup.
pub fn render(title: &str, sections: &[Section], options: &RenderOptions) -> String {
	let mut out = format!("      <h1 class=\"title\">{title}</h1>\n");

	for section in sections {
		render_section(&mut out, section, options);
	}

	out
}

fn render_section(out: &mut String, section: &Section, options: &RenderOptions) {
	let classes = if section.is_two_column() {
		"entry entry--two"
	} else {
		"entry"
	};
	let id = &section.id;

	out.push_str(&format!("      <section aria-labelledby=\"{id}\">\n"));
	out.push_str(&format!("        <div class=\"{classes}\" id=\"{id}\">\n"));
	out.push_str(&format!(
		"          <div class=\"label\">{}</div>\n",
		section.label
	));

	for row in &section.rows {
		match row {
			Row::Pair { main, meta } => {
				out.push_str(&format!(
					"          <div class=\"line-main\">{}</div>\n",
					format_text(main, options)
				));
				if !meta.is_empty() {
					out.push_str(&format!(
						"          <div class=\"line-meta\">{}</div>\n",
						format_text(meta, options)
					));
				}
			}
			Row::Description { html } => {
				out.push_str(&format!(
					"          <div class=\"desc\">{}</div>\n",
					format_text(html, options)
				));
			}
			Row::FoldBlock(block) => render_fold(out, block, options),
		}
	}

	out.push_str("        </div>\n");
	out.push_str("      </section>\n\n");
}

fn render_fold(out: &mut String, block: &FoldBlock, options: &RenderOptions) {
	let open = if block.open { " open" } else { "" };

	out.push_str(&format!("          <details class=\"fold desc\"{open}>\n"));
	out.push_str(&format!(
		"            <summary><span class=\"chev\"></span> {}</summary>\n",
		format_text(&block.summary, options)
	));
	out.push_str("            <div class=\"fold-body\">\n");

	for item in &block.items {
		out.push_str("              <div class=\"fold-item\">\n");
		out.push_str(&format!(
			"                <div class=\"fold-main\">{}</div>\n",
			format_text(&item.html, options)
		));
		// Without meta the item collapses to a single column.
		if !item.meta.is_empty() {
			out.push_str(&format!(
				"                <div class=\"fold-meta\">{}</div>\n",
				format_text(&item.meta, options)
			));
		}
		out.push_str("              </div>\n");
	}

	out.push_str("            </div>\n");
	out.push_str("          </details>\n");
}
