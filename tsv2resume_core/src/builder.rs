use std::borrow::Borrow;

use tracing::debug;
use tracing::trace;

use crate::model::DEFAULT_SECTION_LABEL;
use crate::model::FoldBlock;
use crate::model::FoldItem;
use crate::model::RawRow;
use crate::model::Row;
use crate::model::Section;
use crate::model::Sections;
use crate::sentinel::RowKind;
use crate::sentinel::classify;

/// Where the section builder currently appends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuilderState {
	/// No section has been started yet.
	#[default]
	Idle,
	/// Rows are appended to the last section.
	InSection,
	/// Rows without a heading become items of the fold block that is the last
	/// row of the last section.
	InFold,
}

/// Something a row adds to the document besides opening a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	/// Append a row to the current section.
	AppendRow(Row),
	/// Append an item to the fold block being collected.
	AppendFoldItem(FoldItem),
}

/// The outcome of feeding one classified row to a [`BuilderState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
	pub next: BuilderState,
	/// Label of a section to open before the effect is applied.
	pub open_section: Option<String>,
	pub effect: Option<Effect>,
}

impl Transition {
	fn stay(state: BuilderState) -> Self {
		Self {
			next: state,
			open_section: None,
			effect: None,
		}
	}
}

impl BuilderState {
	/// Decide what `kind` does in this state. `current_label` is the label of
	/// the section rows are currently appended to, if any.
	///
	/// A heading equal to `current_label` continues that section instead of
	/// starting a new one. The comparison is exact, so two unrelated entries
	/// that share a heading end up in the same section.
	pub fn transition(self, kind: RowKind, current_label: Option<&str>) -> Transition {
		match kind {
			RowKind::Blank => Transition::stay(self),
			RowKind::SectionStart { label } => {
				Transition {
					next: Self::InSection,
					open_section: Some(label),
					effect: None,
				}
			}
			RowKind::FoldStart { summary, open } => {
				Transition {
					next: Self::InFold,
					open_section: self.default_section(),
					effect: Some(Effect::AppendRow(Row::FoldBlock(FoldBlock::new(
						summary, open,
					)))),
				}
			}
			RowKind::Content {
				heading,
				content,
				meta,
			} if !heading.is_empty() => {
				let open_section = (current_label != Some(heading.as_str())).then_some(heading);
				let effect = (!content.is_empty() || !meta.is_empty())
					.then(|| Effect::AppendRow(Row::pair(content, meta)));

				Transition {
					next: Self::InSection,
					open_section,
					effect,
				}
			}
			RowKind::Content { content, meta, .. } => {
				if self == Self::InFold {
					let effect = (!content.is_empty() || !meta.is_empty())
						.then(|| Effect::AppendFoldItem(FoldItem::new(content, meta)));

					return Transition {
						next: Self::InFold,
						open_section: None,
						effect,
					};
				}

				let row = if meta.is_empty() {
					Row::description(content)
				} else {
					Row::pair(content, meta)
				};

				Transition {
					next: Self::InSection,
					open_section: self.default_section(),
					effect: Some(Effect::AppendRow(row)),
				}
			}
		}
	}

	/// The section to open lazily when a row needs a home and none exists.
	fn default_section(self) -> Option<String> {
		(self == Self::Idle).then(|| DEFAULT_SECTION_LABEL.to_string())
	}
}

/// Accumulates sections from rows fed in input order.
#[derive(Debug, Default)]
pub struct SectionBuilder {
	state: BuilderState,
	sections: Sections,
}

impl SectionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> BuilderState {
		self.state
	}

	/// Classify `raw` and apply the resulting transition.
	pub fn push(&mut self, raw: &RawRow) {
		let kind = classify(raw);
		trace!(?kind, state = ?self.state, "classified row");

		let current_label = self.sections.last().map(|section| section.label.as_str());
		let transition = self.state.transition(kind, current_label);
		self.apply(transition);
	}

	fn apply(&mut self, transition: Transition) {
		let Transition {
			next,
			open_section,
			effect,
		} = transition;

		if let Some(label) = open_section {
			debug!(%label, "starting section");
			self.sections.push(Section::new(label));
		}

		match effect {
			Some(Effect::AppendRow(row)) => {
				if let Row::FoldBlock(block) = &row {
					debug!(summary = %block.summary, open = block.open, "opening fold block");
				}

				if let Some(section) = self.sections.last_mut() {
					section.rows.push(row);
				}
			}
			Some(Effect::AppendFoldItem(item)) => {
				let block = self
					.sections
					.last_mut()
					.and_then(|section| section.rows.last_mut());

				if let Some(Row::FoldBlock(block)) = block {
					block.items.push(item);
				}
			}
			None => {}
		}

		self.state = next;
	}

	pub fn finish(self) -> Sections {
		self.sections
	}
}

/// Build the section tree for `rows`, in input order.
///
/// ```
/// use tsv2resume_core::RawRow;
/// use tsv2resume_core::Row;
/// use tsv2resume_core::build_sections;
///
/// let sections = build_sections([
/// 	RawRow::new("SECTION: Work", "", ""),
/// 	RawRow::new("", "Built X", ""),
/// ]);
///
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].label, "Work");
/// assert_eq!(sections[0].rows, vec![Row::description("Built X")]);
/// ```
pub fn build_sections<I>(rows: I) -> Sections
where
	I: IntoIterator,
	I::Item: Borrow<RawRow>,
{
	let mut builder = SectionBuilder::new();

	for row in rows {
		builder.push(row.borrow());
	}

	let sections = builder.finish();
	debug!(count = sections.len(), "built sections");
	sections
}
