//! `tsv2resume_core` turns a flat list of `(heading, content, meta)` records
//! into a tree of sections and renders that tree as a resume-style page.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Tab-separated file
//!   → Reader (csv records → RawRow, header discarded)
//!   → Classifier (SECTION / HIDDEN sentinels → RowKind)
//!   → Section builder (RowKind transitions → Sections)
//!   → Renderer (Sections → body markup, every field through the paragraph formatter)
//!   → Page shell (minijinja template wrapping title + body)
//! ```
//!
//! ## Input Conventions
//!
//! Only the first column is ever interpreted:
//!
//! - `SECTION: Name` starts a new section called `Name`.
//! - `HIDDEN` starts a collapsible block, closed unless `OPEN` follows. Rows
//!   with an empty heading are collected into it until the next heading.
//! - Any other heading starts a section of that name, unless it repeats the
//!   current section's name, in which case the row continues that section.
//! - Rows with an empty heading become a pair (when they have meta) or a
//!   description.
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `tsv2resume.toml`.
//!
//! ## Quick Start
//!
//! ```rust
//! use tsv2resume_core::RawRow;
//! use tsv2resume_core::RenderOptions;
//! use tsv2resume_core::build_sections;
//! use tsv2resume_core::render;
//!
//! let sections = build_sections([
//! 	RawRow::new("SECTION: Work", "", ""),
//! 	RawRow::new("", "Engineer", "2020-2022"),
//! ]);
//! let body = render("Jane Doe", &sections, &RenderOptions::default());
//!
//! assert!(body.contains("<div class=\"line-meta\"><p>2020-2022</p></div>"));
//! ```

pub use builder::*;
pub use engine::*;
pub use error::*;
pub use lexer::*;
pub use model::*;
pub use page::*;
pub use paragraph::*;
pub use reader::*;
pub use render::*;
pub use sentinel::*;

mod builder;
pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
mod lexer;
mod model;
mod page;
mod paragraph;
mod reader;
mod render;
mod sentinel;
