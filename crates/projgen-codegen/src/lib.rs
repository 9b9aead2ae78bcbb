//! # Projgen Codegen
//!
//! Renders the Markdown curriculum of a generated project from a
//! [`projgen_core::GenerationContext`] and writes it to disk.
//!
//! Documents are tera templates grouped by family: project structure,
//! problem statement, scope, milestones, facilitation and business case.

pub mod business_case;
pub mod document;
pub mod error;
pub mod facilitation;
pub mod milestone;
pub mod problem;
pub mod render;
pub mod scope;
pub mod structure;
pub mod view;
pub mod writer;

pub use document::{DocumentSet, DocumentTemplate};
pub use error::{CodegenError, CodegenResult};
pub use render::{all_templates, render, Renderer};
pub use structure::EMPTY_DIRS;
pub use view::DocumentView;
pub use writer::{document_path, write_documents};
