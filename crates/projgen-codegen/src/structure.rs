//! Top-level project files: README, assistant context, ignore rules and the
//! project checklist.

use crate::document::DocumentTemplate;

pub static DOCUMENTS: &[DocumentTemplate] = &[
    DocumentTemplate {
        path: "README.md",
        source: include_str!("templates/structure/README.md"),
    },
    DocumentTemplate {
        path: "CLAUDE.md",
        source: include_str!("templates/structure/CLAUDE.md"),
    },
    DocumentTemplate {
        path: ".gitignore",
        source: include_str!("templates/structure/gitignore"),
    },
    DocumentTemplate {
        path: "TODO.md",
        source: include_str!("templates/structure/TODO.md"),
    },
];

/// Directories that exist in every project even though nothing is written
/// into them: wireframe images and student skill guides.
pub const EMPTY_DIRS: &[&str] = &["img", "tech-skills"];
