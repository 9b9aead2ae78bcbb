//! The four milestone guides and their supporting documents.

use crate::document::DocumentTemplate;

pub static DOCUMENTS: &[DocumentTemplate] = &[
    DocumentTemplate {
        path: "milestone/Milestone1/m1.md",
        source: include_str!("templates/milestone/m1.md"),
    },
    DocumentTemplate {
        path: "milestone/Milestone2/m2.md",
        source: include_str!("templates/milestone/m2.md"),
    },
    DocumentTemplate {
        path: "milestone/Milestone3/m3.md",
        source: include_str!("templates/milestone/m3.md"),
    },
    DocumentTemplate {
        path: "milestone/Milestone4/m4.md",
        source: include_str!("templates/milestone/m4.md"),
    },
    DocumentTemplate {
        path: "02-wireframes-overview.md",
        source: include_str!("templates/milestone/02-wireframes-overview.md"),
    },
    DocumentTemplate {
        path: "03-trello-project-board-guide.md",
        source: include_str!("templates/milestone/03-trello-project-board-guide.md"),
    },
    DocumentTemplate {
        path: "04-SETUP_INSTRUCTIONS.md",
        source: include_str!("templates/milestone/04-SETUP_INSTRUCTIONS.md"),
    },
];
