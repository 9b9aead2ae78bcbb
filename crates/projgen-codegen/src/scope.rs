//! Scope documents: the competency-framed project scope, the overview, the
//! onboarding checklist and the fillable requirements template.

use crate::document::DocumentTemplate;

pub static DOCUMENTS: &[DocumentTemplate] = &[
    DocumentTemplate {
        path: "01-project-scope.md",
        source: include_str!("templates/scope/01-project-scope.md"),
    },
    DocumentTemplate {
        path: "overview.md",
        source: include_str!("templates/scope/overview.md"),
    },
    DocumentTemplate {
        path: "start_here.md",
        source: include_str!("templates/scope/start_here.md"),
    },
    DocumentTemplate {
        path: "project-requirements-scope.md",
        source: include_str!("templates/scope/project-requirements-scope.md"),
    },
];
