//! Assessment materials for the oral defense.

use crate::document::DocumentTemplate;

pub static DOCUMENTS: &[DocumentTemplate] = &[
    DocumentTemplate {
        path: "business-case/oral-defense-rubric.md",
        source: include_str!("templates/business_case/oral-defense-rubric.md"),
    },
    DocumentTemplate {
        path: "business-case/oral-defense-presentation-template.md",
        source: include_str!("templates/business_case/oral-defense-presentation-template.md"),
    },
    DocumentTemplate {
        path: "business-case/incentive-requirements.md",
        source: include_str!("templates/business_case/incentive-requirements.md"),
    },
    DocumentTemplate {
        path: "business-case/canva-presentation-design-guide.md",
        source: include_str!("templates/business_case/canva-presentation-design-guide.md"),
    },
];
