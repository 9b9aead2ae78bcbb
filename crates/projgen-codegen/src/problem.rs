//! The problem statement.

use crate::document::DocumentTemplate;

pub static DOCUMENTS: &[DocumentTemplate] = &[DocumentTemplate {
    path: "00-problem.md",
    source: include_str!("templates/problem/00-problem.md"),
}];
