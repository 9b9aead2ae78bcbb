//! Rendered documents and the templates they come from.

use std::collections::BTreeMap;

/// A document template tied to its output path.
pub struct DocumentTemplate {
    /// Output path relative to the project root, `/`-separated.
    pub path: &'static str,
    /// Tera source of the document.
    pub source: &'static str,
}

/// Rendered documents keyed by relative path, iterated in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: BTreeMap<String, String>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.documents.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.documents.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(path, text)| (path.as_str(), text.as_str()))
    }

    /// Total size of all documents in bytes.
    pub fn total_bytes(&self) -> usize {
        self.documents.values().map(String::len).sum()
    }
}
