//! Render every document of a project from one [`GenerationContext`].

use tera::Tera;
use tracing::{debug, info};

use projgen_core::GenerationContext;

use crate::document::{DocumentSet, DocumentTemplate};
use crate::error::CodegenResult;
use crate::view::DocumentView;
use crate::{business_case, facilitation, milestone, problem, scope, structure};

/// Document families in output order.
pub static FAMILIES: &[&[DocumentTemplate]] = &[
    structure::DOCUMENTS,
    problem::DOCUMENTS,
    scope::DOCUMENTS,
    milestone::DOCUMENTS,
    facilitation::DOCUMENTS,
    business_case::DOCUMENTS,
];

/// Every document template across all families.
pub fn all_templates() -> impl Iterator<Item = &'static DocumentTemplate> {
    FAMILIES.iter().flat_map(|family| family.iter())
}

/// Tera engine with every document template registered under its output path.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> CodegenResult<Self> {
        let mut tera = Tera::default();
        // Markdown output, nothing to escape.
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(all_templates().map(|t| (t.path, t.source)))?;
        Ok(Self { tera })
    }

    /// Render all documents. Pure: the same context always yields the same set.
    pub fn render(&self, ctx: &GenerationContext) -> CodegenResult<DocumentSet> {
        let view = DocumentView::from_context(ctx);
        let context = tera::Context::from_serialize(&view)?;

        let mut documents = DocumentSet::new();
        for template in all_templates() {
            let text = self.tera.render(template.path, &context)?;
            debug!(path = template.path, bytes = text.len(), "Rendered document");
            documents.insert(template.path, text);
        }

        info!(
            project = %ctx.project_name,
            documents = documents.len(),
            "Rendered project documents"
        );
        Ok(documents)
    }
}

/// Build a renderer and render `ctx` with it.
pub fn render(ctx: &GenerationContext) -> CodegenResult<DocumentSet> {
    Renderer::new()?.render(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use projgen_core::{ProjectParameters, ProjectType, SkillLevel};

    fn recipe_context() -> GenerationContext {
        let params = ProjectParameters::new(
            "Recipe Sharing App",
            10,
            SkillLevel::Intermediate,
            "./out",
            Some("react-vite".to_string()),
            ProjectType::WebSpa,
        )
        .unwrap();
        GenerationContext::assemble(params, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap())
    }

    #[test]
    fn test_template_paths_are_unique() {
        let mut paths: Vec<&str> = all_templates().map(|t| t.path).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
        assert_eq!(total, 25);
    }

    #[test]
    fn test_render_is_idempotent() {
        let ctx = recipe_context();
        let renderer = Renderer::new().unwrap();
        let first = renderer.render(&ctx).unwrap();
        let second = renderer.render(&ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_readme_header() {
        let docs = render(&recipe_context()).unwrap();
        let readme = docs.get("README.md").unwrap();
        assert!(readme.starts_with("# Recipe Sharing App\n"));
        assert!(readme.contains("**Project Name:** recipe-sharing-app"));
        assert!(readme.contains("**Duration:** 10 days"));
        assert!(readme.contains("**Generated:** 2025-02-03"));
    }
}
