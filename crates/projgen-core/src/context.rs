//! The immutable input every document is rendered from.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::domain::{match_domain, DomainMatch};
use crate::domain::model::DomainProfile;
use crate::params::{project_name, ProjectParameters};
use crate::schedule::SprintPlan;
use crate::stack::{select_stack, StackSelection};

/// Parameters plus everything derived from them for one generator run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationContext {
    pub params: ProjectParameters,
    pub project_name: String,
    pub domain: DomainMatch,
    pub stack: StackSelection,
    pub sprints: SprintPlan,
    pub generated_on: NaiveDate,
}

impl GenerationContext {
    /// Run the domain matcher and stack selector for `params`.
    pub fn assemble(params: ProjectParameters, generated_on: NaiveDate) -> Self {
        let project_name = project_name(&params.topic);
        let domain = match_domain(&params.topic);
        let stack = select_stack(params.preset(), params.project_type, domain.profile);
        let sprints = SprintPlan::for_duration(params.duration);

        info!(
            project = %project_name,
            domain = domain.profile.name,
            stack = stack.preset.name(),
            duration = params.duration,
            "Assembled generation context"
        );

        Self {
            params,
            project_name,
            domain,
            stack,
            sprints,
            generated_on,
        }
    }

    pub fn profile(&self) -> &'static DomainProfile {
        self.domain.profile
    }

    /// Generation date as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.generated_on.format("%Y-%m-%d").to_string()
    }

    /// Environment variable the generated app reads its API key from,
    /// e.g. `VITE_OMDB_API_KEY`.
    pub fn api_env_var(&self) -> String {
        env_var_name(self.stack.preset.env_prefix(), self.profile().primary_data_source())
    }
}

/// Build `{prefix}{SOURCE}_KEY`: whitespace becomes `_`, anything else that is
/// not alphanumeric is dropped, and the result is upper-cased.
pub fn env_var_name(prefix: &str, source: &str) -> String {
    let stem: String = source
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || c == '_' {
                Some(c.to_ascii_uppercase())
            } else {
                None
            }
        })
        .collect();
    format!("{}{}_KEY", prefix, stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ProjectType, SkillLevel};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_assemble_recipe_project() {
        let params = ProjectParameters::new(
            "Recipe Sharing App",
            10,
            SkillLevel::Intermediate,
            "./out",
            None,
            ProjectType::WebSpa,
        )
        .unwrap();
        let ctx = GenerationContext::assemble(params, date());

        assert_eq!(ctx.project_name, "recipe-sharing-app");
        assert_eq!(ctx.profile().name, "recipe");
        assert_eq!(ctx.stack.preset.name(), "React + Vite");
        assert_eq!(ctx.stack.api_integration.primary(), "Spoonacular API");
        assert_eq!(ctx.sprints.labels(), vec!["1-3", "4-5", "6-8", "9-10"]);
        assert_eq!(ctx.date_string(), "2025-03-14");
        assert_eq!(ctx.api_env_var(), "VITE_SPOONACULAR_API_KEY");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(env_var_name("VITE_", "OMDb API"), "VITE_OMDB_API_KEY");
        assert_eq!(env_var_name("NEXT_PUBLIC_", "Plaid API (optional)"), "NEXT_PUBLIC_PLAID_API_OPTIONAL_KEY");
        assert_eq!(
            env_var_name("VITE_", "No external API (local storage)"),
            "VITE_NO_EXTERNAL_API_LOCAL_STORAGE_KEY"
        );
    }
}
