//! Optional `projgen.toml` defaults.
//!
//! Every key is optional. Values here sit below CLI flags and environment
//! variables and above the built-in defaults.
//!
//! ```toml
//! output = "./projects/next"
//! duration = 14
//! skill_level = "beginner"
//! tech_stack = "vue-vite"
//! project_type = "web-spa"
//! watch_dir = "~/.local/share/projgen"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ProjgenError, ProjgenResult};
use crate::params::{validate_duration, ProjectType, SkillLevel};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "projgen.toml";

pub const DEFAULT_OUTPUT_DIR: &str = "./generated-project";
pub const DEFAULT_DURATION: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub output: Option<PathBuf>,
    pub duration: Option<u32>,
    pub skill_level: Option<SkillLevel>,
    pub tech_stack: Option<String>,
    pub project_type: Option<ProjectType>,
    pub watch_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Parse config text. A duration outside the allowed range is rejected here
    /// so a bad file fails before any prompt is shown.
    pub fn parse(text: &str) -> ProjgenResult<Self> {
        let config: Self = toml::from_str(text)?;
        if let Some(duration) = config.duration {
            validate_duration(duration)
                .map_err(|e| ProjgenError::config(format!("{}: {}", CONFIG_FILE_NAME, e)))?;
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> ProjgenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loaded config file");
        Self::parse(&text)
    }

    /// Load `projgen.toml` from `dir`, or the empty config if there is none.
    pub fn discover(dir: &Path) -> ProjgenResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn output_or_default(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn duration_or_default(&self) -> u32 {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }

    pub fn skill_level_or_default(&self) -> SkillLevel {
        self.skill_level.unwrap_or_default()
    }

    pub fn project_type_or_default(&self) -> ProjectType {
        self.project_type.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = ProjectConfig::parse(
            r#"
output = "./out"
duration = 14
skill_level = "beginner"
tech_stack = "vue-vite"
project_type = "web-fullstack"
"#,
        )
        .unwrap();

        assert_eq!(config.output_or_default(), PathBuf::from("./out"));
        assert_eq!(config.duration_or_default(), 14);
        assert_eq!(config.skill_level_or_default(), SkillLevel::Beginner);
        assert_eq!(config.tech_stack.as_deref(), Some("vue-vite"));
        assert_eq!(config.project_type_or_default(), ProjectType::WebFullstack);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ProjectConfig::parse("").unwrap();
        assert_eq!(config.output_or_default(), PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.duration_or_default(), 10);
        assert_eq!(config.skill_level_or_default(), SkillLevel::Intermediate);
        assert_eq!(config.project_type_or_default(), ProjectType::WebSpa);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(ProjectConfig::parse("duration = 45"), Err(ProjgenError::Config(_))));
        assert!(matches!(ProjectConfig::parse("skill_level = \"guru\""), Err(ProjgenError::Toml(_))));
        assert!(matches!(ProjectConfig::parse("colour = \"red\""), Err(ProjgenError::Toml(_))));
    }

    #[test]
    fn test_discover_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ProjectConfig::discover(dir.path()).unwrap(), ProjectConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "duration = 5\n").unwrap();
        assert_eq!(ProjectConfig::discover(dir.path()).unwrap().duration, Some(5));
    }
}
