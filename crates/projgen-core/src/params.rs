//! User-supplied project parameters and their validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ProjgenError, ProjgenResult};

/// Shortest allowed project, in days.
pub const MIN_DURATION: u32 = 1;

/// Longest allowed project, in days.
pub const MAX_DURATION: u32 = 30;

/// Project name used when a topic slugifies to nothing.
const FALLBACK_PROJECT_NAME: &str = "project";

/// Target skill level of the students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Prompt label shown by the interactive generator.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner (learning basics)",
            Self::Intermediate => "Intermediate (comfortable with fundamentals)",
            Self::Advanced => "Advanced (experienced developer)",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = ProjgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(ProjgenError::UnknownSkillLevel(other.to_string())),
        }
    }
}

/// Kind of application the students will build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    WebSpa,
    WebFullstack,
    ApiRest,
    MobileReactNative,
    DesktopElectron,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        Self::WebSpa,
        Self::WebFullstack,
        Self::ApiRest,
        Self::MobileReactNative,
        Self::DesktopElectron,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebSpa => "web-spa",
            Self::WebFullstack => "web-fullstack",
            Self::ApiRest => "api-rest",
            Self::MobileReactNative => "mobile-react-native",
            Self::DesktopElectron => "desktop-electron",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::WebSpa => "Web Application (SPA)",
            Self::WebFullstack => "Full-Stack Web App",
            Self::ApiRest => "REST API",
            Self::MobileReactNative => "Mobile App (React Native)",
            Self::DesktopElectron => "Desktop App (Electron)",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = ProjgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or(ProjgenError::UnknownProjectType(wanted))
    }
}

/// Validated input for one generator run.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectParameters {
    pub topic: String,
    pub duration: u32,
    pub skill_level: SkillLevel,
    pub output_dir: PathBuf,
    /// Requested stack preset; `None` means "auto".
    pub tech_stack: Option<String>,
    pub project_type: ProjectType,
}

impl ProjectParameters {
    /// Validate and build parameters. The topic is trimmed.
    pub fn new(
        topic: &str,
        duration: u32,
        skill_level: SkillLevel,
        output_dir: impl Into<PathBuf>,
        tech_stack: Option<String>,
        project_type: ProjectType,
    ) -> ProjgenResult<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ProjgenError::validation("Project topic is required"));
        }

        validate_duration(duration)?;

        let output_dir = output_dir.into();
        if output_dir.as_os_str().is_empty() {
            return Err(ProjgenError::validation("Output directory is required"));
        }

        let tech_stack = tech_stack
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        Ok(Self {
            topic: topic.to_string(),
            duration,
            skill_level,
            output_dir,
            tech_stack,
            project_type,
        })
    }

    /// The preset name handed to the stack selector.
    pub fn preset(&self) -> &str {
        self.tech_stack.as_deref().unwrap_or("auto")
    }
}

/// Check a duration against the allowed day range.
pub fn validate_duration(duration: u32) -> ProjgenResult<()> {
    if (MIN_DURATION..=MAX_DURATION).contains(&duration) {
        Ok(())
    } else {
        Err(ProjgenError::validation(format!(
            "Duration must be between {} and {} days (got {})",
            MIN_DURATION, MAX_DURATION, duration
        )))
    }
}

/// Derive a kebab-case project name from a free-text topic.
///
/// Keeps ASCII lowercase letters, digits, whitespace and hyphens; whitespace
/// runs become a single hyphen and hyphen runs collapse.
pub fn project_name(topic: &str) -> String {
    let lowered = topic.to_lowercase();
    let mut name = String::with_capacity(lowered.len());
    let mut last_was_dash = false;

    for ch in lowered.chars() {
        let out = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ch
        } else if ch.is_whitespace() || ch == '-' {
            '-'
        } else {
            continue;
        };

        if out == '-' {
            if last_was_dash {
                continue;
            }
            last_was_dash = true;
        } else {
            last_was_dash = false;
        }
        name.push(out);
    }

    let trimmed = name.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_PROJECT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_from_topic() {
        assert_eq!(project_name("Recipe Sharing App"), "recipe-sharing-app");
        assert_eq!(project_name("  Movie   Finder!! 2.0 "), "movie-finder-20");
        assert_eq!(project_name("to-do -- list"), "to-do-list");
    }

    #[test]
    fn test_project_name_fallback() {
        assert_eq!(project_name("!!!"), "project");
        assert_eq!(project_name("Café"), "caf");
    }

    #[test]
    fn test_duration_bounds() {
        assert!(validate_duration(1).is_ok());
        assert!(validate_duration(30).is_ok());
        assert!(validate_duration(0).is_err());
        assert!(validate_duration(31).is_err());
    }

    #[test]
    fn test_parameters_reject_empty_topic() {
        let err = ProjectParameters::new(
            "   ",
            10,
            SkillLevel::Intermediate,
            "./out",
            None,
            ProjectType::WebSpa,
        )
        .unwrap_err();
        assert!(matches!(err, ProjgenError::Validation(_)));
    }

    #[test]
    fn test_parameters_normalize_stack() {
        let params = ProjectParameters::new(
            " Weather Now ",
            12,
            SkillLevel::Beginner,
            "./out",
            Some(" React-Vite ".to_string()),
            ProjectType::WebSpa,
        )
        .unwrap();
        assert_eq!(params.topic, "Weather Now");
        assert_eq!(params.preset(), "react-vite");

        let auto = ProjectParameters::new("x", 5, SkillLevel::Advanced, "o", Some(String::new()), ProjectType::ApiRest)
            .unwrap();
        assert_eq!(auto.preset(), "auto");
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("ADVANCED".parse::<SkillLevel>().unwrap(), SkillLevel::Advanced);
        assert!("expert".parse::<SkillLevel>().is_err());
        assert_eq!(
            "mobile-react-native".parse::<ProjectType>().unwrap(),
            ProjectType::MobileReactNative
        );
        assert!("cli".parse::<ProjectType>().is_err());
    }
}
