//! # Projgen Core
//!
//! Pure building blocks for the educational project generator: the domain
//! catalog and keyword matcher, the tech-stack catalog and selector, sprint
//! arithmetic, and the immutable context every document is rendered from.

pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod params;
pub mod schedule;
pub mod stack;

pub use config::ProjectConfig;
pub use context::GenerationContext;
pub use domain::{match_domain, match_profile, DomainMatch};
pub use domain::model::{CompetingSolution, DomainProfile, UserStory, NO_EXTERNAL_SOURCE};
pub use error::{ProjgenError, ProjgenResult};
pub use params::{project_name, ProjectParameters, ProjectType, SkillLevel};
pub use schedule::{DayRange, SprintPlan};
pub use stack::{select_stack, StackSelection};
pub use stack::model::{
    AccessibilityRequirements, ApiIntegration, MobileStackProfile, PerformanceTargets, StackPreset,
    StackProfile,
};
