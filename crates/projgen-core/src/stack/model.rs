//! Tech stack profile types.

use serde::Serialize;

/// One folder of the generated project layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    pub path: &'static str,
    pub purpose: &'static str,
}

/// Documentation links cited by the learning resources and milestone guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackDocs {
    pub frontend: &'static str,
    pub bundler: &'static str,
    pub routing: &'static str,
    pub data_fetching: &'static str,
    pub testing: &'static str,
}

/// A web stack preset from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackProfile {
    /// Preset key, e.g. `react-vite`.
    pub key: &'static str,
    pub name: &'static str,
    pub frontend_framework: &'static str,
    pub bundler: &'static str,
    pub routing_library: &'static str,
    pub data_fetching_library: &'static str,
    pub styling_approach: &'static str,
    pub testing_library: &'static str,
    pub icon_library: &'static str,
    pub storage_mechanism: &'static str,
    pub deployment: &'static [&'static str],
    pub setup_command: &'static str,
    pub package_manager: &'static str,
    /// Prefix the bundler requires on client-visible environment variables.
    pub env_prefix: &'static str,
    pub dev_server_port: u16,
    pub dependencies: &'static [&'static str],
    pub dev_dependencies: &'static [&'static str],
    pub folder_structure: &'static [FolderEntry],
    pub docs: StackDocs,
}

/// The mobile preset. Carries fewer fields than a web preset: no bundler,
/// icon set, dependency lists or folder layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MobileStackProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub frontend_framework: &'static str,
    pub framework: &'static str,
    pub navigation: &'static str,
    pub data_fetching_library: &'static str,
    pub styling_approach: &'static str,
    pub testing_library: &'static str,
    pub storage_mechanism: &'static str,
    pub deployment: &'static [&'static str],
    pub setup_command: &'static str,
    pub package_manager: &'static str,
    pub env_prefix: &'static str,
    pub docs: StackDocs,
}

/// Either kind of preset the selector can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "profile", rename_all = "snake_case")]
pub enum StackPreset {
    Web(&'static StackProfile),
    Mobile(&'static MobileStackProfile),
}

impl StackPreset {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Web(p) => p.key,
            Self::Mobile(p) => p.key,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Web(p) => p.name,
            Self::Mobile(p) => p.name,
        }
    }

    pub fn frontend(&self) -> &'static str {
        match self {
            Self::Web(p) => p.frontend_framework,
            Self::Mobile(p) => p.frontend_framework,
        }
    }

    /// Bundler for web presets; the mobile preset reports its framework.
    pub fn bundler(&self) -> &'static str {
        match self {
            Self::Web(p) => p.bundler,
            Self::Mobile(p) => p.framework,
        }
    }

    /// Router for web presets; navigation library for mobile.
    pub fn routing(&self) -> &'static str {
        match self {
            Self::Web(p) => p.routing_library,
            Self::Mobile(p) => p.navigation,
        }
    }

    pub fn data_fetching(&self) -> &'static str {
        match self {
            Self::Web(p) => p.data_fetching_library,
            Self::Mobile(p) => p.data_fetching_library,
        }
    }

    pub fn styling(&self) -> &'static str {
        match self {
            Self::Web(p) => p.styling_approach,
            Self::Mobile(p) => p.styling_approach,
        }
    }

    pub fn testing(&self) -> &'static str {
        match self {
            Self::Web(p) => p.testing_library,
            Self::Mobile(p) => p.testing_library,
        }
    }

    pub fn icons(&self) -> Option<&'static str> {
        match self {
            Self::Web(p) => Some(p.icon_library),
            Self::Mobile(_) => None,
        }
    }

    pub fn storage(&self) -> &'static str {
        match self {
            Self::Web(p) => p.storage_mechanism,
            Self::Mobile(p) => p.storage_mechanism,
        }
    }

    pub fn deployment(&self) -> &'static [&'static str] {
        match self {
            Self::Web(p) => p.deployment,
            Self::Mobile(p) => p.deployment,
        }
    }

    pub fn setup_command(&self) -> &'static str {
        match self {
            Self::Web(p) => p.setup_command,
            Self::Mobile(p) => p.setup_command,
        }
    }

    pub fn package_manager(&self) -> &'static str {
        match self {
            Self::Web(p) => p.package_manager,
            Self::Mobile(p) => p.package_manager,
        }
    }

    pub fn env_prefix(&self) -> &'static str {
        match self {
            Self::Web(p) => p.env_prefix,
            Self::Mobile(p) => p.env_prefix,
        }
    }

    pub fn dependencies(&self) -> &'static [&'static str] {
        match self {
            Self::Web(p) => p.dependencies,
            Self::Mobile(_) => &[],
        }
    }

    pub fn dev_dependencies(&self) -> &'static [&'static str] {
        match self {
            Self::Web(p) => p.dev_dependencies,
            Self::Mobile(_) => &[],
        }
    }

    pub fn folder_structure(&self) -> &'static [FolderEntry] {
        match self {
            Self::Web(p) => p.folder_structure,
            Self::Mobile(_) => &[],
        }
    }

    pub fn docs(&self) -> &'static StackDocs {
        match self {
            Self::Web(p) => &p.docs,
            Self::Mobile(p) => &p.docs,
        }
    }

    /// Local URL of the development server.
    pub fn dev_server_url(&self) -> String {
        match self {
            Self::Web(p) => format!("http://localhost:{}", p.dev_server_port),
            Self::Mobile(_) => "the Expo Go app (scan the QR code)".to_string(),
        }
    }

    /// Whether React code samples apply to this preset.
    pub fn is_react(&self) -> bool {
        self.name().contains("React")
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile(_))
    }
}

/// How the generated project talks to its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiIntegration {
    LiveApi {
        primary: &'static str,
        caching: &'static str,
        error_handling: &'static str,
        rate_limit: &'static str,
    },
    LocalStorage {
        primary: &'static str,
        data_structure: &'static str,
        sync_strategy: &'static str,
        migration: &'static str,
    },
}

impl ApiIntegration {
    /// Integration block for a domain backed by a live third-party API.
    pub fn live(primary: &'static str) -> Self {
        Self::LiveApi {
            primary,
            caching: "TanStack Query with stale-while-revalidate",
            error_handling: "Retry logic with exponential backoff",
            rate_limit: "Client-side throttling and caching",
        }
    }

    /// Integration block for a domain that keeps everything in the browser.
    pub fn local_storage() -> Self {
        Self::LocalStorage {
            primary: "localStorage",
            data_structure: "JSON objects with timestamps",
            sync_strategy: "Optimistic updates",
            migration: "Version-based schema updates",
        }
    }

    pub fn primary(&self) -> &'static str {
        match self {
            Self::LiveApi { primary, .. } | Self::LocalStorage { primary, .. } => primary,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::LiveApi { .. })
    }
}

/// Fixed quality thresholds attached to every selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceTargets {
    pub lighthouse_performance: u8,
    pub lighthouse_accessibility: u8,
    pub lighthouse_best_practices: u8,
    pub first_contentful_paint: &'static str,
    pub time_to_interactive: &'static str,
    pub bundle_size: &'static str,
}

impl PerformanceTargets {
    pub const STANDARD: Self = Self {
        lighthouse_performance: 85,
        lighthouse_accessibility: 90,
        lighthouse_best_practices: 90,
        first_contentful_paint: "< 1.5s",
        time_to_interactive: "< 3s",
        bundle_size: "< 500KB",
    };
}

/// Fixed accessibility standard attached to every selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessibilityRequirements {
    pub standard: &'static str,
    pub features: &'static [&'static str],
}

impl AccessibilityRequirements {
    pub const STANDARD: Self = Self {
        standard: "WCAG 2.1 AA",
        features: &[
            "Semantic HTML",
            "ARIA labels",
            "Keyboard navigation",
            "Screen reader support",
            "Color contrast ≥ 4.5:1",
            "Focus management",
            "Reduced motion support",
        ],
    };
}
