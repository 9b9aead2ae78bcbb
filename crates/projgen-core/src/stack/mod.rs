//! Tech stack catalog and selection.

pub mod model;

use model::{
    AccessibilityRequirements, ApiIntegration, FolderEntry, MobileStackProfile, PerformanceTargets,
    StackDocs, StackPreset, StackProfile,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::model::DomainProfile;
use crate::params::ProjectType;

/// Preset name that lets the project type decide.
pub const AUTO_PRESET: &str = "auto";

/// Preset used when nothing more specific applies.
pub const DEFAULT_PRESET: &str = "react-vite";

const VITE_DOCS: &str = "https://vitejs.dev/";
const VITEST_DOCS: &str = "https://vitest.dev/";

/// Web presets addressable by name.
pub static WEB_STACKS: &[StackProfile] = &[
    StackProfile {
        key: "react-vite",
        name: "React + Vite",
        frontend_framework: "React 18",
        bundler: "Vite",
        routing_library: "React Router",
        data_fetching_library: "TanStack Query",
        styling_approach: "CSS3 (Grid + Flexbox)",
        testing_library: "Vitest + React Testing Library",
        icon_library: "@heroicons/react",
        storage_mechanism: "localStorage",
        deployment: &["Vercel", "Netlify", "GitHub Pages"],
        setup_command: "npm create vite@latest . -- --template react",
        package_manager: "pnpm",
        env_prefix: "VITE_",
        dev_server_port: 5173,
        dependencies: &["react-router-dom", "@tanstack/react-query", "@heroicons/react"],
        dev_dependencies: &[
            "vitest",
            "@testing-library/react",
            "@testing-library/jest-dom",
            "@testing-library/user-event",
            "jsdom",
            "prettier",
            "eslint-config-prettier",
        ],
        folder_structure: &[
            FolderEntry { path: "src/components", purpose: "Reusable UI components" },
            FolderEntry { path: "src/pages", purpose: "Route-level components" },
            FolderEntry { path: "src/hooks", purpose: "Custom React hooks" },
            FolderEntry { path: "src/services", purpose: "API integration layer" },
            FolderEntry { path: "src/utils", purpose: "Helper functions" },
            FolderEntry { path: "src/styles", purpose: "CSS modules" },
            FolderEntry { path: "src/test", purpose: "Test utilities and setup" },
        ],
        docs: StackDocs {
            frontend: "https://react.dev/",
            bundler: VITE_DOCS,
            routing: "https://reactrouter.com/",
            data_fetching: "https://tanstack.com/query/latest",
            testing: VITEST_DOCS,
        },
    },
    StackProfile {
        key: "nextjs",
        name: "Next.js",
        frontend_framework: "React 18 + Next.js 14",
        bundler: "Turbopack",
        routing_library: "Next.js App Router",
        data_fetching_library: "React Server Components + SWR",
        styling_approach: "CSS Modules / Tailwind CSS",
        testing_library: "Jest + React Testing Library",
        icon_library: "@heroicons/react",
        storage_mechanism: "localStorage (client) + Database (server)",
        deployment: &["Vercel", "Netlify"],
        setup_command: "npx create-next-app@latest .",
        package_manager: "pnpm",
        env_prefix: "NEXT_PUBLIC_",
        dev_server_port: 3000,
        dependencies: &["swr", "@heroicons/react"],
        dev_dependencies: &[
            "jest",
            "@testing-library/react",
            "@testing-library/jest-dom",
            "prettier",
            "eslint-config-prettier",
        ],
        folder_structure: &[
            FolderEntry { path: "app", purpose: "App Router pages and layouts" },
            FolderEntry { path: "components", purpose: "Reusable UI components" },
            FolderEntry { path: "lib", purpose: "Utilities and API functions" },
            FolderEntry { path: "public", purpose: "Static assets" },
            FolderEntry { path: "hooks", purpose: "Custom React hooks" },
        ],
        docs: StackDocs {
            frontend: "https://nextjs.org/docs",
            bundler: "https://nextjs.org/docs/app/api-reference/turbopack",
            routing: "https://nextjs.org/docs/app",
            data_fetching: "https://swr.vercel.app/",
            testing: "https://jestjs.io/",
        },
    },
    StackProfile {
        key: "vue-vite",
        name: "Vue + Vite",
        frontend_framework: "Vue 3",
        bundler: "Vite",
        routing_library: "Vue Router",
        data_fetching_library: "VueQuery (TanStack Query)",
        styling_approach: "CSS3 (Scoped styles)",
        testing_library: "Vitest + Vue Testing Library",
        icon_library: "@heroicons/vue",
        storage_mechanism: "localStorage",
        deployment: &["Vercel", "Netlify", "GitHub Pages"],
        setup_command: "npm create vite@latest . -- --template vue",
        package_manager: "pnpm",
        env_prefix: "VITE_",
        dev_server_port: 5173,
        dependencies: &["vue-router", "@tanstack/vue-query", "@heroicons/vue"],
        dev_dependencies: &["vitest", "@vue/test-utils", "jsdom", "prettier"],
        folder_structure: &[
            FolderEntry { path: "src/components", purpose: "Vue components" },
            FolderEntry { path: "src/views", purpose: "Route-level views" },
            FolderEntry { path: "src/composables", purpose: "Vue composables" },
            FolderEntry { path: "src/services", purpose: "API layer" },
            FolderEntry { path: "src/utils", purpose: "Helper functions" },
        ],
        docs: StackDocs {
            frontend: "https://vuejs.org/",
            bundler: VITE_DOCS,
            routing: "https://router.vuejs.org/",
            data_fetching: "https://tanstack.com/query/latest/docs/framework/vue/overview",
            testing: VITEST_DOCS,
        },
    },
    StackProfile {
        key: "svelte-vite",
        name: "Svelte + Vite",
        frontend_framework: "Svelte",
        bundler: "Vite",
        routing_library: "Svelte Router",
        data_fetching_library: "Svelte Stores + fetch",
        styling_approach: "CSS3 (Scoped)",
        testing_library: "Vitest + Svelte Testing Library",
        icon_library: "@heroicons/svelte",
        storage_mechanism: "localStorage",
        deployment: &["Vercel", "Netlify"],
        setup_command: "npm create vite@latest . -- --template svelte",
        package_manager: "pnpm",
        env_prefix: "VITE_",
        dev_server_port: 5173,
        dependencies: &["svelte-routing", "@heroicons/svelte"],
        dev_dependencies: &["vitest", "@testing-library/svelte", "jsdom"],
        folder_structure: &[
            FolderEntry { path: "src/components", purpose: "Svelte components" },
            FolderEntry { path: "src/routes", purpose: "Route components" },
            FolderEntry { path: "src/stores", purpose: "Svelte stores" },
            FolderEntry { path: "src/services", purpose: "API layer" },
        ],
        docs: StackDocs {
            frontend: "https://svelte.dev/",
            bundler: VITE_DOCS,
            routing: "https://github.com/EmilTholin/svelte-routing",
            data_fetching: "https://svelte.dev/docs/svelte-store",
            testing: VITEST_DOCS,
        },
    },
];

/// The mobile preset, only reachable through `auto` + `mobile-react-native`.
pub static MOBILE_STACK: MobileStackProfile = MobileStackProfile {
    key: "react-native-expo",
    name: "React Native + Expo",
    frontend_framework: "React Native",
    framework: "Expo",
    navigation: "React Navigation",
    data_fetching_library: "TanStack Query",
    styling_approach: "StyleSheet / Styled Components",
    testing_library: "Jest + React Native Testing Library",
    storage_mechanism: "AsyncStorage",
    deployment: &["Expo EAS", "App Store", "Play Store"],
    setup_command: "npx create-expo-app .",
    package_manager: "pnpm",
    env_prefix: "EXPO_PUBLIC_",
    docs: StackDocs {
        frontend: "https://reactnative.dev/",
        bundler: "https://docs.expo.dev/",
        routing: "https://reactnavigation.org/",
        data_fetching: "https://tanstack.com/query/latest",
        testing: "https://jestjs.io/",
    },
};

/// The selected preset plus the blocks derived from the project's domain.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StackSelection {
    pub preset: StackPreset,
    pub api_integration: ApiIntegration,
    pub performance: PerformanceTargets,
    pub accessibility: AccessibilityRequirements,
}

/// Look up a web preset by its key.
pub fn find_web_stack(key: &str) -> Option<&'static StackProfile> {
    WEB_STACKS.iter().find(|s| s.key == key)
}

fn default_web_stack() -> &'static StackProfile {
    &WEB_STACKS[0]
}

/// Resolve a preset name to a stack.
///
/// `auto` picks by project type: `web-fullstack` gets Next.js,
/// `mobile-react-native` gets the mobile preset, everything else React + Vite.
/// Unknown names fall back to React + Vite.
pub fn select_stack(preset: &str, project_type: ProjectType, domain: &DomainProfile) -> StackSelection {
    let wanted = preset.trim().to_lowercase();

    let preset = if wanted == AUTO_PRESET {
        match project_type {
            ProjectType::WebFullstack => StackPreset::Web(find_web_stack("nextjs").unwrap_or_else(default_web_stack)),
            ProjectType::MobileReactNative => StackPreset::Mobile(&MOBILE_STACK),
            _ => StackPreset::Web(default_web_stack()),
        }
    } else {
        match find_web_stack(&wanted) {
            Some(stack) => StackPreset::Web(stack),
            None => {
                warn!(preset = %wanted, fallback = DEFAULT_PRESET, "Unknown stack preset");
                StackPreset::Web(default_web_stack())
            }
        }
    };

    let api_integration = if domain.has_external_source() {
        ApiIntegration::live(domain.primary_data_source())
    } else {
        ApiIntegration::local_storage()
    };

    debug!(
        stack = preset.key(),
        project_type = %project_type,
        live_api = api_integration.is_live(),
        "Selected stack"
    );

    StackSelection {
        preset,
        api_integration,
        performance: PerformanceTargets::STANDARD,
        accessibility: AccessibilityRequirements::STANDARD,
    }
}
