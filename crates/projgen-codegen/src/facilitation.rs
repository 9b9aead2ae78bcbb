//! Instructor materials: sprint schedule, example week, micro-milestones,
//! term plan and the learning resource list.
//!
//! The daily schedule and the micro-milestones are laid out over the same
//! [`projgen_core::SprintPlan`] every other document uses.

use serde::Serialize;

use projgen_core::schedule::DayRange;
use projgen_core::GenerationContext;

use crate::document::DocumentTemplate;
use crate::view::{capitalize_first, Feature};

pub static DOCUMENTS: &[DocumentTemplate] = &[
    DocumentTemplate {
        path: "facilitation-guide/project-schedule.md",
        source: include_str!("templates/facilitation/project-schedule.md"),
    },
    DocumentTemplate {
        path: "facilitation-guide/example-week.md",
        source: include_str!("templates/facilitation/example-week.md"),
    },
    DocumentTemplate {
        path: "facilitation-guide/micro-milestones.md",
        source: include_str!("templates/facilitation/micro-milestones.md"),
    },
    DocumentTemplate {
        path: "facilitation-guide/term-example.md",
        source: include_str!("templates/facilitation/term-example.md"),
    },
    DocumentTemplate {
        path: "learn-more/resources.md",
        source: include_str!("templates/facilitation/resources.md"),
    },
];

const SPRINT_TITLES: [&str; 4] = ["Foundation", "Core Features", "Advanced Features", "Testing & Deploy"];

const SPRINT_OBJECTIVES: [&str; 4] = [
    "Set up development environment and basic structure",
    "Implement main functionality",
    "Add persistence and detail views",
    "Polish and deploy",
];

#[derive(Debug, Clone, Serialize)]
pub struct DayFocus {
    pub day: u32,
    pub focus: String,
}

/// One sprint as the templates see it.
#[derive(Debug, Clone, Serialize)]
pub struct SprintView {
    pub number: usize,
    pub title: &'static str,
    pub objective: &'static str,
    pub start: u32,
    pub end: u32,
    /// `"1-3"`, `"4"` or `"none"`.
    pub label: String,
    /// `"Days 1-3"`, `"Day 4"` or a note that the sprint has no days.
    pub days_label: String,
    pub is_empty: bool,
    pub days: Vec<DayFocus>,
}

/// A day of the micro-milestone checklist.
#[derive(Debug, Clone, Serialize)]
pub struct MicroMilestoneDay {
    pub day: u32,
    pub sprint: usize,
    pub title: String,
    pub items: Vec<String>,
    /// True when the day only finishes a milestone started earlier.
    pub continued: bool,
}

struct MicroBlock {
    title: &'static str,
    items: Vec<String>,
}

pub fn days_label(range: &DayRange) -> String {
    if range.is_empty() {
        "No days scheduled".to_string()
    } else if range.start == range.end {
        format!("Day {}", range.start)
    } else {
        format!("Days {}", range.label())
    }
}

/// Rotating focus topics for the days of one sprint.
fn phase_focuses(sprint: usize, ctx: &GenerationContext, lead: &[Feature]) -> Vec<String> {
    let live_api = ctx.stack.api_integration.is_live();
    let feature = |i: usize| lead.get(i).map(|f| f.name).unwrap_or("core feature");
    match sprint {
        1 => vec![
            "Project initialization and dependencies".to_string(),
            "Routing and base structure".to_string(),
            "CSS foundation and responsive setup".to_string(),
        ],
        2 => vec![
            if live_api { "API service layer" } else { "Data service layer" }.to_string(),
            format!("{} implementation", capitalize_first(feature(0))),
            "UI components and loading states".to_string(),
            "Error handling and edge cases".to_string(),
        ],
        3 => vec![
            "Detail views".to_string(),
            format!("Data persistence with {}", ctx.stack.preset.storage()),
            format!("{} functionality", capitalize_first(feature(2))),
            "URL state management".to_string(),
        ],
        _ => vec![
            "Accessibility audit and fixes".to_string(),
            "Unit and component tests".to_string(),
            "Performance optimization".to_string(),
            "Deployment and documentation".to_string(),
        ],
    }
}

/// Build the four sprint views with a focus for every day. Focus topics
/// restart at the first day of each sprint and cycle when a sprint runs
/// longer than its topic list.
pub fn sprint_views(ctx: &GenerationContext, lead: &[Feature]) -> Vec<SprintView> {
    ctx.sprints
        .ranges()
        .iter()
        .enumerate()
        .map(|(i, range)| {
            let number = i + 1;
            let focuses = phase_focuses(number, ctx, lead);
            let days = range
                .days()
                .enumerate()
                .map(|(pos, day)| DayFocus {
                    day,
                    focus: focuses[pos % focuses.len()].clone(),
                })
                .collect();

            SprintView {
                number,
                title: SPRINT_TITLES[i],
                objective: SPRINT_OBJECTIVES[i],
                start: range.start,
                end: range.end,
                label: range.label(),
                days_label: days_label(range),
                is_empty: range.is_empty(),
                days,
            }
        })
        .collect()
}

fn items(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The ten micro-milestones, grouped by the sprint they belong to.
fn micro_blocks(ctx: &GenerationContext, lead: &[Feature]) -> [Vec<MicroBlock>; 4] {
    let preset = &ctx.stack.preset;
    let pm = preset.package_manager();
    let feature = |i: usize| lead.get(i).map(|f| f.sentence.clone()).unwrap_or_default();

    let data_block = if ctx.stack.api_integration.is_live() {
        MicroBlock {
            title: "API Integration",
            items: items(&[
                "API service created",
                "Custom hooks implemented",
                "First API call successful",
                "Error handling working",
            ]),
        }
    } else {
        MicroBlock {
            title: "Data Layer",
            items: items(&[
                "Data service created",
                "Custom hooks implemented",
                "First record saved and reloaded",
                "Error handling working",
            ]),
        }
    };

    [
        vec![
            MicroBlock {
                title: "Environment Setup",
                items: vec![
                    format!("Node.js and {} installed", pm),
                    format!("Project initialized with {}", preset.name()),
                    "Dependencies installed".to_string(),
                    "Dev server running".to_string(),
                ],
            },
            MicroBlock {
                title: "Routing & Structure",
                items: items(&[
                    "Routing configured (3 routes)",
                    "AppShell component created",
                    "Navigation working",
                    "Base CSS applied",
                ]),
            },
        ],
        vec![
            data_block,
            MicroBlock {
                title: "Main Components",
                items: vec![
                    format!("{} component complete", feature(0)),
                    "Loading states implemented".to_string(),
                    "Results displaying correctly".to_string(),
                    "Mobile responsive".to_string(),
                ],
            },
        ],
        vec![
            MicroBlock {
                title: "Detail Views",
                items: items(&[
                    "Detail page created",
                    "Data fetching by ID",
                    "Full information displayed",
                    "Navigation from list to detail",
                ]),
            },
            MicroBlock {
                title: "Persistence",
                items: vec![
                    format!("{} integration", preset.storage()),
                    format!("{} functionality", feature(2)),
                    "Data persists across sessions".to_string(),
                    "UI updates correctly".to_string(),
                ],
            },
            MicroBlock {
                title: "Polish UI",
                items: items(&[
                    "Responsive design refined",
                    "Interactions smooth",
                    "Empty states handled",
                    "Error states polished",
                ]),
            },
        ],
        vec![
            MicroBlock {
                title: "Accessibility",
                items: items(&[
                    "ARIA labels added",
                    "Keyboard navigation working",
                    "Screen reader tested",
                    "Color contrast verified",
                ]),
            },
            MicroBlock {
                title: "Testing",
                items: items(&[
                    "Unit tests written",
                    "Component tests written",
                    "Lighthouse audit passed",
                    "Cross-browser tested",
                ]),
            },
            MicroBlock {
                title: "Deploy",
                items: items(&[
                    "Production build created",
                    "Deployed to hosting platform",
                    "Environment variables configured",
                    "Documentation complete",
                ]),
            },
        ],
    ]
}

/// Spread the micro-milestones over the project days.
///
/// Each sprint's milestones go to that sprint's days. Milestones of an empty
/// sprint move to the next non-empty one (or the last one when none follows),
/// so every milestone is scheduled exactly once. Within a sprint, day `i` of
/// `L` takes milestones `ceil(i*B/L) .. ceil((i+1)*B/L)`: short sprints pack
/// several milestones into a day, long ones spend extra days finishing.
pub fn micro_milestones(ctx: &GenerationContext, lead: &[Feature]) -> Vec<MicroMilestoneDay> {
    let plan = &ctx.sprints;
    let mut assigned: Vec<(usize, DayRange, Vec<MicroBlock>)> = Vec::new();
    let mut pending: Vec<MicroBlock> = Vec::new();

    for ((i, range), blocks) in plan.ranges().iter().enumerate().zip(micro_blocks(ctx, lead)) {
        pending.extend(blocks);
        if !range.is_empty() {
            assigned.push((i + 1, *range, std::mem::take(&mut pending)));
        }
    }
    if let Some((_, _, blocks)) = assigned.last_mut() {
        blocks.append(&mut pending);
    }

    let mut out = Vec::new();
    for (sprint, range, blocks) in assigned {
        let len = range.len() as usize;
        let count = blocks.len();
        let ceil_div = |n: usize| (n + len - 1) / len;
        let mut started_on = range.start;

        for (i, day) in range.days().enumerate() {
            let first = ceil_div(i * count);
            let last = ceil_div((i + 1) * count);

            if first < last {
                let todays = &blocks[first..last];
                started_on = day;
                out.push(MicroMilestoneDay {
                    day,
                    sprint,
                    title: todays.iter().map(|b| b.title).collect::<Vec<_>>().join(" + "),
                    items: todays.iter().flat_map(|b| b.items.iter().cloned()).collect(),
                    continued: false,
                });
            } else {
                let open = &blocks[first - 1];
                out.push(MicroMilestoneDay {
                    day,
                    sprint,
                    title: format!("{} (continued)", open.title),
                    items: vec![
                        format!("Finish open items from Day {}", started_on),
                        "Commit and push progress".to_string(),
                    ],
                    continued: true,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use projgen_core::{ProjectParameters, ProjectType, SkillLevel};

    const ALL_TITLES: [&str; 10] = [
        "Environment Setup",
        "Routing & Structure",
        "API Integration",
        "Main Components",
        "Detail Views",
        "Persistence",
        "Polish UI",
        "Accessibility",
        "Testing",
        "Deploy",
    ];

    fn context(duration: u32) -> GenerationContext {
        let params = ProjectParameters::new(
            "Movie Finder",
            duration,
            SkillLevel::Intermediate,
            "./out",
            None,
            ProjectType::WebSpa,
        )
        .unwrap();
        GenerationContext::assemble(params, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    fn lead() -> Vec<Feature> {
        ["search", "details", "favorites", "ratings"]
            .into_iter()
            .map(|name| Feature {
                name,
                title: name.to_string(),
                sentence: capitalize_first(name),
            })
            .collect()
    }

    #[test]
    fn test_ten_days_one_milestone_each() {
        let ctx = context(10);
        let days = micro_milestones(&ctx, &lead());
        let titles: Vec<&str> = days.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Environment Setup",
                "Routing & Structure",
                "Routing & Structure (continued)",
                "API Integration",
                "Main Components",
                "Detail Views",
                "Persistence",
                "Polish UI",
                "Accessibility + Testing",
                "Deploy",
            ]
        );
        assert!(days[2].continued);
        assert_eq!(days[2].items[0], "Finish open items from Day 2");
    }

    #[test]
    fn test_every_milestone_scheduled_once() {
        for d in 1..=30 {
            let ctx = context(d);
            let days = micro_milestones(&ctx, &lead());

            let listed: Vec<u32> = days.iter().map(|m| m.day).collect();
            assert_eq!(listed, (1..=d).collect::<Vec<_>>(), "duration {}", d);

            let started: Vec<&str> = days
                .iter()
                .filter(|m| !m.continued)
                .flat_map(|m| m.title.split(" + "))
                .collect();
            assert_eq!(started, ALL_TITLES.to_vec(), "duration {}", d);
        }
    }

    #[test]
    fn test_single_day_project_packs_everything() {
        let ctx = context(1);
        let days = micro_milestones(&ctx, &lead());
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].items.len(), 40);
    }

    #[test]
    fn test_sprint_views_follow_plan() {
        let ctx = context(10);
        let views = sprint_views(&ctx, &lead());
        assert_eq!(views.len(), 4);
        assert_eq!(views[0].days_label, "Days 1-3");
        assert_eq!(views[1].label, "4-5");
        assert_eq!(views[1].days[0].focus, "API service layer");
        assert_eq!(views[1].days[1].focus, "Search implementation");
        assert_eq!(views[2].days[2].focus, "Favorites functionality");
        assert_eq!(views[3].days.len(), 2);
    }

    #[test]
    fn test_focus_cycles_in_long_sprints() {
        let ctx = context(30);
        let views = sprint_views(&ctx, &lead());
        let first = &views[0];
        assert_eq!(first.days.len(), 8);
        assert_eq!(first.days[3].focus, first.days[0].focus);
    }

    #[test]
    fn test_empty_sprint_label() {
        let ctx = context(2);
        let views = sprint_views(&ctx, &lead());
        assert!(views[1].is_empty);
        assert_eq!(views[1].days_label, "No days scheduled");
        assert_eq!(views[2].days_label, "Day 2");
    }
}
