//! Terminal output formatting.

use colored::Colorize;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use projgen_codegen::DocumentSet;
use projgen_core::stack::model::{MobileStackProfile, StackProfile};
use projgen_core::{DomainProfile, GenerationContext};
use projgen_watch::{Favorites, WatchLedger, BREAK_THRESHOLD_HOURS};

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

fn rule() -> String {
    "─".repeat(term_width().min(80))
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 2 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

fn cell(s: &str, width: usize) -> String {
    pad_right(&truncate_visual(s, width), width)
}

/// Print the resolved project before anything is rendered.
pub fn print_context_summary(ctx: &GenerationContext) {
    let domain = if ctx.domain.is_fallback() {
        format!("{} (no keyword matched)", ctx.profile().name).yellow()
    } else {
        format!("{} (score {})", ctx.profile().name, ctx.domain.score).green()
    };

    println!("{} {}", "→".blue().bold(), ctx.params.topic.cyan().bold());
    println!("  {:<14} {}", "Project name:", ctx.project_name);
    println!("  {:<14} {}", "Domain:", domain);
    println!("  {:<14} {}", "Stack:", ctx.stack.preset.name());
    println!("  {:<14} {}", "Data:", ctx.stack.api_integration.primary());
    println!(
        "  {:<14} {} days, {}",
        "Schedule:",
        ctx.params.duration,
        ctx.sprints.labels().join(" | ")
    );
    println!();
}

pub fn print_document_list(documents: &DocumentSet, root: &Path) {
    println!("{} Dry run, nothing written to {}", "ℹ".blue().bold(), root.display());
    println!("{}", rule().dimmed());
    for (path, text) in documents.iter() {
        println!("  {} {}", cell(path, 60), format!("{} B", text.len()).dimmed());
    }
    println!("{}", rule().dimmed());
    println!(
        "{} document(s), {} bytes total",
        documents.len(),
        documents.total_bytes()
    );
}

pub fn print_generation_done(ctx: &GenerationContext, files: usize, root: &Path) {
    println!(
        "{} Generated {} files for {}",
        "✓".green().bold(),
        files,
        ctx.project_name.cyan()
    );
    println!("  Directory: {}", root.display());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  cd {}", root.display());
    println!("  open start_here.md            # Orientation checklist");
    println!("  open 01-project-scope.md      # Scope and sprint plan");
    if ctx.stack.api_integration.is_live() {
        println!(
            "  export {}=...   # Key for {}",
            ctx.api_env_var(),
            ctx.profile().primary_data_source()
        );
    }
}

pub fn print_domains_table(profiles: &[DomainProfile]) {
    println!("{} {} {}", pad_right("DOMAIN", 10), pad_right("KEYWORDS", 38), "DATA SOURCE");
    println!("{}", rule().dimmed());
    for profile in profiles {
        println!(
            "{} {} {}",
            pad_right(profile.name, 10).cyan(),
            cell(&profile.keywords.join(", "), 38),
            profile.primary_data_source()
        );
    }
}

pub fn print_stacks_table(web: &[StackProfile], mobile: &MobileStackProfile) {
    println!(
        "{} {} {} {}",
        pad_right("KEY", 18),
        pad_right("NAME", 20),
        pad_right("DATA FETCHING", 30),
        "TESTING"
    );
    println!("{}", rule().dimmed());
    for stack in web {
        println!(
            "{} {} {} {}",
            pad_right(stack.key, 18).cyan(),
            cell(stack.name, 20),
            cell(stack.data_fetching_library, 30),
            stack.testing_library
        );
    }
    println!(
        "{} {} {} {}",
        pad_right(mobile.key, 18).cyan(),
        cell(mobile.name, 20),
        cell(mobile.data_fetching_library, 30),
        mobile.testing_library
    );
    println!();
    println!("{}", "The mobile preset is chosen by `--project-type mobile-react-native` with the auto stack.".dimmed());
}

pub fn print_analysis(ctx: &GenerationContext) {
    print_context_summary(ctx);
    let profile = ctx.profile();

    println!("{}", "Core features".bold());
    for (i, feature) in profile.core_features.iter().enumerate() {
        println!("  {}. {}", i + 1, feature);
    }
    println!();
    println!("{}", "Target users".bold());
    println!("  {}", profile.target_users.join(", "));
    println!();
    println!("{}", "Sprints".bold());
    for (i, range) in ctx.sprints.ranges().iter().enumerate() {
        println!("  Sprint {}: {}", i + 1, range.label());
    }
    if ctx.stack.api_integration.is_live() {
        println!();
        println!("  Env var: {}", ctx.api_env_var().yellow());
    }
}

pub fn print_watched_table(ledger: &WatchLedger) {
    if ledger.is_empty() {
        println!("{}", "No movies watched yet.".dimmed());
        return;
    }

    println!("{} {} {} {}", pad_right("IMDB ID", 12), pad_right("TITLE", 36), pad_right("RUNTIME", 10), "WATCHED");
    println!("{}", rule().dimmed());
    for movie in ledger.movies() {
        println!(
            "{} {} {} {}",
            pad_right(&movie.imdb_id, 12).dimmed(),
            cell(&movie.title, 36),
            pad_right(&movie.runtime, 10),
            movie.watched_at.format("%Y-%m-%d")
        );
    }
    println!();
    println!("{} movie(s)", ledger.len());
}

pub fn print_favorites(favorites: &Favorites) {
    if favorites.is_empty() {
        println!("{}", "No favorites yet.".dimmed());
        return;
    }
    for movie in favorites.list() {
        println!("  {} {} {}", "♥".red(), movie.title, format!("({})", movie.imdb_id).dimmed());
    }
}

fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn print_watch_stats(ledger: &WatchLedger) {
    let (hours, minutes) = ledger.hours_minutes();
    let percent = ledger.break_progress_percent();

    println!("{}", "Watch time".bold());
    println!("  {:<16} {}", "Movies:", ledger.len());
    println!("  {:<16} {}h {}m", "Total:", hours, minutes);
    println!("  {:<16} {:.1} hours", "Decimal:", ledger.total_hours());
    println!();
    println!("{} {:.0}%", "Progress to the 40-hour milestone".bold(), percent);
    println!("  {}", progress_bar(percent, 30).cyan());

    if ledger.break_due() {
        println!(
            "  {} You've reached {} hours! Time for a break. Try `projgen watch recommend`.",
            "🎉".bold(),
            BREAK_THRESHOLD_HOURS
        );
    } else {
        println!("  {:.1} hours until milestone", ledger.hours_until_break());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("a long movie title", 8), "a long..");
        assert_eq!(cell("abc", 5), "abc  ");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(50.0, 4), "██░░");
        assert_eq!(progress_bar(100.0, 4), "████");
    }
}
