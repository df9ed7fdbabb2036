//! Markdown rendering of resolver results.
//!
//! Output always starts with the marker line, then a blank line, then the body:
//!
//! ```text
//! PRESENTATION_TYPE=search
//!
//! ## Search: deploy
//! ...
//! ```

use std::fmt::Write;

use crate::catalog::{display_name, Command};
use crate::registry::WorkflowStep;
use crate::resolve::{
    CategoryResult, CommandResult, OverviewResult, PresentationType, Resolution, SearchResult,
    TaskResult,
};

pub const MARKER_KEY: &str = "PRESENTATION_TYPE";

pub fn marker_line(presentation: PresentationType) -> String {
    format!("{}={}", MARKER_KEY, presentation.as_str())
}

/// Render a resolution: marker line, blank line, Markdown body.
pub fn render(resolution: &Resolution) -> String {
    let body = match resolution {
        Resolution::Overview(result) => overview(result),
        Resolution::Category(result) => category(result),
        Resolution::Command(result) => command(result),
        Resolution::Task(result) => task(result),
        Resolution::Search(result) => search(result),
    };

    format!("{}\n\n{}", marker_line(resolution.presentation()), body)
}

fn overview(result: &OverviewResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Command Guide\n");
    let _ = writeln!(
        out,
        "{} {} in {} {}.\n",
        result.total_commands,
        plural(result.total_commands, "command", "commands"),
        result.category_count,
        plural(result.category_count, "category", "categories")
    );

    let _ = writeln!(out, "## Quick start\n");
    for line in result.quick_start {
        let _ = writeln!(out, "- {}", line);
    }

    let _ = writeln!(out, "\n## Categories\n");
    for category in &result.categories {
        let _ = writeln!(
            out,
            "- **{}** ({}): {}",
            category.key, category.count, category.display_name
        );
    }
    out
}

fn category(result: &CategoryResult) -> String {
    let mut out = String::new();

    let Some(category) = &result.category else {
        let _ = writeln!(out, "Category '{}' not found.\n", result.query);
        write_category_list(&mut out, &result.available);
        return out;
    };

    let _ = writeln!(out, "# {} Commands\n", category.display_name);
    if !result.workflow.is_empty() {
        let _ = writeln!(out, "## Workflow\n");
        write_workflow(&mut out, result.workflow);
        out.push('\n');
    }

    let _ = writeln!(out, "## Commands ({})\n", result.commands.len());
    if result.commands.is_empty() {
        let _ = writeln!(out, "No commands installed in this category yet.");
    }
    write_command_list(&mut out, &result.commands);

    if let Some(tip) = result.tip {
        let _ = writeln!(out, "\n**Tip:** {}", tip);
    }
    out
}

fn command(result: &CommandResult) -> String {
    let mut out = String::new();
    let cmd = &result.command;

    let _ = writeln!(out, "# {}\n", cmd.name);
    let _ = writeln!(out, "{}\n", cmd.description);
    let _ = writeln!(out, "**Category:** {}\n", display_name(&cmd.category));
    let _ = writeln!(out, "**Usage:** `{}`", result.usage);

    if !result.related.is_empty() {
        let _ = writeln!(out, "\n## Related\n");
        write_command_list(&mut out, &result.related);
    }
    out
}

fn task(result: &TaskResult) -> String {
    let mut out = String::new();

    let Some(top) = result.scores.first() else {
        let _ = writeln!(
            out,
            "Not sure which commands fit '{}'. Try a category:\n",
            result.query
        );
        write_category_list(&mut out, &result.categories);
        return out;
    };

    let _ = writeln!(out, "# Recommended: {}\n", display_name(&top.category));
    let _ = writeln!(out, "Matched: {}\n", top.matched.join(", "));

    if !result.workflow.is_empty() {
        let _ = writeln!(out, "## Workflow\n");
        write_workflow(&mut out, result.workflow);
        out.push('\n');
    }

    if !result.commands.is_empty() {
        let _ = writeln!(out, "## Commands\n");
        write_command_list(&mut out, &result.commands);
    }

    if let Some(tip) = result.tip {
        let _ = writeln!(out, "\n**Tip:** {}", tip);
    }
    out
}

fn search(result: &SearchResult) -> String {
    let mut out = String::new();

    if let Some(missed) = &result.missed_command {
        let _ = writeln!(out, "Command '{}' not found.\n", missed);
    }

    if result.total == 0 {
        let _ = writeln!(out, "No matches for '{}'.\n", result.term);
        write_category_list(&mut out, &result.categories);
        return out;
    }

    let noun = plural(result.total, "match", "matches");
    let _ = writeln!(out, "Found {} {} for '{}'", result.total, noun, result.term);
    if result.matches.len() < result.total {
        let _ = writeln!(out, "Showing first {}", result.matches.len());
    }
    out.push('\n');
    write_command_list(&mut out, &result.matches);
    out
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

fn write_workflow(out: &mut String, steps: &[WorkflowStep]) {
    for (i, step) in steps.iter().enumerate() {
        let _ = writeln!(out, "{}. **{}**: {}", i + 1, step.label, step.action);
    }
}

fn write_command_list(out: &mut String, commands: &[Command]) {
    for command in commands {
        let _ = writeln!(out, "- `{}`: {}", command.name, command.description);
    }
}

fn write_category_list(out: &mut String, keys: &[String]) {
    let _ = writeln!(out, "Available categories:");
    for key in keys {
        let _ = writeln!(out, "- {}", key);
    }
}
