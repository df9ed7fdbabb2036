use serde::Serialize;

use super::search::resolve_search;
use super::Resolution;
use crate::catalog::{Catalog, Command, SEPARATOR};
use crate::intent::COMMAND_SEPARATORS;

pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    pub command: Command,
    pub usage: String,
    pub related: Vec<Command>,
}

/// Comparison key for command names: lowercase, without the namespace marker and separators.
///
/// `/sc:plan:fast`, `sc:plan:fast`, `plan:fast` and `/plan/fast` all normalize to `planfast`.
pub fn normalize_name(name: &str, namespace: Option<&str>) -> String {
    let lowered = name.trim().to_lowercase();
    let mut rest = lowered.trim_start_matches('/');

    if let Some(ns) = namespace.filter(|ns| !ns.is_empty()) {
        let marker = format!("{}{}", ns.to_lowercase(), SEPARATOR);
        if let Some(stripped) = rest.strip_prefix(marker.as_str()) {
            rest = stripped;
        }
    }

    rest.chars()
        .filter(|c| !COMMAND_SEPARATORS.contains(c))
        .collect()
}

/// Exact lookup by normalized name. A miss falls through to a search for the input's words.
pub fn resolve_command(catalog: &Catalog, input: &str) -> Resolution {
    let namespace = catalog.namespace();
    let wanted = normalize_name(input, namespace);

    let found = catalog
        .commands()
        .find(|command| normalize_name(&command.name, namespace) == wanted);

    let Some(command) = found else {
        let term = input
            .split(COMMAND_SEPARATORS)
            .filter(|part| !part.trim().is_empty())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        let mut result = resolve_search(catalog, &term);
        result.missed_command = Some(input.to_string());
        return Resolution::Search(result);
    };

    let related = catalog
        .commands_in(&command.category)
        .iter()
        .filter(|other| other.name != command.name)
        .take(RELATED_LIMIT)
        .cloned()
        .collect();

    Resolution::Command(CommandResult {
        usage: usage_line(command),
        command: command.clone(),
        related,
    })
}

fn usage_line(command: &Command) -> String {
    match &command.argument_hint {
        Some(hint) => format!("{} {}", command.name, hint),
        None => command.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::format_name;
    use crate::resolve::{fixtures, PresentationType};

    #[test]
    fn normalize_strips_namespace_and_separators() {
        assert_eq!(normalize_name("/sc:plan:fast", Some("sc")), "planfast");
        assert_eq!(normalize_name("sc:plan:fast", Some("sc")), "planfast");
        assert_eq!(normalize_name("plan:fast", Some("sc")), "planfast");
        assert_eq!(normalize_name("/Plan/Fast", None), "planfast");
    }

    #[test]
    fn normalize_is_idempotent() {
        for name in ["/sc:plan:fast", "/sc:sc:deep", "plan/fast", "/help", ":"] {
            let once = normalize_name(name, Some("sc"));
            assert_eq!(normalize_name(&once, Some("sc")), once);
        }
    }

    #[test]
    fn exact_match_returns_details() {
        let Resolution::Command(result) = resolve_command(&fixtures::catalog(), "plan:fast")
        else {
            panic!("expected command details");
        };
        assert_eq!(result.command.name, "/plan:fast");
        assert_eq!(result.usage, "/plan:fast");
        let related: Vec<_> = result.related.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(related, vec!["/plan:full", "/plan:review", "/plan:split"]);
    }

    #[test]
    fn related_excludes_self_and_keeps_catalog_order() {
        let Resolution::Command(result) = resolve_command(&fixtures::catalog(), "fix:login")
        else {
            panic!("expected command details");
        };
        let related: Vec<_> = result.related.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(related, vec!["/fix:bug", "/fix:types"]);
    }

    #[test]
    fn namespaced_catalog_matches_bare_input() {
        let mut command = fixtures::command("plan:fast", "plan", "Quick plan");
        command.name = format_name("plan:fast", Some("sc"));
        command.argument_hint = Some("<goal>".to_string());
        let catalog = Catalog::from_commands(vec![command], Some("sc"));

        let Resolution::Command(result) = resolve_command(&catalog, "plan:fast") else {
            panic!("expected command details");
        };
        assert_eq!(result.command.name, "/sc:plan:fast");
        assert_eq!(result.usage, "/sc:plan:fast <goal>");
        assert!(result.related.is_empty());
    }

    #[test]
    fn miss_cascades_to_search() {
        let resolution = resolve_command(&fixtures::catalog(), "doesnotexist");
        assert_eq!(resolution.presentation(), PresentationType::Search);

        let Resolution::Search(result) = resolution else {
            unreachable!();
        };
        assert_eq!(result.missed_command.as_deref(), Some("doesnotexist"));
        assert_eq!(result.total, 0);
    }

    #[test]
    fn miss_searches_with_separators_as_spaces() {
        let Resolution::Search(result) = resolve_command(&fixtures::catalog(), "/login") else {
            panic!("expected search fallback");
        };
        assert_eq!(result.term, "login");
        assert_eq!(result.total, 1);
        assert_eq!(result.matches[0].name, "/fix:login");
    }
}
