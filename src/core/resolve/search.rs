use serde::Serialize;

use crate::catalog::{Catalog, Command};

/// Maximum number of matches shown. The total is always reported.
pub const SEARCH_LIMIT: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub term: String,
    pub total: usize,
    pub matches: Vec<Command>,
    /// Set when this search is the fallback for an unknown command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_command: Option<String>,
    /// Filled only when nothing matched.
    pub categories: Vec<String>,
}

/// Case-insensitive substring search over names and descriptions, in catalog order.
pub fn resolve_search(catalog: &Catalog, term: &str) -> SearchResult {
    let term = term.trim();
    let needle = term.to_lowercase();

    let hits: Vec<&Command> = catalog
        .commands()
        .filter(|command| {
            command.name.to_lowercase().contains(&needle)
                || command.description.to_lowercase().contains(&needle)
        })
        .collect();

    let total = hits.len();
    SearchResult {
        term: term.to_string(),
        total,
        matches: hits.into_iter().take(SEARCH_LIMIT).cloned().collect(),
        missed_command: None,
        categories: if total == 0 {
            super::available_categories(catalog)
        } else {
            Vec::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::fixtures;

    #[test]
    fn matches_name_or_description_ignoring_case() {
        let result = resolve_search(&fixtures::catalog(), "LOGIN");
        assert_eq!(result.total, 1);

        let result = resolve_search(&fixtures::catalog(), "plan");
        assert_eq!(result.total, 5);
    }

    #[test]
    fn matches_follow_catalog_order() {
        let result = resolve_search(&fixtures::catalog(), "fix");
        let names: Vec<_> = result.matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["/fix:bug", "/fix:login", "/fix:types"]);
    }

    #[test]
    fn matches_span_categories_in_build_order() {
        let commands = vec![
            fixtures::command("plan:draft", "plan", "Draft a release"),
            fixtures::command("ship", "core", "Ship the release"),
            fixtures::command("fix:revert", "fix", "Revert a bad release"),
            fixtures::command("fix:hotfix", "fix", "Patch a release in place"),
        ];
        let catalog = Catalog::from_commands(commands, None);

        let result = resolve_search(&catalog, "release");
        let names: Vec<_> = result.matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["/ship", "/fix:hotfix", "/fix:revert", "/plan:draft"]);
    }

    #[test]
    fn truncates_but_reports_total() {
        let commands = (0..10)
            .map(|i| fixtures::command(&format!("tool{}", i), "core", "Utility"))
            .collect();
        let catalog = Catalog::from_commands(commands, None);

        let result = resolve_search(&catalog, "t");
        assert_eq!(result.total, 10);
        assert_eq!(result.matches.len(), SEARCH_LIMIT);
        assert!(result.categories.is_empty());
    }

    #[test]
    fn no_match_lists_categories() {
        let result = resolve_search(&fixtures::catalog(), "kubernetes");
        assert_eq!(result.total, 0);
        assert!(result.matches.is_empty());
        assert!(result.categories.contains(&"fix".to_string()));
        assert!(result.missed_command.is_none());
    }
}
