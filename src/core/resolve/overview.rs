use serde::Serialize;

use crate::catalog::{Catalog, Category};

pub const QUICK_START: &[&str] = &[
    "`<category>` opens a category guide, e.g. `fix`",
    "`<command>` shows command details, e.g. `plan:fast`",
    "`<what you want to do>` recommends commands, e.g. `fix a login bug`",
    "`<keyword>` searches names and descriptions",
];

#[derive(Debug, Clone, Serialize)]
pub struct OverviewResult {
    pub total_commands: usize,
    pub category_count: usize,
    pub quick_start: &'static [&'static str],
    pub categories: Vec<Category>,
}

/// Registered categories without commands stay resolvable but are left out of the summary.
pub fn resolve_overview(catalog: &Catalog) -> OverviewResult {
    let categories: Vec<Category> = catalog
        .categories()
        .into_iter()
        .filter(|category| category.count > 0)
        .collect();
    OverviewResult {
        total_commands: catalog.len(),
        category_count: categories.len(),
        quick_start: QUICK_START,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::fixtures;

    #[test]
    fn counts_commands_and_categories() {
        let overview = resolve_overview(&fixtures::catalog());
        assert_eq!(overview.total_commands, 9);
        assert_eq!(overview.category_count, overview.categories.len());

        let plan = overview.categories.iter().find(|c| c.key == "plan").unwrap();
        assert_eq!(plan.count, 5);
        assert_eq!(plan.display_name, "Plan");
    }

    #[test]
    fn empty_registered_categories_are_not_listed() {
        let overview = resolve_overview(&fixtures::catalog());
        let keys: Vec<_> = overview.categories.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["core", "fix", "plan"]);
        assert_eq!(overview.category_count, 3);
    }

    #[test]
    fn categories_are_sorted() {
        let overview = resolve_overview(&fixtures::catalog());
        let keys: Vec<_> = overview.categories.iter().map(|c| c.key.clone()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn empty_catalog_still_resolves() {
        let overview = resolve_overview(&Catalog::default());
        assert_eq!(overview.total_commands, 0);
        assert_eq!(overview.category_count, 0);
        assert!(!overview.quick_start.is_empty());
    }
}
