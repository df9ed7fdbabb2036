//! Query resolution.
//!
//! Each resolver is a pure function of the catalog and the query input. Misses never fail:
//! every resolver has a fallback result, and the command resolver falls through to search.

mod category;
mod command;
mod overview;
mod search;
mod task;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::intent::{Intent, Query};

pub use category::{resolve_category, CategoryResult};
pub use command::{normalize_name, resolve_command, CommandResult};
pub use overview::{resolve_overview, OverviewResult, QUICK_START};
pub use search::{resolve_search, SearchResult, SEARCH_LIMIT};
pub use task::{resolve_task, TaskResult, TaskScore};

/// Tag announced on the first output line so a presentation layer can pick a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationType {
    Overview,
    Category,
    Command,
    Task,
    Search,
}

impl PresentationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationType::Overview => "overview",
            PresentationType::Category => "category",
            PresentationType::Command => "command",
            PresentationType::Task => "task",
            PresentationType::Search => "search",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "presentation", rename_all = "lowercase")]
pub enum Resolution {
    Overview(OverviewResult),
    Category(CategoryResult),
    Command(CommandResult),
    Task(TaskResult),
    Search(SearchResult),
}

impl Resolution {
    pub fn presentation(&self) -> PresentationType {
        match self {
            Resolution::Overview(_) => PresentationType::Overview,
            Resolution::Category(_) => PresentationType::Category,
            Resolution::Command(_) => PresentationType::Command,
            Resolution::Task(_) => PresentationType::Task,
            Resolution::Search(_) => PresentationType::Search,
        }
    }
}

/// Route a classified query to its resolver.
pub fn resolve(catalog: &Catalog, query: &Query) -> Resolution {
    match query.intent {
        Intent::Overview => Resolution::Overview(resolve_overview(catalog)),
        Intent::Category => Resolution::Category(resolve_category(catalog, &query.input)),
        Intent::Command => resolve_command(catalog, &query.input),
        Intent::Task => Resolution::Task(resolve_task(catalog, &query.input)),
        Intent::Search => Resolution::Search(resolve_search(catalog, &query.input)),
    }
}

/// Sorted category keys, used by every "here is what exists" fallback.
pub(crate) fn available_categories(catalog: &Catalog) -> Vec<String> {
    catalog.category_keys().map(str::to_string).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_intent() {
        let catalog = fixtures::catalog();
        let keys: Vec<&str> = catalog.category_keys().collect();

        let cases = [
            ("", PresentationType::Overview),
            ("plan", PresentationType::Category),
            ("plan:fast", PresentationType::Command),
            ("fix a login bug", PresentationType::Task),
            ("quick", PresentationType::Search),
        ];

        for (input, expected) in cases {
            let query = Query::classify(input, keys.iter().copied());
            assert_eq!(resolve(&catalog, &query).presentation(), expected, "{}", input);
        }
    }

    #[test]
    fn resolution_serializes_presentation_tag() {
        let catalog = fixtures::catalog();
        let value =
            serde_json::to_value(Resolution::Overview(resolve_overview(&catalog))).unwrap();
        assert_eq!(value["presentation"], "overview");
        assert_eq!(value["total_commands"], 9);
    }
}
