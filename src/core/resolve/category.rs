use serde::Serialize;

use crate::catalog::{Catalog, Category, Command};
use crate::registry::{self, WorkflowStep};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    /// Canonical key on a match, the raw input on a miss.
    pub query: String,
    /// `None` when the query names no known category.
    pub category: Option<Category>,
    pub workflow: &'static [WorkflowStep],
    pub commands: Vec<Command>,
    pub tip: Option<&'static str>,
    /// Filled only on a miss.
    pub available: Vec<String>,
}

pub fn resolve_category(catalog: &Catalog, input: &str) -> CategoryResult {
    let Some(category) = catalog
        .find_category(input)
        .and_then(|key| catalog.category(key))
    else {
        return CategoryResult {
            query: input.to_string(),
            category: None,
            workflow: &[],
            commands: Vec::new(),
            tip: None,
            available: super::available_categories(catalog),
        };
    };

    let guide = registry::guide(&category.key);
    CategoryResult {
        query: category.key.clone(),
        workflow: guide.map(|g| g.workflow).unwrap_or(&[]),
        tip: guide.and_then(|g| g.tip),
        commands: catalog.commands_in(&category.key).to_vec(),
        category: Some(category),
        available: Vec::new(),
    }
}
