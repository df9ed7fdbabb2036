use serde::Serialize;

use crate::catalog::{Catalog, Command};
use crate::registry::{self, WorkflowStep};

const WORKFLOW_STEPS: usize = 3;
const TOP_CATEGORIES: usize = 2;
const COMMANDS_PER_CATEGORY: usize = 2;
const COMMAND_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct TaskScore {
    pub category: String,
    pub score: usize,
    pub matched: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskResult {
    pub query: String,
    /// Categories with at least one keyword hit, best first. Empty means no recommendation.
    pub scores: Vec<TaskScore>,
    pub workflow: &'static [WorkflowStep],
    pub commands: Vec<Command>,
    pub tip: Option<&'static str>,
    /// Filled only when nothing scored.
    pub categories: Vec<String>,
}

impl TaskResult {
    pub fn top_category(&self) -> Option<&str> {
        self.scores.first().map(|s| s.category.as_str())
    }
}

/// Score keyword-table categories by substring hits, best first. Ties keep table order.
pub fn score_task(input: &str) -> Vec<TaskScore> {
    let lowered = input.to_lowercase();

    let mut scores: Vec<TaskScore> = registry::task_keywords()
        .iter()
        .filter_map(|(category, keywords)| {
            let matched: Vec<&'static str> = keywords
                .iter()
                .copied()
                .filter(|keyword| lowered.contains(keyword))
                .collect();
            (!matched.is_empty()).then(|| TaskScore {
                category: category.to_string(),
                score: matched.len(),
                matched,
            })
        })
        .collect();

    // sort_by is stable
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}

pub fn resolve_task(catalog: &Catalog, input: &str) -> TaskResult {
    let scores = score_task(input);

    let Some(top) = scores.first() else {
        return TaskResult {
            query: input.to_string(),
            scores,
            workflow: &[],
            commands: Vec::new(),
            tip: None,
            categories: super::available_categories(catalog),
        };
    };

    let guide = registry::guide(&top.category);
    let workflow = guide
        .map(|g| &g.workflow[..g.workflow.len().min(WORKFLOW_STEPS)])
        .unwrap_or(&[]);
    let tip = guide.and_then(|g| g.tip);

    let commands = scores
        .iter()
        .take(TOP_CATEGORIES)
        .flat_map(|score| {
            catalog
                .commands_in(&score.category)
                .iter()
                .take(COMMANDS_PER_CATEGORY)
        })
        .take(COMMAND_LIMIT)
        .cloned()
        .collect();

    TaskResult {
        query: input.to_string(),
        workflow,
        tip,
        commands,
        scores,
        categories: Vec::new(),
    }
}
