//! Fixed lookup tables: per-category workflow guides and the task keyword table.
//!
//! The two tables are independent. A category may have a guide without keywords and vice versa.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkflowStep {
    pub label: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Guide {
    pub key: &'static str,
    pub workflow: &'static [WorkflowStep],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<&'static str>,
}

const fn step(label: &'static str, action: &'static str) -> WorkflowStep {
    WorkflowStep { label, action }
}

static GUIDES: &[Guide] = &[
    Guide {
        key: "core",
        workflow: &[
            step("Orient", "Run the help command with no arguments for an overview"),
            step("Pick", "Open a category guide to see related commands"),
            step("Run", "Invoke the command with its argument hint"),
        ],
        tip: Some("Core commands live directly in the commands directory."),
    },
    Guide {
        key: "plan",
        workflow: &[
            step("Scope", "Describe the goal and its constraints"),
            step("Draft", "Generate a plan and break it into tasks"),
            step("Review", "Check the plan for gaps before coding"),
            step("Execute", "Work through the tasks in order"),
        ],
        tip: Some("Use the fast variant for small changes and the full planner for features."),
    },
    Guide {
        key: "fix",
        workflow: &[
            step("Reproduce", "Capture the failing behavior and its error output"),
            step("Isolate", "Narrow the failure down to a single cause"),
            step("Patch", "Apply the smallest change that removes the cause"),
            step("Verify", "Rerun the reproduction and the test suite"),
        ],
        tip: Some("Always start from a reliable reproduction."),
    },
    Guide {
        key: "review",
        workflow: &[
            step("Diff", "Collect the changes under review"),
            step("Inspect", "Check correctness, naming and error handling"),
            step("Report", "Summarize findings by severity"),
        ],
        tip: Some("Review small diffs often rather than large ones rarely."),
    },
    Guide {
        key: "test",
        workflow: &[
            step("Target", "Choose the behavior to cover"),
            step("Write", "Add tests for the expected and edge cases"),
            step("Run", "Execute the suite and read failures carefully"),
        ],
        tip: None,
    },
    Guide {
        key: "docs",
        workflow: &[
            step("Survey", "Find undocumented or stale areas"),
            step("Write", "Document usage before internals"),
            step("Link", "Cross-reference related pages"),
        ],
        tip: Some("Examples are the most-read part of any page."),
    },
    Guide {
        key: "git",
        workflow: &[
            step("Stage", "Review and stage related changes together"),
            step("Commit", "Write a message that states what changed"),
            step("Push", "Push the branch and open a pull request"),
        ],
        tip: Some("Keep one logical change per commit."),
    },
];

/// Task keyword table. Declaration order is the tie-break order for equal scores.
static TASK_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "plan",
        &["plan", "design", "architect", "roadmap", "feature", "scope", "break down"],
    ),
    (
        "fix",
        &["fix", "bug", "error", "broken", "crash", "debug", "fail", "login", "issue"],
    ),
    (
        "review",
        &["review", "audit", "check", "quality", "feedback", "pull request"],
    ),
    (
        "test",
        &["test", "coverage", "spec", "assert", "tdd", "unit"],
    ),
    (
        "docs",
        &["doc", "readme", "explain", "comment", "guide", "write up"],
    ),
    (
        "git",
        &["git", "commit", "branch", "merge", "push", "rebase"],
    ),
];

/// Look up the workflow guide for a category key.
pub fn guide(key: &str) -> Option<&'static Guide> {
    GUIDES.iter().find(|g| g.key == key)
}

/// Category keys declared in the guide registry, in declaration order.
pub fn guide_keys() -> impl Iterator<Item = &'static str> {
    GUIDES.iter().map(|g| g.key)
}

/// Task keyword table entries in declaration order.
pub fn task_keywords() -> &'static [(&'static str, &'static [&'static str])] {
    TASK_KEYWORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_lookup_by_key() {
        let fix = guide("fix").unwrap();
        assert_eq!(fix.workflow[0].label, "Reproduce");
        assert!(fix.tip.is_some());
        assert!(guide("nope").is_none());
    }

    #[test]
    fn guide_keys_are_unique_lowercase() {
        let keys: Vec<_> = guide_keys().collect();
        for key in &keys {
            assert_eq!(*key, key.to_lowercase());
            assert_eq!(keys.iter().filter(|k| *k == key).count(), 1);
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for (_, words) in task_keywords() {
            for word in *words {
                assert_eq!(*word, word.to_lowercase());
            }
        }
    }
}
