use serde::Serialize;

/// Characters that mark an input as a command reference (`plan:fast`, `/deploy`).
pub const COMMAND_SEPARATORS: [char; 2] = [':', '/'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Overview,
    Category,
    Command,
    Task,
    Search,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Overview => "overview",
            Intent::Category => "category",
            Intent::Command => "command",
            Intent::Task => "task",
            Intent::Search => "search",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified user query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub intent: Intent,
    pub input: String,
}

impl Query {
    pub fn classify<'a>(raw: &str, categories: impl IntoIterator<Item = &'a str>) -> Self {
        let input = raw.trim().to_string();
        Self {
            intent: classify(&input, categories),
            input,
        }
    }
}

/// Pick the intent for `input`. Checks run from most to least specific and the first hit wins.
pub fn classify<'a>(input: &str, categories: impl IntoIterator<Item = &'a str>) -> Intent {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Intent::Overview;
    }

    let lowered = trimmed.to_lowercase();
    if categories
        .into_iter()
        .any(|key| key.to_lowercase() == lowered)
    {
        return Intent::Category;
    }

    if trimmed.contains(COMMAND_SEPARATORS) {
        return Intent::Command;
    }

    if trimmed.split_whitespace().nth(1).is_some() {
        return Intent::Task;
    }

    Intent::Search
}
