//! Command catalog discovery.
//!
//! Walks a commands directory, reads each document's header block and keeps the documents that
//! declare a `description`. Layout decides naming:
//!
//! - `<root>/deploy.md`          -> `/deploy`, category `core`
//! - `<root>/plan/fast.md`       -> `/plan:fast`, category `plan`
//! - `<root>/plan/deep/full.md`  -> `/plan:deep:full`, category `plan`
//!
//! When the namespace marker directory exists under the root, names become `/<prefix>:plan:fast`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component as PathComponent, Path, PathBuf};
use std::sync::LazyLock;

use heck::ToTitleCase;
use regex::Regex;
use serde::Serialize;

use crate::defaults::NamespaceConfig;
use crate::metadata;
use crate::registry;

pub const CORE_CATEGORY: &str = "core";
pub const SEPARATOR: char = ':';

// Leading run of symbols that are neither letters, digits nor whitespace.
static DECORATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\p{L}\p{N}\s]+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_hint: Option<String>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub key: String,
    pub display_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: BTreeMap<String, Vec<Command>>,
    keys: BTreeSet<String>,
    namespace: Option<String>,
}

impl Catalog {
    /// Scan `root` for `*.<extension>` documents. A missing root yields an empty catalog.
    pub fn build(root: &Path, extension: &str, namespace: Option<&str>) -> Self {
        let mut groups: BTreeMap<String, Vec<Command>> = BTreeMap::new();

        for path in documents(root, extension) {
            if let Some(command) = load_command(root, &path, namespace) {
                groups
                    .entry(command.category.clone())
                    .or_default()
                    .push(command);
            }
        }

        Self::from_groups(groups, namespace)
    }

    /// Assemble a catalog from already-built commands.
    pub fn from_commands(commands: Vec<Command>, namespace: Option<&str>) -> Self {
        let mut groups: BTreeMap<String, Vec<Command>> = BTreeMap::new();
        for command in commands {
            groups
                .entry(command.category.clone())
                .or_default()
                .push(command);
        }
        Self::from_groups(groups, namespace)
    }

    fn from_groups(mut groups: BTreeMap<String, Vec<Command>>, namespace: Option<&str>) -> Self {
        for commands in groups.values_mut() {
            commands.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let keys = groups
            .keys()
            .cloned()
            .chain(registry::guide_keys().map(str::to_string))
            .collect();

        Self {
            groups,
            keys,
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// All category keys: those with commands plus those declared in the guide registry.
    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Case-insensitive key lookup returning the canonical key.
    pub fn find_category(&self, input: &str) -> Option<&str> {
        let wanted = input.trim().to_lowercase();
        self.category_keys().find(|key| *key == wanted)
    }

    pub fn category(&self, key: &str) -> Option<Category> {
        let key = self.keys.get(key)?;
        Some(Category {
            key: key.clone(),
            display_name: display_name(key),
            count: self.commands_in(key).len(),
        })
    }

    pub fn categories(&self) -> Vec<Category> {
        self.category_keys()
            .filter_map(|key| self.category(key))
            .collect()
    }

    /// Commands of one category in name order. Unknown or empty categories yield an empty slice.
    pub fn commands_in(&self, key: &str) -> &[Command] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every command, category by category, in catalog order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.groups.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Namespace prefix in effect for `root`: set only when the marker directory exists.
pub fn detect_namespace(root: &Path, config: &NamespaceConfig) -> Option<String> {
    if config.prefix.is_empty() || config.marker_dir.is_empty() {
        return None;
    }
    root.join(&config.marker_dir)
        .is_dir()
        .then(|| config.prefix.clone())
}

/// Public command name: `/` + optional `<namespace>:` + identifier.
pub fn format_name(identifier: &str, namespace: Option<&str>) -> String {
    match namespace.filter(|ns| !ns.is_empty()) {
        Some(ns) => format!("/{}{}{}", ns, SEPARATOR, identifier),
        None => format!("/{}", identifier),
    }
}

/// Strip decorative leading symbols (emoji, bullets, arrows) and surrounding whitespace.
pub fn clean_description(raw: &str) -> String {
    DECORATION.replace(raw.trim(), "").trim().to_string()
}

/// Title-cased category name for display (`code-review` -> `Code Review`).
pub fn display_name(key: &str) -> String {
    key.to_title_case()
}

fn documents(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        extension
    );

    match glob::glob(&pattern) {
        Ok(paths) => paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect(),
        Err(e) => {
            log_status!("catalog", "Invalid scan pattern {}: {}", pattern, e);
            Vec::new()
        }
    }
}

/// Turn one document into a command, or `None` when it is not a command document.
fn load_command(root: &Path, path: &Path, namespace: Option<&str>) -> Option<Command> {
    let relative = path.strip_prefix(root).ok()?;
    let (identifier, category) = identify(relative)?;

    let meta = metadata::extract_file(path);
    let raw_description = meta.get("description").map(|d| d.trim()).unwrap_or("");
    if raw_description.is_empty() {
        log_status!("catalog", "Skipping {} (no description)", relative.display());
        return None;
    }

    Some(Command {
        name: format_name(&identifier, namespace),
        description: clean_description(raw_description),
        category,
        argument_hint: meta
            .get("argument-hint")
            .filter(|hint| !hint.is_empty())
            .cloned(),
        source: relative.to_string_lossy().into_owned(),
    })
}

/// Identifier and category for a path relative to the root.
fn identify(relative: &Path) -> Option<(String, String)> {
    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .filter_map(|c| match c {
            PathComponent::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let stem = relative.file_stem()?.to_string_lossy().into_owned();
    if stem.is_empty() {
        return None;
    }

    let category = match segments.first() {
        Some(first) => first.to_lowercase(),
        None => CORE_CATEGORY.to_string(),
    };

    segments.push(stem);
    Some((segments.join(&SEPARATOR.to_string()), category))
}
