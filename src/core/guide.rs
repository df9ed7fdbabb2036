//! One guide invocation: load the catalog, classify the query, resolve it.

use std::fs;
use std::path::Path;

use crate::catalog::{detect_namespace, Catalog};
use crate::defaults::CmdguideConfig;
use crate::error::{Error, Result};
use crate::intent::Query;
use crate::present;
use crate::resolve::{self, Resolution};

/// Build the catalog for `root`. Fails on an invalid extension, a missing root or an empty catalog.
pub fn load_catalog(root: &Path, config: &CmdguideConfig) -> Result<Catalog> {
    config.validate()?;
    if !root.is_dir() {
        return Err(Error::catalog_root_not_found(root.display().to_string()));
    }

    // Canonical form keeps relative-path stripping stable for `.`-style roots.
    let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let namespace = detect_namespace(&root, &config.namespace);
    log_status!(
        "catalog",
        "Scanning {} (namespace: {})",
        root.display(),
        namespace.as_deref().unwrap_or("none")
    );

    let catalog = Catalog::build(&root, config.extension.trim(), namespace.as_deref());
    if catalog.is_empty() {
        return Err(Error::catalog_empty(
            root.display().to_string(),
            config.extension.trim().to_string(),
        ));
    }

    log_status!("catalog", "Loaded {} commands", catalog.len());
    Ok(catalog)
}

/// Classify `input` against the catalog and resolve it. Never fails.
pub fn answer(catalog: &Catalog, input: &str) -> Resolution {
    let query = Query::classify(input, catalog.category_keys());
    log_status!("intent", "'{}' -> {}", query.input, query.intent);
    resolve::resolve(catalog, &query)
}

/// Full run rendered as Markdown with the leading marker line.
pub fn run(root: &Path, config: &CmdguideConfig, input: &str) -> Result<String> {
    let catalog = load_catalog(root, config)?;
    Ok(present::render(&answer(&catalog, input)))
}
