use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Root configuration structure for cmdguide.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmdguideConfig {
    /// Directory scanned for command documents. `~` is expanded.
    #[serde(default = "default_commands_dir")]
    pub commands_dir: String,

    /// File extension (without the dot) of command documents
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub namespace: NamespaceConfig,
}

impl Default for CmdguideConfig {
    fn default() -> Self {
        Self {
            commands_dir: default_commands_dir(),
            extension: default_extension(),
            namespace: NamespaceConfig::default(),
        }
    }
}

/// Commands are published under `/<prefix>:...` when `marker_dir` exists directly under the
/// commands directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceConfig {
    #[serde(default = "default_marker_dir")]
    pub marker_dir: String,

    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            marker_dir: default_marker_dir(),
            prefix: default_prefix(),
        }
    }
}

const EXTENSION_FORBIDDEN: &[char] = &['*', '?', '[', ']', '{', '}', '!', '/', '\\', '.'];

impl CmdguideConfig {
    /// Commands directory with `~` expanded.
    pub fn commands_root(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.commands_dir).into_owned())
    }

    /// Reject an empty extension or one that is not a plain suffix.
    pub fn validate(&self) -> crate::Result<()> {
        let extension = self.extension.trim();
        if extension.is_empty() {
            return Err(
                crate::Error::validation_invalid_argument("extension", "must not be empty")
                    .with_hint("Set \"extension\" in cmdguide.json, e.g. \"md\""),
            );
        }
        if let Some(c) = extension.chars().find(|c| EXTENSION_FORBIDDEN.contains(c)) {
            return Err(crate::Error::validation_invalid_argument(
                "extension",
                format!("'{}' contains '{}'", extension, c),
            )
            .with_hint("Give the bare suffix without dot or wildcards, e.g. \"md\""));
        }
        Ok(())
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_commands_dir() -> String {
    "~/.claude/commands".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_marker_dir() -> String {
    "shared".to_string()
}

fn default_prefix() -> String {
    "sc".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load the global cmdguide.json config, falling back to defaults on any error.
pub fn load_config() -> CmdguideConfig {
    paths::config_file()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| load_config_from(&path).ok())
        .unwrap_or_default()
}

/// Load config from an explicit file. Unlike [`load_config`], failures are reported.
pub fn load_config_from(path: &Path) -> crate::Result<CmdguideConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}
