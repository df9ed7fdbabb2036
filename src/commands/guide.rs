use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use cmdguide::defaults::{self, CmdguideConfig};
use cmdguide::{guide, present, resolve, Catalog, Category, Query, Resolution};

use super::CmdResult;

#[derive(Args, Debug, Default)]
pub struct GuideArgs {
    /// Category, command, task description or search keyword (omit for an overview)
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Commands directory (overrides commands_dir from the config file)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (default: ~/.config/cmdguide/cmdguide.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List category keys, one per line, instead of answering a query
    #[arg(long)]
    pub list_categories: bool,
}

impl GuideArgs {
    /// Positional words joined into one query string.
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}

// ============================================================================
// Output Types
// ============================================================================

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum GuideOutput {
    #[serde(rename = "guide.resolve")]
    Resolve { query: Query, result: Resolution },

    #[serde(rename = "guide.categories")]
    Categories { categories: Vec<Category> },
}

// ============================================================================
// Public API
// ============================================================================

/// Markdown output mode: marker line + rendered guide, or the bare category list.
pub fn run_markdown(args: GuideArgs) -> CmdResult<String> {
    let catalog = load(&args)?;

    if args.list_categories {
        let keys: Vec<&str> = catalog.category_keys().collect();
        return Ok((format!("{}\n", keys.join("\n")), 0));
    }

    let resolution = guide::answer(&catalog, &args.query_string());
    Ok((present::render(&resolution), 0))
}

/// JSON output mode: the structured resolver result.
pub fn run(args: GuideArgs) -> CmdResult<GuideOutput> {
    let catalog = load(&args)?;

    if args.list_categories {
        return Ok((
            GuideOutput::Categories {
                categories: catalog.categories(),
            },
            0,
        ));
    }

    let input = args.query_string();
    let query = Query::classify(&input, catalog.category_keys());
    let result = resolve::resolve(&catalog, &query);
    Ok((GuideOutput::Resolve { query, result }, 0))
}

fn load(args: &GuideArgs) -> cmdguide::Result<Catalog> {
    let config = load_config(args)?;
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| config.commands_root());
    guide::load_catalog(&root, &config)
}

fn load_config(args: &GuideArgs) -> cmdguide::Result<CmdguideConfig> {
    match &args.config {
        Some(path) => defaults::load_config_from(path),
        None => Ok(defaults::load_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("plan")).unwrap();
        fs::write(
            dir.path().join("plan/fast.md"),
            "---\ndescription: Quick plan\n---\n",
        )
        .unwrap();
        dir
    }

    fn args_for(dir: &tempfile::TempDir, query: &[&str]) -> GuideArgs {
        let config = dir.path().join("cmdguide.json");
        fs::write(&config, "{}").unwrap();
        GuideArgs {
            query: query.iter().map(|q| q.to_string()).collect(),
            root: Some(dir.path().to_path_buf()),
            config: Some(config),
            list_categories: false,
        }
    }

    #[test]
    fn query_words_are_joined() {
        let args = GuideArgs {
            query: vec!["fix".to_string(), "a".to_string(), "bug".to_string()],
            ..GuideArgs::default()
        };
        assert_eq!(args.query_string(), "fix a bug");
    }

    #[test]
    fn markdown_mode_starts_with_marker() {
        let dir = fixture();
        let (content, exit_code) = run_markdown(args_for(&dir, &["plan:fast"])).unwrap();
        assert_eq!(exit_code, 0);
        assert!(content.starts_with("PRESENTATION_TYPE=command\n\n"));
    }

    #[test]
    fn json_mode_tags_command_and_presentation() {
        let dir = fixture();
        let (output, _) = run(args_for(&dir, &[])).unwrap();
        let value = serde_json::to_value(output).unwrap();
        assert_eq!(value["command"], "guide.resolve");
        assert_eq!(value["query"]["intent"], "overview");
        assert_eq!(value["result"]["presentation"], "overview");
    }

    #[test]
    fn list_categories_prints_keys() {
        let dir = fixture();
        let mut args = args_for(&dir, &[]);
        args.list_categories = true;
        let (content, _) = run_markdown(args).unwrap();
        assert!(content.lines().any(|line| line == "plan"));
        assert!(content.lines().any(|line| line == "fix"));
    }

    #[test]
    fn invalid_config_file_fails() {
        let dir = fixture();
        let mut args = args_for(&dir, &[]);
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "[").unwrap();
        args.config = Some(bad);
        assert!(run_markdown(args).is_err());
    }

    #[test]
    fn wildcard_extension_in_config_exits_with_validation_code() {
        let dir = fixture();
        let mut args = args_for(&dir, &["plan"]);
        let config = dir.path().join("wild.json");
        fs::write(&config, r#"{"extension":"*"}"#).unwrap();
        args.config = Some(config);

        let err = run_markdown(args).unwrap_err();
        assert_eq!(err.code, cmdguide::ErrorCode::ValidationInvalidArgument);
        assert_eq!(crate::output::exit_code_for_error(err.code), 2);
    }
}
