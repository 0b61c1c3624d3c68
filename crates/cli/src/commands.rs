//! Headless subcommands. Each one resolves against the same navigation and
//! route model the TUI uses and renders its answer as pretty JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use trackchain_types::{NavKey, NavRow, NavState, NavTable, RouteClassifier, ScreenId};
use trackchain_util::{ResolvedConfig, load_nav_table};

#[derive(Debug, Parser)]
#[command(name = "trackchain", version, about = "TrackChain supply-chain dashboard")]
pub struct Cli {
    /// Configuration file (YAML, or JSON by extension)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Match route tokens anywhere in the path instead of by whole segment
    #[arg(long, global = true)]
    pub substring_match: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the visible navigation rows for a route
    Nav(NavArgs),
    /// Print the highlighted menu entry for each screen
    Classify(ClassifyArgs),
    /// Check a navigation table
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct NavArgs {
    /// Route to resolve; defaults to the configured initial path
    #[arg(long)]
    pub path: Option<String>,

    /// Render the collapsed (icon-only) rail
    #[arg(long)]
    pub collapsed: bool,

    /// Expand a parent entry
    #[arg(long = "open", value_name = "KEY")]
    pub open: Vec<NavKey>,

    /// Collapse a parent entry that is open by default
    #[arg(long = "closed", value_name = "KEY")]
    pub closed: Vec<NavKey>,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Route to classify; omitted means no route information
    #[arg(long)]
    pub path: Option<String>,

    /// Only report this screen
    #[arg(long)]
    pub screen: Option<ScreenId>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Flat list of navigation entries; defaults to the configured table
    #[arg(long, value_name = "FILE")]
    pub nav_table: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct NavReport<'a> {
    path: &'a str,
    screen: ScreenId,
    active: NavKey,
    collapsed: bool,
    rows: Vec<NavRow<'a>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Classification {
    screen: ScreenId,
    active: NavKey,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    source: String,
    entries: usize,
    expandable: Vec<NavKey>,
}

fn to_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize report")
}

pub fn nav(config: &ResolvedConfig, args: &NavArgs) -> Result<String> {
    let path = args.path.as_deref().unwrap_or(&config.initial_path);
    let screen = ScreenId::from_path(path);
    let active = RouteClassifier::new(config.route_matching).classify(screen, Some(path));

    let initially_open = config
        .open_parents
        .iter()
        .chain(&args.open)
        .copied()
        .filter(|key| !args.closed.contains(key));
    let state = NavState::new(&config.table, initially_open);

    to_json(&NavReport {
        path,
        screen,
        active,
        collapsed: args.collapsed,
        rows: state.visible_rows(&config.table, active, args.collapsed),
    })
}

pub fn classify(config: &ResolvedConfig, args: &ClassifyArgs) -> Result<String> {
    let classifier = RouteClassifier::new(config.route_matching);
    let classification = |screen: ScreenId| Classification {
        screen,
        active: classifier.classify(screen, args.path.as_deref()),
    };
    match args.screen {
        Some(screen) => to_json(&classification(screen)),
        None => to_json(&ScreenId::ALL.map(classification)),
    }
}

pub fn validate(config: &ResolvedConfig, args: &ValidateArgs) -> Result<String> {
    let (table, source) = match &args.nav_table {
        Some(path) => {
            let table = load_nav_table(path).with_context(|| format!("validate {}", path.display()))?;
            (table, path.display().to_string())
        }
        None => {
            let source = config
                .source
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "built-in".to_string());
            (config.table.clone(), source)
        }
    };
    to_json(&summarize(&table, source))
}

fn summarize(table: &NavTable, source: String) -> ValidationReport {
    ValidationReport {
        source,
        entries: table.len(),
        expandable: table.expandable_roots().collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::Value;
    use trackchain_types::MatchMode;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("trackchain").chain(args.iter().copied())).expect("valid arguments")
    }

    fn nav_keys(report: &str) -> Vec<String> {
        let value: Value = serde_json::from_str(report).unwrap();
        value["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["entry"]["key"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn no_subcommand_launches_the_tui() {
        let cli = parse(&["--substring-match"]);
        assert!(cli.command.is_none());
        assert!(cli.substring_match);
    }

    #[test]
    fn unknown_nav_keys_are_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["trackchain", "nav", "--open", "alerts"]);
        assert!(result.is_err());
    }

    #[test]
    fn nav_shows_default_open_children_and_honours_closed() {
        let config = ResolvedConfig::default();
        let Some(Command::Nav(args)) = parse(&["nav"]).command else { panic!("nav command") };
        let keys = nav_keys(&nav(&config, &args).unwrap());
        assert_eq!(keys[..3], ["dashboard", "manage", "batches"]);

        let Some(Command::Nav(args)) = parse(&["nav", "--closed", "manage"]).command else {
            panic!("nav command")
        };
        let keys = nav_keys(&nav(&config, &args).unwrap());
        assert!(!keys.iter().any(|key| key == "batches"));
    }

    #[test]
    fn collapsed_nav_keeps_the_active_branch_visible() {
        let config = ResolvedConfig::default();
        let Some(Command::Nav(args)) = parse(&["nav", "--collapsed", "--path", "/(tabs)/manage"]).command else {
            panic!("nav command")
        };
        let report: Value = serde_json::from_str(&nav(&config, &args).unwrap()).unwrap();
        assert_eq!(report["screen"], "manage");
        assert_eq!(report["active"], "manage");
        let rows = report["rows"].as_array().unwrap();
        assert!(rows.iter().all(|row| row["show_label"] == false));
        assert!(rows.iter().any(|row| row["entry"]["key"] == "batches"));
    }

    #[test]
    fn classify_reports_every_screen_or_just_one() {
        let config = ResolvedConfig::default();
        let Some(Command::Classify(args)) = parse(&["classify"]).command else { panic!("classify command") };
        let all: Vec<Value> = serde_json::from_str(&classify(&config, &args).unwrap()).unwrap();
        assert_eq!(all.len(), ScreenId::ALL.len());

        let Some(Command::Classify(args)) = parse(&["classify", "--screen", "qr", "--path", "/(tabs)/qr"]).command
        else {
            panic!("classify command")
        };
        let one: Value = serde_json::from_str(&classify(&config, &args).unwrap()).unwrap();
        assert_eq!(one["active"], "qr");
    }

    #[test]
    fn substring_mode_changes_classification() {
        let config = ResolvedConfig {
            route_matching: MatchMode::Substring,
            ..ResolvedConfig::default()
        };
        let args = ClassifyArgs {
            path: Some("/(tabs)/manage-packages".to_string()),
            screen: Some(ScreenId::Dashboard),
        };
        let report: Value = serde_json::from_str(&classify(&config, &args).unwrap()).unwrap();
        assert_eq!(report["active"], "manage");
    }

    #[test]
    fn validate_reports_the_builtin_table_and_rejects_bad_files() {
        let config = ResolvedConfig::default();
        let report: Value =
            serde_json::from_str(&validate(&config, &ValidateArgs { nav_table: None }).unwrap()).unwrap();
        assert_eq!(report["source"], "built-in");
        assert_eq!(report["expandable"], serde_json::json!(["manage"]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nav.yaml");
        fs::write(&path, "- { key: batches, label: Batches, icon: briefcase-outline, parent: dashboard }\n").unwrap();
        let error = validate(&config, &ValidateArgs { nav_table: Some(path) }).unwrap_err();
        assert!(format!("{error:#}").contains("unknown parent"));
    }
}
