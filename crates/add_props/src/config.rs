// crates/add_props/src/config.rs

use clap::{Arg, ArgAction, ArgMatches, Command};
use collect_targets::{TargetSources, DEFAULT_ICONS_DIR};
use std::env;
use std::path::PathBuf;

/// Environment override for the directory the built-in icon list lives in.
pub const ICONS_DIR_ENV: &str = "ADD_PROPS_ICONS_DIR";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub paths: Vec<PathBuf>,
    pub paths_file: Option<PathBuf>,
    pub scan_dir: Option<PathBuf>,
    pub icons_dir: PathBuf,
    pub excludes: Vec<String>,
    pub dry_run: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Reads the parsed arguments. `--icons-dir` wins over the environment,
    /// which wins over the default location.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let icons_dir = matches
            .get_one::<String>("icons_dir")
            .cloned()
            .or_else(|| env::var(ICONS_DIR_ENV).ok())
            .unwrap_or_else(|| DEFAULT_ICONS_DIR.to_string());

        Self {
            paths: matches
                .get_many::<String>("paths")
                .unwrap_or_default()
                .map(PathBuf::from)
                .collect(),
            paths_file: matches.get_one::<String>("paths_file").map(PathBuf::from),
            scan_dir: matches.get_one::<String>("scan_dir").map(PathBuf::from),
            icons_dir: PathBuf::from(icons_dir),
            excludes: matches
                .get_many::<String>("exclude")
                .unwrap_or_default()
                .map(|s| s.to_string())
                .collect(),
            dry_run: matches.get_flag("dry_run"),
            verbose: matches.get_flag("verbose"),
        }
    }

    pub fn target_sources(&self) -> TargetSources {
        TargetSources {
            paths: self.paths.clone(),
            paths_file: self.paths_file.clone(),
            scan_dir: self.scan_dir.clone(),
            icons_dir: self.icons_dir.clone(),
            excludes: self.excludes.clone(),
        }
    }
}

pub fn build_cli() -> Command {
    Command::new("add_props")
        .version("0.1.0")
        .about("Inserts the {...props} spread into the root <svg> tag of generated icon components")
        .arg(
            Arg::new("paths")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Icon files to patch (defaults to the built-in icon list)"),
        )
        .arg(
            Arg::new("paths_file")
                .long("paths-file")
                .num_args(1)
                .help("Read additional target paths from a file, one per line"),
        )
        .arg(
            Arg::new("scan_dir")
                .long("scan-dir")
                .num_args(1)
                .help("Patch every .tsx file found under this directory"),
        )
        .arg(
            Arg::new("icons_dir")
                .long("icons-dir")
                .num_args(1)
                .help("Directory holding the built-in icon list (env: ADD_PROPS_ICONS_DIR)"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip file(s) whose basename match the given name"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Report what would change without writing any file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}
