// crates/add_props/src/main.rs

use add_props::{build_cli, exit_code, status_line, summary_line, AppConfig, EXIT_CONFIG_ERROR};
use env_logger::Env;
use std::process::exit;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}

fn main() {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches);
    init_logging(config.verbose);
    log::debug!("{:?}", config);

    let dry_run = config.dry_run;
    let report = match add_props::execute_with(&config, |entry| {
        println!("{}", status_line(entry, dry_run));
    }) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit(EXIT_CONFIG_ERROR);
        }
    };

    println!("{}", summary_line(&report));
    exit(exit_code(&report));
}
