use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;

use welltune::commands::{handle_config, handle_routines, handle_simulate};
use welltune::config::load_config;
use welltune::constants::APP_TAGLINE;
use welltune::error::WellTuneResult;
use welltune::formatting::set_theme;
use welltune::interactive::run_interactive_mode;
use welltune::logging::{get_log_file_path, init_logging, log_error};

fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .help("Output format")
        .value_parser(["simple", "table", "json"])
        .default_value("simple")
}

fn build_cli() -> Command {
    Command::new("welltune")
        .about(APP_TAGLINE)
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("run").about("Start the terminal UI (default)"))
        .subcommand(
            Command::new("simulate")
                .about("Apply navigation operations to a fresh session and print each snapshot")
                .arg(
                    Arg::new("ops")
                        .help("sign-in, complete-onboarding, select-routine, exit-routine-detail, navigate:<dashboard|discover|profile>, toggle-theme")
                        .num_args(1..)
                        .required(true),
                )
                .arg(
                    Arg::new("require-onboarding")
                        .long("require-onboarding")
                        .help("Start with the onboarding survey pending")
                        .action(ArgAction::SetTrue),
                )
                .arg(format_arg().value_parser(["simple", "json"])),
        )
        .subcommand(
            Command::new("routines")
                .about("List the routines of the Discover feed")
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .help("Only routines of this category"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Print the current settings")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .help("Theme to start with")
                        .value_parser(["light", "dark"]),
                )
                .arg(
                    Arg::new("onboarding")
                        .long("onboarding")
                        .help("Show the onboarding survey after signing in")
                        .value_parser(["on", "off"]),
                ),
        )
}

fn run(matches: &ArgMatches) -> WellTuneResult<()> {
    match matches.subcommand() {
        Some(("simulate", sub)) => handle_simulate(sub),
        Some(("routines", sub)) => handle_routines(sub),
        Some(("config", sub)) => handle_config(sub),
        _ => {
            let config = load_config()?;
            run_interactive_mode(&config)
        }
    }
}

fn main() {
    let _ = init_logging();

    let matches = build_cli().get_matches();

    if let Ok(config) = load_config() {
        set_theme(config.theme);
    }

    if let Err(e) = run(&matches) {
        log_error(&format!("{}", e));
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(path) = get_log_file_path() {
            eprintln!("{}", format!("Log file: {}", path.display()).dimmed());
        }
        process::exit(1);
    }
}
