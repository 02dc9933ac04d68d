use clap::ArgMatches;

use crate::config::load_config;
use crate::error::WellTuneResult;
use crate::formatting::session::{print_trace, TraceStep};
use crate::logging::log_info;
use crate::session::{SessionSnapshot, SignInPolicy, Theme, ViewCommand, ViewController};

/// Parse every operation before any of them is applied
pub fn parse_operations<'a, I>(ops: I) -> WellTuneResult<Vec<ViewCommand>>
where
    I: IntoIterator<Item = &'a str>,
{
    ops.into_iter().map(str::parse).collect()
}

/// Apply `commands` to a fresh session and record the snapshot after each
pub fn run_simulation(
    commands: &[ViewCommand],
    theme: Theme,
    policy: SignInPolicy,
) -> (SessionSnapshot, Vec<TraceStep>) {
    let mut controller = ViewController::new(theme, policy);
    let initial = controller.snapshot();
    let steps = commands
        .iter()
        .map(|&command| {
            let result = controller.process(command);
            TraceStep::new(command, result.changed, result.snapshot)
        })
        .collect();
    (initial, steps)
}

pub fn handle_simulate(matches: &ArgMatches) -> WellTuneResult<()> {
    let config = load_config()?;
    let ops = matches
        .get_many::<String>("ops")
        .map(|values| values.map(String::as_str).collect::<Vec<_>>())
        .unwrap_or_default();
    let commands = parse_operations(ops)?;

    let policy = if matches.get_flag("require-onboarding") {
        SignInPolicy::RequireOnboarding
    } else {
        config.sign_in_policy()
    };
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple");

    log_info(&format!("Simulating {} operations with {:?}", commands.len(), policy));
    let (initial, steps) = run_simulation(&commands, config.theme, policy);
    print_trace(&initial, &steps, format)
}
