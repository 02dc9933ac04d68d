use colored::*;
use serde::Serialize;

use super::theme::{SemanticColor, ThemedColorize};
use crate::error::WellTuneResult;
use crate::session::{SessionSnapshot, ViewCommand};

/// One applied command and the snapshot it produced
#[derive(Debug, Clone, Serialize)]
pub struct TraceStep {
    pub command: String,
    pub changed: bool,
    pub snapshot: SessionSnapshot,
}

impl TraceStep {
    pub fn new(command: ViewCommand, changed: bool, snapshot: SessionSnapshot) -> Self {
        Self {
            command: command.to_string(),
            changed,
            snapshot,
        }
    }
}

#[derive(Debug, Serialize)]
struct Trace<'a> {
    initial: &'a SessionSnapshot,
    steps: &'a [TraceStep],
}

pub fn describe_snapshot(snapshot: &SessionSnapshot) -> String {
    format!(
        "screen={} authenticated={} onboarding_pending={} theme={}",
        snapshot.screen,
        snapshot.authenticated,
        snapshot.onboarding_pending,
        snapshot.theme.label()
    )
}

pub fn print_trace(initial: &SessionSnapshot, steps: &[TraceStep], format: &str) -> WellTuneResult<()> {
    if format == "json" {
        let trace = Trace { initial, steps };
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "start".with_theme(SemanticColor::Header).bold(),
        describe_snapshot(initial)
    );
    for step in steps {
        let marker = if step.changed {
            "→".with_theme(SemanticColor::Success)
        } else {
            "·".with_theme(SemanticColor::Muted)
        };
        let detail = if step.changed {
            describe_snapshot(&step.snapshot).normal()
        } else {
            "(no change)".dimmed()
        };
        println!("{} {:<24} {}", marker, step.command.bold(), detail);
    }
    Ok(())
}
