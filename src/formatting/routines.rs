use colored::*;

use super::theme::{SemanticColor, ThemedColorize};
use super::utils::{format_count, pluralize, truncate};
use crate::error::WellTuneResult;
use crate::models::Routine;

pub fn print_routines(routines: &[&Routine], format: &str) -> WellTuneResult<()> {
    if routines.is_empty() {
        println!("{}", "No routines found.".dimmed());
        return Ok(());
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(routines)?);
        }
        "table" => {
            println!("{}", "─".repeat(96).dimmed());
            println!(
                "{:<4} {:<28} {:<14} {:<8} {:<13} {:>7} {:>8}",
                "ID".bold(),
                "Title".bold(),
                "Category".bold(),
                "Length".bold(),
                "Difficulty".bold(),
                "Likes".bold(),
                "Joined".bold()
            );
            println!("{}", "─".repeat(96).dimmed());
            for routine in routines {
                println!(
                    "{:<4} {:<28} {:<14} {:<8} {:<13} {:>7} {:>8}",
                    routine.id.to_string().with_theme(SemanticColor::Accent),
                    truncate(routine.title, 28),
                    routine.category.label().with_theme(routine.category.into()),
                    format!("{} min", routine.duration_minutes),
                    routine.difficulty.label(),
                    format_count(routine.likes),
                    format_count(routine.participants)
                );
            }
            println!("{}", "─".repeat(96).dimmed());
        }
        _ => {
            for routine in routines {
                print_routine_line(routine);
            }
            println!();
            println!("{}", pluralize(routines.len(), "routine", "routines").dimmed());
        }
    }
    Ok(())
}

fn print_routine_line(routine: &Routine) {
    println!(
        "{} {} {}",
        routine.icon,
        routine.title.bold(),
        format!("[{}]", routine.category).with_theme(routine.category.into())
    );
    println!("   {}", routine.description.with_theme(SemanticColor::Muted));
    println!(
        "   {} · {} · ♥ {} · {} joined",
        format!("{} min", routine.duration_minutes).cyan(),
        routine.difficulty.label(),
        format_count(routine.likes),
        format_count(routine.participants)
    );
}
