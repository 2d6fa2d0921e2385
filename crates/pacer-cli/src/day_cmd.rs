//! `pacer day` command: the daily dashboard.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use pacer_core::schedule::{date_set, day_progress, resolve_selected, tasks_for_day};
use pacer_store::store::ProjectStore;

use crate::resolve;

/// Show one day's schedule for the active project.
///
/// With no date argument, today is shown when the roadmap has tasks for
/// it; otherwise (and for an explicit date with no tasks) the selection
/// falls back to the earliest available day.
pub fn run_day(store: &ProjectStore, date_arg: Option<&str>) -> Result<()> {
    let projects = store.load()?;
    let idx = resolve::active_project(store, &projects, None)?;
    let project = &projects[idx];

    let dates = date_set(&project.tasks);
    if dates.is_empty() {
        println!("Project {:?} has no tasks yet.", project.name);
        return Ok(());
    }

    let requested: NaiveDate = match date_arg {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid date {s:?} (expected YYYY-MM-DD)"))?,
        None => chrono::Local::now().date_naive(),
    };
    // Non-empty date set, so a selection always resolves.
    let Some(selected) = resolve_selected(&dates, Some(requested)) else {
        return Ok(());
    };
    if date_arg.is_some() && requested != selected {
        println!("(no tasks on that day; showing {selected})");
    }

    println!("{} -- {}", project.name, project.goal);
    println!();

    // Day selector strip.
    let strip: Vec<String> = dates
        .iter()
        .map(|d| {
            if *d == selected {
                format!("[{}]", d.format("%m-%d"))
            } else {
                format!(" {} ", d.format("%m-%d"))
            }
        })
        .collect();
    println!("{}", strip.join(" "));
    println!();

    println!(
        "{} -- progress {}%",
        selected.format("%A, %B %e"),
        day_progress(&project.tasks, selected)
    );

    for task in tasks_for_day(&project.tasks, selected) {
        let marker = if task.is_complete() { "[x]" } else { "[ ]" };
        let short_id: String = task.id.to_string().chars().take(8).collect();

        let mut tags = vec![task.kind.to_string()];
        if task.is_buffer_task {
            tags.push("buffer".to_string());
        }

        print!("  {marker} {short_id}  {}", task.content);
        if !task.is_complete() && task.completion_percent > 0 {
            print!(" ({}%)", task.completion_percent);
        }
        print!("  [{}]", tags.join(", "));
        if !task.notes.is_empty() {
            print!("  ~ {}", task.notes);
        }
        println!();
    }

    Ok(())
}
