//! `pacer projects`, `pacer use`, and `pacer delete`: project management.

use std::io::Write;

use anyhow::{Context, Result};

use pacer_store::store::ProjectStore;

use crate::resolve;

/// List all projects, newest first, marking the active one.
pub fn run_list(store: &ProjectStore) -> Result<()> {
    let projects = store.load()?;
    if projects.is_empty() {
        println!("No projects yet. Run `pacer new` to create one.");
        return Ok(());
    }

    let active = store.load_last_active();

    println!(
        "  {:<38} {:<24} {:<12} {:>7} {:>6}",
        "ID", "NAME", "START", "HOURS/D", "TASKS"
    );
    println!("  {}", "-".repeat(92));

    for project in &projects {
        let marker = if active == Some(project.id) { "*" } else { " " };
        let name_display = if project.name.len() > 22 {
            format!("{}...", &project.name[..19])
        } else {
            project.name.clone()
        };
        println!(
            "{marker} {:<38} {:<24} {:<12} {:>7} {:>6}",
            project.id,
            name_display,
            project.start_date,
            project.daily_work_time,
            project.tasks.len()
        );
    }

    Ok(())
}

/// Switch the active project.
pub fn run_use(store: &ProjectStore, reference: &str) -> Result<()> {
    let projects = store.load()?;
    let idx = resolve::find_project(&projects, reference)?;

    store.save_last_active(projects[idx].id)?;
    println!("Active project: {}", projects[idx].name);
    Ok(())
}

/// Delete a project (and, with it, every one of its tasks).
///
/// Destructive, so gated behind an explicit confirmation unless `--yes`
/// was passed; declining leaves everything unchanged.
pub fn run_delete(store: &ProjectStore, reference: Option<&str>, yes: bool) -> Result<()> {
    let projects = store.load()?;
    let idx = resolve::active_project(store, &projects, reference)?;
    let name = projects[idx].name.clone();
    let task_count = projects[idx].tasks.len();
    let id = projects[idx].id;

    if !yes && !confirm(&format!("Delete project {name:?} and its {task_count} tasks? [y/N] "))? {
        println!("Nothing deleted.");
        return Ok(());
    }

    store.delete_project(id)?;
    println!("Deleted project {name:?}.");
    Ok(())
}

/// Ask a yes/no question on stdin; only an explicit `y`/`yes` confirms.
fn confirm(question: &str) -> Result<bool> {
    print!("{question}");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
