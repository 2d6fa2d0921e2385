//! `pacer task` subcommands and `pacer move`: mutations on single tasks.

use anyhow::{Result, bail};
use uuid::Uuid;

use pacer_core::schedule::{
    ScheduleError, apply_batch, apply_update, push_to_next_day, reorder_day, tasks_for_day,
    toggle_complete,
};
use pacer_store::models::{Project, Task, TaskKind};
use pacer_store::store::ProjectStore;

use crate::resolve;

/// Toggle a task between complete and incomplete.
pub fn run_toggle(store: &ProjectStore, task_ref: &str) -> Result<()> {
    let (mut projects, idx, task_id) = load_with_task(store, task_ref)?;
    let task = get_task(&projects[idx], task_id)?;

    let updated = toggle_complete(&task);
    let now_complete = updated.is_complete();
    apply_update(&mut projects[idx].tasks, updated)?;
    store.save(&projects)?;

    println!(
        "Task marked {}.",
        if now_complete { "complete" } else { "incomplete" }
    );
    Ok(())
}

/// Set a task's completion percentage (clamped to 0..=100 and snapped to
/// the slider's step of 5).
pub fn run_progress(store: &ProjectStore, task_ref: &str, percent: i64) -> Result<()> {
    let (mut projects, idx, task_id) = load_with_task(store, task_ref)?;
    let mut task = get_task(&projects[idx], task_id)?;

    let clamped = percent.clamp(0, 100) as u8;
    let snapped = (clamped + 2) / 5 * 5;
    task.completion_percent = snapped;
    apply_update(&mut projects[idx].tasks, task)?;
    store.save(&projects)?;

    println!("Progress set to {snapped}%.");
    Ok(())
}

/// Replace a task's notes.
pub fn run_note(store: &ProjectStore, task_ref: &str, text: &str) -> Result<()> {
    let (mut projects, idx, task_id) = load_with_task(store, task_ref)?;
    let mut task = get_task(&projects[idx], task_id)?;

    task.notes = text.to_owned();
    apply_update(&mut projects[idx].tasks, task)?;
    store.save(&projects)?;

    println!("Notes updated.");
    Ok(())
}

/// Edit a task's content and/or kind in place.
pub fn run_edit(
    store: &ProjectStore,
    task_ref: &str,
    content: Option<&str>,
    kind: Option<&str>,
) -> Result<()> {
    if content.is_none() && kind.is_none() {
        bail!("nothing to edit; pass --content and/or --kind");
    }

    let (mut projects, idx, task_id) = load_with_task(store, task_ref)?;
    let mut task = get_task(&projects[idx], task_id)?;

    if let Some(content) = content {
        task.content = content.to_owned();
    }
    if let Some(kind) = kind {
        task.kind = kind
            .parse::<TaskKind>()
            .map_err(|e| anyhow::anyhow!("{e} (expected normal, review, or check)"))?;
    }
    apply_update(&mut projects[idx].tasks, task)?;
    store.save(&projects)?;

    println!("Task updated.");
    Ok(())
}

/// Push a task to the next scheduled day.
pub fn run_push(store: &ProjectStore, task_ref: &str) -> Result<()> {
    let (mut projects, idx, task_id) = load_with_task(store, task_ref)?;

    match push_to_next_day(&projects[idx].tasks, task_id) {
        Ok(updated) => {
            let new_date = updated.date;
            apply_update(&mut projects[idx].tasks, updated)?;
            store.save(&projects)?;
            println!("Task pushed to {new_date}.");
            Ok(())
        }
        Err(ScheduleError::NoLaterDay(date)) => {
            // A notice, not a failure: the roadmap simply ends here.
            println!("No further day exists in the roadmap after {date}; task left in place.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Move a task to a new position within its day (0-based).
pub fn run_move(store: &ProjectStore, task_ref: &str, to: usize) -> Result<()> {
    let (mut projects, idx, task_id) = load_with_task(store, task_ref)?;
    let task = get_task(&projects[idx], task_id)?;

    let day = tasks_for_day(&projects[idx].tasks, task.date);
    let from = day
        .iter()
        .position(|t| t.id == task_id)
        .unwrap_or_default();

    let reordered = reorder_day(day, from, to)?;
    apply_batch(&mut projects[idx].tasks, reordered)?;
    store.save(&projects)?;

    println!("Task moved to position {to} on {}.", task.date);
    Ok(())
}

/// Load the collection and resolve a task reference in the active project.
fn load_with_task(
    store: &ProjectStore,
    task_ref: &str,
) -> Result<(Vec<Project>, usize, Uuid)> {
    let projects = store.load()?;
    let idx = resolve::active_project(store, &projects, None)?;
    let task_id = resolve::find_task(&projects[idx], task_ref)?;
    Ok((projects, idx, task_id))
}

fn get_task(project: &Project, task_id: Uuid) -> Result<Task> {
    project
        .tasks
        .iter()
        .find(|t| t.id == task_id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("task {task_id} not found"))
}
