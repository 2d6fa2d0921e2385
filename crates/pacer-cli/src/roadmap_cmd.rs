//! `pacer roadmap` subcommands: the full-schedule overview and bulk edits.
//!
//! Edits go through the editor model's working copy; each CLI invocation
//! is one session that commits on success, so a failed resolution leaves
//! the stored roadmap untouched.

use anyhow::Result;

use pacer_core::editor::RoadmapEditor;
use pacer_store::models::TaskKind;
use pacer_store::store::ProjectStore;

use crate::resolve;

/// Print the entire roadmap grouped by day.
pub fn run_show(store: &ProjectStore) -> Result<()> {
    let projects = store.load()?;
    let idx = resolve::active_project(store, &projects, None)?;
    let project = &projects[idx];

    println!("{} -- full roadmap", project.name);

    let editor = RoadmapEditor::new(project.tasks.clone());
    let grouped = editor.grouped();
    if grouped.is_empty() {
        println!("  (no tasks)");
        return Ok(());
    }

    for (date, bucket) in grouped {
        println!();
        println!("{}", date.format("%A, %B %e"));
        for task in bucket {
            let marker = if task.is_complete() { "[x]" } else { "[ ]" };
            let short_id: String = task.id.to_string().chars().take(8).collect();
            println!("  {marker} {short_id}  {}  [{}]", task.content, task.kind);
        }
    }

    Ok(())
}

/// Edit a task's content and/or kind through an editor session.
pub fn run_edit(
    store: &ProjectStore,
    task_ref: &str,
    content: Option<&str>,
    kind: Option<&str>,
) -> Result<()> {
    if content.is_none() && kind.is_none() {
        anyhow::bail!("nothing to edit; pass --content and/or --kind");
    }

    let mut projects = store.load()?;
    let idx = resolve::active_project(store, &projects, None)?;
    let task_id = resolve::find_task(&projects[idx], task_ref)?;

    let mut editor = RoadmapEditor::new(projects[idx].tasks.clone());
    if let Some(content) = content {
        editor.edit_content(task_id, content)?;
    }
    if let Some(kind) = kind {
        let kind = kind
            .parse::<TaskKind>()
            .map_err(|e| anyhow::anyhow!("{e} (expected normal, review, or check)"))?;
        editor.set_kind(task_id, kind)?;
    }

    projects[idx].tasks = editor.commit();
    store.save(&projects)?;

    println!("Roadmap updated.");
    Ok(())
}

/// Delete a task from the roadmap through an editor session.
pub fn run_delete(store: &ProjectStore, task_ref: &str) -> Result<()> {
    let mut projects = store.load()?;
    let idx = resolve::active_project(store, &projects, None)?;
    let task_id = resolve::find_task(&projects[idx], task_ref)?;

    let mut editor = RoadmapEditor::new(projects[idx].tasks.clone());
    editor.delete(task_id)?;

    projects[idx].tasks = editor.commit();
    store.save(&projects)?;

    println!("Task deleted from the roadmap.");
    Ok(())
}
