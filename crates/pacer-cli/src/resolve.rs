//! Project and task reference resolution.
//!
//! Commands accept a full UUID or any unique id prefix; projects may also
//! be referenced by exact name. Ambiguous prefixes are rejected with the
//! candidate list rather than silently picking one.

use anyhow::{Result, bail};
use uuid::Uuid;

use pacer_store::models::Project;
use pacer_store::store::ProjectStore;

/// Resolve a project reference (exact name, UUID, or unique id prefix) to
/// an index into `projects`.
pub fn find_project(projects: &[Project], reference: &str) -> Result<usize> {
    if let Some(idx) = projects.iter().position(|p| p.name == reference) {
        return Ok(idx);
    }

    let matches: Vec<usize> = projects
        .iter()
        .enumerate()
        .filter(|(_, p)| p.id.to_string().starts_with(reference))
        .map(|(idx, _)| idx)
        .collect();

    match matches.as_slice() {
        [only] => Ok(*only),
        [] => bail!("no project matches {reference:?}; run `pacer projects` to list them"),
        many => {
            let candidates: Vec<String> =
                many.iter().map(|&i| projects[i].id.to_string()).collect();
            bail!(
                "project reference {reference:?} is ambiguous; candidates: {}",
                candidates.join(", ")
            )
        }
    }
}

/// Resolve the active project: an explicit reference wins, otherwise the
/// stored last-active marker.
pub fn active_project(
    store: &ProjectStore,
    projects: &[Project],
    reference: Option<&str>,
) -> Result<usize> {
    if let Some(reference) = reference {
        return find_project(projects, reference);
    }

    let last_active = store
        .load_last_active()
        .and_then(|id| projects.iter().position(|p| p.id == id));
    match last_active {
        Some(idx) => Ok(idx),
        None => bail!(
            "no active project; run `pacer use <project>` or pass an explicit project reference"
        ),
    }
}

/// Resolve a task reference (UUID or unique id prefix) within a project.
pub fn find_task(project: &Project, reference: &str) -> Result<Uuid> {
    let matches: Vec<Uuid> = project
        .tasks
        .iter()
        .filter(|t| t.id.to_string().starts_with(reference))
        .map(|t| t.id)
        .collect();

    match matches.as_slice() {
        [only] => Ok(*only),
        [] => bail!(
            "no task matches {reference:?} in project {:?}",
            project.name
        ),
        many => {
            let candidates: Vec<String> = many.iter().map(Uuid::to_string).collect();
            bail!(
                "task reference {reference:?} is ambiguous; candidates: {}",
                candidates.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pacer_store::models::{Priority, ProjectDraft, Task, TaskKind};

    fn draft(name: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_owned(),
            goal: String::new(),
            background: String::new(),
            priority: Priority::OnTime,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            daily_work_time: 1.0,
        }
    }

    fn project_named(name: &str) -> Project {
        Project::from_draft(Uuid::new_v4(), &draft(name))
    }

    fn task_in(project: &Project) -> Task {
        Task {
            id: Uuid::new_v4(),
            project_id: project.id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            content: "x".to_owned(),
            completion_percent: 0,
            notes: String::new(),
            order_index: 0,
            is_buffer_task: false,
            kind: TaskKind::Normal,
        }
    }

    #[test]
    fn exact_name_wins() {
        let projects = vec![project_named("alpha"), project_named("beta")];
        assert_eq!(find_project(&projects, "beta").unwrap(), 1);
    }

    #[test]
    fn unique_id_prefix_resolves() {
        let projects = vec![project_named("alpha"), project_named("beta")];
        let prefix: String = projects[0].id.to_string().chars().take(8).collect();
        assert_eq!(find_project(&projects, &prefix).unwrap(), 0);
    }

    #[test]
    fn unknown_reference_is_an_error() {
        let projects = vec![project_named("alpha")];
        assert!(find_project(&projects, "zzzz").is_err());
    }

    #[test]
    fn task_prefix_resolves_within_the_project() {
        let mut project = project_named("alpha");
        project.tasks = vec![task_in(&project), task_in(&project)];
        let wanted = project.tasks[1].id;
        let prefix: String = wanted.to_string().chars().take(8).collect();
        assert_eq!(find_task(&project, &prefix).unwrap(), wanted);
    }

    #[test]
    fn empty_prefix_is_ambiguous_when_multiple_tasks_exist() {
        let mut project = project_named("alpha");
        project.tasks = vec![task_in(&project), task_in(&project)];
        let err = find_task(&project, "").unwrap_err();
        assert!(err.to_string().contains("ambiguous"));
    }
}
