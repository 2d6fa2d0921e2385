//! Roadmap materialization: turn a generated day plan into a project's
//! flat task collection.
//!
//! Materialization is pure: it builds and returns a fully-populated
//! [`Project`] without touching storage, so a failed generation attempt
//! creates nothing and the caller only persists after full success.

use uuid::Uuid;

use pacer_store::models::{Project, ProjectDraft, Task};

use super::plan_format::DayPlan;

/// Materialize a generated day plan into a new project.
///
/// The project gets a fresh id, and every planned task becomes a [`Task`]
/// with a fresh id, zero completion, empty notes, and an `order_index`
/// equal to its position within its day. The generator's in-day emission
/// order is preserved; ordering across days carries no meaning.
pub fn materialize(draft: &ProjectDraft, plan: &[DayPlan]) -> Project {
    let mut project = Project::from_draft(Uuid::new_v4(), draft);

    let mut tasks = Vec::with_capacity(plan.iter().map(|d| d.tasks.len()).sum());
    for day in plan {
        for (idx, planned) in day.tasks.iter().enumerate() {
            tasks.push(Task {
                id: Uuid::new_v4(),
                project_id: project.id,
                date: day.date,
                content: planned.content.clone(),
                completion_percent: 0,
                notes: String::new(),
                order_index: idx as u32,
                is_buffer_task: planned.is_buffer,
                kind: planned.kind,
            });
        }
    }
    project.tasks = tasks;

    tracing::info!(
        project_id = %project.id,
        project_name = %project.name,
        days = plan.len(),
        tasks = project.tasks.len(),
        "materialized roadmap"
    );

    project
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pacer_store::models::{Priority, TaskKind};

    use crate::roadmap::plan_format::PlannedTask;

    fn sample_draft() -> ProjectDraft {
        ProjectDraft {
            name: "HSK 1".to_owned(),
            goal: "Pass the exam".to_owned(),
            background: String::new(),
            priority: Priority::OnTime,
            start_date: "2024-01-01".parse().unwrap(),
            end_date: "2024-01-02".parse().unwrap(),
            daily_work_time: 2.0,
        }
    }

    fn planned(content: &str) -> PlannedTask {
        PlannedTask {
            content: content.to_owned(),
            kind: TaskKind::Normal,
            is_buffer: false,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn indices_restart_per_day_and_project_id_is_shared() {
        let plan = vec![
            DayPlan {
                date: date("2024-01-01"),
                tasks: vec![planned("A"), planned("B")],
            },
            DayPlan {
                date: date("2024-01-02"),
                tasks: vec![planned("C")],
            },
        ];

        let project = materialize(&sample_draft(), &plan);
        assert_eq!(project.tasks.len(), 3);

        let a = &project.tasks[0];
        let b = &project.tasks[1];
        let c = &project.tasks[2];

        assert_eq!((a.content.as_str(), a.order_index), ("A", 0));
        assert_eq!((b.content.as_str(), b.order_index), ("B", 1));
        assert_eq!(a.date, date("2024-01-01"));
        assert_eq!(b.date, date("2024-01-01"));

        assert_eq!((c.content.as_str(), c.order_index), ("C", 0));
        assert_eq!(c.date, date("2024-01-02"));

        assert!(project.tasks.iter().all(|t| t.project_id == project.id));
    }

    #[test]
    fn fresh_tasks_start_clean() {
        let plan = vec![DayPlan {
            date: date("2024-01-01"),
            tasks: vec![PlannedTask {
                content: "Review".to_owned(),
                kind: TaskKind::Review,
                is_buffer: true,
            }],
        }];

        let project = materialize(&sample_draft(), &plan);
        let task = &project.tasks[0];
        assert_eq!(task.completion_percent, 0);
        assert!(task.notes.is_empty());
        assert!(task.is_buffer_task);
        assert_eq!(task.kind, TaskKind::Review);
    }

    #[test]
    fn task_ids_are_unique() {
        let plan = vec![DayPlan {
            date: date("2024-01-01"),
            tasks: (0..50).map(|i| planned(&format!("t{i}"))).collect(),
        }];

        let project = materialize(&sample_draft(), &plan);
        let mut ids: Vec<Uuid> = project.tasks.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn draft_fields_carry_over() {
        let project = materialize(&sample_draft(), &[]);
        assert_eq!(project.name, "HSK 1");
        assert_eq!(project.priority, Priority::OnTime);
        assert!(project.tasks.is_empty());
    }
}
