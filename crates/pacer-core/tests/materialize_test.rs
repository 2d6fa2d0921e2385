//! Materialization of generated day plans into task collections.

use chrono::NaiveDate;

use pacer_core::roadmap::{DayPlan, materialize, parse_day_plans};
use pacer_store::models::{Priority, ProjectDraft, TaskKind};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn sample_draft() -> ProjectDraft {
    ProjectDraft {
        name: "Marathon".to_owned(),
        goal: "Run a marathon".to_owned(),
        background: "Couch to 42k".to_owned(),
        priority: Priority::JustDone,
        start_date: date("2024-01-01"),
        end_date: date("2024-06-01"),
        daily_work_time: 1.0,
    }
}

#[test]
fn two_days_yield_three_tasks_with_per_day_indices() {
    let plan: Vec<DayPlan> = serde_json::from_str(
        r#"[
            {"date": "2024-01-01", "tasks": [{"content": "A"}, {"content": "B"}]},
            {"date": "2024-01-02", "tasks": [{"content": "C"}]}
        ]"#,
    )
    .unwrap();

    let project = materialize(&sample_draft(), &plan);
    assert_eq!(project.tasks.len(), 3);

    let find = |content: &str| {
        project
            .tasks
            .iter()
            .find(|t| t.content == content)
            .unwrap_or_else(|| panic!("missing task {content:?}"))
    };

    assert_eq!(find("A").order_index, 0);
    assert_eq!(find("A").date, date("2024-01-01"));
    assert_eq!(find("B").order_index, 1);
    assert_eq!(find("B").date, date("2024-01-01"));
    assert_eq!(find("C").order_index, 0);
    assert_eq!(find("C").date, date("2024-01-02"));

    assert!(project.tasks.iter().all(|t| t.project_id == project.id));
}

#[test]
fn generator_emission_order_becomes_the_day_order() {
    let plan: Vec<DayPlan> = serde_json::from_str(
        r#"[{"date": "2024-01-01", "tasks": [
            {"content": "first"}, {"content": "second"}, {"content": "third"}
        ]}]"#,
    )
    .unwrap();

    let project = materialize(&sample_draft(), &plan);
    let contents: Vec<&str> = project.tasks.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
    let indices: Vec<u32> = project.tasks.iter().map(|t| t.order_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn wire_defaults_flow_through_materialization() {
    let plan = parse_day_plans(
        r#"[{"date": "2024-01-01", "tasks": [
            {"content": "plain"},
            {"content": "slack", "type": "review", "isBuffer": true}
        ]}]"#,
    )
    .unwrap();

    let project = materialize(&sample_draft(), &plan);
    assert_eq!(project.tasks[0].kind, TaskKind::Normal);
    assert!(!project.tasks[0].is_buffer_task);
    assert_eq!(project.tasks[1].kind, TaskKind::Review);
    assert!(project.tasks[1].is_buffer_task);
}

#[test]
fn two_materializations_never_share_identities() {
    let plan = parse_day_plans(r#"[{"date": "2024-01-01", "tasks": [{"content": "A"}]}]"#).unwrap();

    let first = materialize(&sample_draft(), &plan);
    let second = materialize(&sample_draft(), &plan);

    assert_ne!(first.id, second.id);
    assert_ne!(first.tasks[0].id, second.tasks[0].id);
}
