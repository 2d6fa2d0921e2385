//! Persistence round-trips against a tempdir-rooted store.

use chrono::NaiveDate;
use uuid::Uuid;

use pacer_store::models::{Priority, Project, ProjectDraft, Task, TaskKind};
use pacer_store::store::ProjectStore;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn sample_project(name: &str) -> Project {
    let draft = ProjectDraft {
        name: name.to_owned(),
        goal: "Ship it".to_owned(),
        background: String::new(),
        priority: Priority::OnTime,
        start_date: date("2024-01-01"),
        end_date: date("2024-01-10"),
        daily_work_time: 2.0,
    };
    let mut project = Project::from_draft(Uuid::new_v4(), &draft);
    project.tasks = vec![
        Task {
            id: Uuid::new_v4(),
            project_id: project.id,
            date: date("2024-01-01"),
            content: "Outline".to_owned(),
            completion_percent: 40,
            notes: "see notebook".to_owned(),
            order_index: 0,
            is_buffer_task: false,
            kind: TaskKind::Normal,
        },
        Task {
            id: Uuid::new_v4(),
            project_id: project.id,
            date: date("2024-01-01"),
            content: "Daily check".to_owned(),
            completion_percent: 100,
            notes: String::new(),
            order_index: 1,
            is_buffer_task: true,
            kind: TaskKind::Check,
        },
    ];
    project
}

#[test]
fn save_and_load_roundtrip() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ProjectStore::open(dir.path()).unwrap();

    let projects = vec![sample_project("First"), sample_project("Second")];
    store.save(&projects).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, projects);
}

#[test]
fn save_overwrites_previous_collection() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ProjectStore::open(dir.path()).unwrap();

    store.save(&[sample_project("First")]).unwrap();
    let replacement = vec![sample_project("Second")];
    store.save(&replacement).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Second");
}

#[test]
fn delete_project_removes_only_that_project() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ProjectStore::open(dir.path()).unwrap();

    let keep = sample_project("Keep");
    let drop = sample_project("Drop");
    store.save(&[keep.clone(), drop.clone()]).unwrap();

    assert!(store.delete_project(drop.id).unwrap());

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, keep.id);
    // The surviving project's tasks are untouched.
    assert_eq!(loaded[0].tasks, keep.tasks);
}

#[test]
fn delete_project_clears_last_active_marker() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ProjectStore::open(dir.path()).unwrap();

    let project = sample_project("Current");
    store.save(std::slice::from_ref(&project)).unwrap();
    store.save_last_active(project.id).unwrap();

    assert!(store.delete_project(project.id).unwrap());
    assert_eq!(store.load_last_active(), None);
}

#[test]
fn delete_unknown_project_reports_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ProjectStore::open(dir.path()).unwrap();

    store.save(&[sample_project("Only")]).unwrap();
    assert!(!store.delete_project(Uuid::new_v4()).unwrap());
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn reopening_the_store_sees_prior_writes() {
    let dir = tempfile::TempDir::new().unwrap();
    let project = sample_project("Persistent");

    {
        let store = ProjectStore::open(dir.path()).unwrap();
        store.save(std::slice::from_ref(&project)).unwrap();
        store.save_last_active(project.id).unwrap();
    }

    let store = ProjectStore::open(dir.path()).unwrap();
    assert_eq!(store.load().unwrap(), vec![project.clone()]);
    assert_eq!(store.load_last_active(), Some(project.id));
}
