//! Full-roadmap editor model.
//!
//! A disposable working copy of one project's entire task collection,
//! independent of any selected day. Edits and deletions accumulate in the
//! copy; nothing reaches the project until [`RoadmapEditor::commit`]
//! replaces its whole task collection. Dropping the editor discards every
//! pending change.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use pacer_store::models::{Task, TaskKind};

/// Errors from roadmap-editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("task {0} not found in the working copy")]
    UnknownTask(Uuid),
}

/// Working copy over a project's tasks for bulk editing.
#[derive(Debug, Clone)]
pub struct RoadmapEditor {
    tasks: Vec<Task>,
}

impl RoadmapEditor {
    /// Start an edit session over a snapshot of the project's tasks.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The current working copy, in underlying collection order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Partition the working copy by date, buckets ascending; within a
    /// bucket, tasks keep their relative order as found in the copy.
    pub fn grouped(&self) -> Vec<(NaiveDate, Vec<&Task>)> {
        let mut dates: Vec<NaiveDate> = self.tasks.iter().map(|t| t.date).collect();
        dates.sort_unstable();
        dates.dedup();

        dates
            .into_iter()
            .map(|date| {
                let bucket: Vec<&Task> =
                    self.tasks.iter().filter(|t| t.date == date).collect();
                (date, bucket)
            })
            .collect()
    }

    /// Overwrite one task's content.
    pub fn edit_content(&mut self, id: Uuid, content: &str) -> Result<(), EditorError> {
        let task = self.find_mut(id)?;
        task.content = content.to_owned();
        Ok(())
    }

    /// Overwrite one task's kind.
    pub fn set_kind(&mut self, id: Uuid, kind: TaskKind) -> Result<(), EditorError> {
        let task = self.find_mut(id)?;
        task.kind = kind;
        Ok(())
    }

    /// Remove one task from the working copy.
    pub fn delete(&mut self, id: Uuid) -> Result<(), EditorError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(EditorError::UnknownTask(id));
        }
        Ok(())
    }

    /// Finish the session: the returned collection replaces the project's
    /// entire task collection.
    pub fn commit(self) -> Vec<Task> {
        self.tasks
    }

    fn find_mut(&mut self, id: Uuid) -> Result<&mut Task, EditorError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(EditorError::UnknownTask(id))
    }
}
