//! Daily scheduling view model.
//!
//! Pure derivations over a project's flat task collection plus the
//! operations of the daily dashboard: full-record update, completion
//! toggle, push-to-next-day, and same-day reorder. Nothing here performs
//! I/O; every function either reads a snapshot or returns updated task
//! records for the persistence layer to store.
//!
//! Derived values (date set, daily list, progress) are total functions of
//! the task collection and are safe to recompute on every read.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use pacer_store::models::Task;

/// Errors from daily-schedule operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// `push_to_next_day` on a task already on the roadmap's last day.
    #[error("no further day exists in the roadmap after {0}")]
    NoLaterDay(NaiveDate),

    #[error("task {0} not found in the collection")]
    UnknownTask(Uuid),

    #[error("index {index} out of range for a day of {len} tasks")]
    IndexOutOfRange { index: usize, len: usize },

    /// `reorder_day` received tasks from more than one date bucket.
    #[error("reorder input mixes dates {0} and {1}; only one day may participate")]
    MixedBuckets(NaiveDate, NaiveDate),
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// The distinct dates present across the collection, ascending.
///
/// This set drives day-selector navigation and `push_to_next_day`.
pub fn date_set(tasks: &[Task]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = tasks.iter().map(|t| t.date).collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Resolve the selected day against the available date set.
///
/// Keeps `selected` if it is still present; otherwise silently falls back
/// to the earliest available date (orphaned selections recover without
/// surfacing an error). `None` when the collection has no tasks at all.
pub fn resolve_selected(dates: &[NaiveDate], selected: Option<NaiveDate>) -> Option<NaiveDate> {
    match selected {
        Some(day) if dates.contains(&day) => Some(day),
        _ => dates.first().copied(),
    }
}

/// The selected day's tasks, ascending by `order_index`.
pub fn tasks_for_day(tasks: &[Task], date: NaiveDate) -> Vec<Task> {
    let mut day: Vec<Task> = tasks.iter().filter(|t| t.date == date).cloned().collect();
    day.sort_by_key(|t| t.order_index);
    day
}

/// Mean completion percentage over the day's tasks, rounded to the nearest
/// integer. Zero for a day with no tasks.
pub fn day_progress(tasks: &[Task], date: NaiveDate) -> u8 {
    let mut count: u32 = 0;
    let mut total: u32 = 0;
    for task in tasks.iter().filter(|t| t.date == date) {
        count += 1;
        total += u32::from(task.completion_percent);
    }
    if count == 0 {
        return 0;
    }
    ((f64::from(total) / f64::from(count)).round()) as u8
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Replace the stored task matching `updated.id` with `updated`.
///
/// Full-record overwrite: the caller carries over every field it does not
/// mean to change. Applying the same record twice is a no-op.
pub fn apply_update(tasks: &mut [Task], updated: Task) -> Result<(), ScheduleError> {
    match tasks.iter_mut().find(|t| t.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            Ok(())
        }
        None => Err(ScheduleError::UnknownTask(updated.id)),
    }
}

/// Apply a batch of updated records, touching only the ids present in the
/// batch. Used for reorder write-back so unrelated tasks keep unsaved
/// state untouched.
pub fn apply_batch(tasks: &mut [Task], batch: Vec<Task>) -> Result<(), ScheduleError> {
    for updated in batch {
        apply_update(tasks, updated)?;
    }
    Ok(())
}

/// Binary completion toggle: 100 becomes 0, anything else becomes 100.
///
/// Partial progress does not round back: a task at 45% toggles to 100%,
/// and toggling again returns it to 0%.
pub fn toggle_complete(task: &Task) -> Task {
    let mut updated = task.clone();
    updated.completion_percent = if task.is_complete() { 0 } else { 100 };
    updated
}

/// Move a task to the next date in the derived date set.
///
/// "Next" means the next entry in the sorted date set, not the next
/// calendar day -- tasks hop to the next day that actually has work
/// scheduled. The moved task is appended at the end of the target bucket.
/// A task on the last date is rejected with [`ScheduleError::NoLaterDay`];
/// the operation never wraps around or creates a new bucket.
pub fn push_to_next_day(tasks: &[Task], task_id: Uuid) -> Result<Task, ScheduleError> {
    let task = tasks
        .iter()
        .find(|t| t.id == task_id)
        .ok_or(ScheduleError::UnknownTask(task_id))?;

    let dates = date_set(tasks);
    // The task's own date is always a member of the derived set.
    let pos = dates.iter().position(|d| *d == task.date).unwrap_or(0);

    let Some(&next) = dates.get(pos + 1) else {
        return Err(ScheduleError::NoLaterDay(task.date));
    };

    let mut updated = task.clone();
    updated.date = next;
    updated.order_index = tasks
        .iter()
        .filter(|t| t.date == next)
        .map(|t| t.order_index + 1)
        .max()
        .unwrap_or(0);
    Ok(updated)
}

/// Reorder one day's task list: remove the task at `from` and reinsert it
/// at `to` (elements between the two positions shift by one), then
/// reassign each task's `order_index` to its new position.
///
/// The input must be a single day's list; the returned batch is written
/// back atomically via [`apply_batch`].
pub fn reorder_day(
    day_tasks: Vec<Task>,
    from: usize,
    to: usize,
) -> Result<Vec<Task>, ScheduleError> {
    let len = day_tasks.len();
    if from >= len {
        return Err(ScheduleError::IndexOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(ScheduleError::IndexOutOfRange { index: to, len });
    }
    if let Some(first) = day_tasks.first() {
        if let Some(stray) = day_tasks.iter().find(|t| t.date != first.date) {
            return Err(ScheduleError::MixedBuckets(first.date, stray.date));
        }
    }

    let mut day = day_tasks;
    let moved = day.remove(from);
    day.insert(to, moved);
    for (idx, task) in day.iter_mut().enumerate() {
        task.order_index = idx as u32;
    }
    Ok(day)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
