use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Buffer-allocation strategy passed through to the roadmap generator.
///
/// The core never interprets this beyond forwarding it; the generator uses
/// it to decide how much slack to plan into the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Tight schedule with a 10% review reserve and a daily check task.
    OnTime,
    /// Near-full packing with a 2% review reserve and a daily check task.
    InTime,
    /// Relaxed pacing; the deadline may stretch if needed.
    JustDone,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OnTime => "on_time",
            Self::InTime => "in_time",
            Self::JustDone => "just_done",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_time" => Ok(Self::OnTime),
            "in_time" => Ok(Self::InTime),
            "just_done" => Ok(Self::JustDone),
            other => Err(PriorityParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Priority`] string.
#[derive(Debug, Clone)]
pub struct PriorityParseError(pub String);

impl fmt::Display for PriorityParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid priority: {:?}", self.0)
    }
}

impl std::error::Error for PriorityParseError {}

// ---------------------------------------------------------------------------

/// Kind of a scheduled task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// A regular work item.
    #[default]
    Normal,
    /// A review slot reserved by the generator's buffer strategy.
    Review,
    /// A daily progress check.
    Check,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Review => "review",
            Self::Check => "check",
        };
        f.write_str(s)
    }
}

impl FromStr for TaskKind {
    type Err = TaskKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "review" => Ok(Self::Review),
            "check" => Ok(Self::Check),
            other => Err(TaskKindParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`TaskKind`] string.
#[derive(Debug, Clone)]
pub struct TaskKindParseError(pub String);

impl fmt::Display for TaskKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid task kind: {:?}", self.0)
    }
}

impl std::error::Error for TaskKindParseError {}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single scheduled task within a project's roadmap.
///
/// `order_index` is zero-based and contiguous among the tasks sharing the
/// same `(project_id, date)` bucket; it defines the display and processing
/// order within that day. Ordering across different days is meaningless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    /// Owning project. Back-reference only; never used to mutate the project.
    pub project_id: Uuid,
    /// Day bucket this task belongs to.
    pub date: NaiveDate,
    pub content: String,
    /// 0..=100; 100 means complete.
    pub completion_percent: u8,
    #[serde(default)]
    pub notes: String,
    pub order_index: u32,
    /// Set once at materialization from generator output, never mutated.
    #[serde(default)]
    pub is_buffer_task: bool,
    #[serde(default)]
    pub kind: TaskKind,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.completion_percent == 100
    }
}

/// User-entered project parameters, before any roadmap exists.
///
/// A draft is not persisted and carries no identity; it only becomes a
/// [`Project`] once a roadmap has been generated for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub goal: String,
    pub background: String,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Positive hours-per-day budget.
    pub daily_work_time: f64,
}

/// A project and its materialized roadmap.
///
/// Tasks live inside the project record, so deleting a project structurally
/// removes every task it owns. An unmaterialized project simply has an
/// empty task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub goal: String,
    pub background: String,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_work_time: f64,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Promote a draft to a project under a fresh identity, with no tasks.
    pub fn from_draft(id: Uuid, draft: &ProjectDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            goal: draft.goal.clone(),
            background: draft.background.clone(),
            priority: draft.priority,
            start_date: draft.start_date,
            end_date: draft.end_date,
            daily_work_time: draft.daily_work_time,
            tasks: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
