//! JSON format types for generated day plans.
//!
//! These types map directly to the generator's wire format and are
//! deserialized via `serde` + `serde_json`. Field names mirror that
//! contract (`type`, `isBuffer`), which is why they carry renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pacer_store::models::TaskKind;

/// One day's entry in a generated roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day bucket the tasks belong to.
    pub date: NaiveDate,
    /// Task entries in the order the generator emitted them. That order
    /// becomes the day's `order_index` sequence at materialization.
    #[serde(default)]
    pub tasks: Vec<PlannedTask>,
}

/// A single task entry within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedTask {
    pub content: String,
    #[serde(default, rename = "type")]
    pub kind: TaskKind,
    #[serde(default, rename = "isBuffer")]
    pub is_buffer: bool,
}
