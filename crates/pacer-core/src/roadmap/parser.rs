//! Day-plan parsing with validation.
//!
//! Parses generator output into a `Vec<DayPlan>` and validates:
//! - The roadmap has at least one day.
//! - No date appears twice (each day is one independent bucket).

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use super::plan_format::DayPlan;

/// Errors that can occur while parsing or validating a generated roadmap.
#[derive(Debug, Error)]
pub enum PlanFormatError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("generated roadmap contains no days")]
    Empty,

    #[error("date {0} appears more than once in the generated roadmap")]
    DuplicateDate(NaiveDate),
}

/// Parse and validate a generator response body.
pub fn parse_day_plans(content: &str) -> Result<Vec<DayPlan>, PlanFormatError> {
    let plan: Vec<DayPlan> = serde_json::from_str(content)?;
    validate(&plan)?;
    Ok(plan)
}

/// Validate an already-parsed roadmap.
pub fn validate(plan: &[DayPlan]) -> Result<(), PlanFormatError> {
    if plan.is_empty() {
        return Err(PlanFormatError::Empty);
    }

    let mut seen = HashSet::new();
    for day in plan {
        if !seen.insert(day.date) {
            return Err(PlanFormatError::DuplicateDate(day.date));
        }
    }

    Ok(())
}
