//! Roadmap handling: generator day-plan format, validation, and
//! materialization into a project's task collection.

pub mod materialize;
pub mod parser;
pub mod plan_format;

pub use materialize::materialize;
pub use parser::{PlanFormatError, parse_day_plans, validate};
pub use plan_format::{DayPlan, PlannedTask};
