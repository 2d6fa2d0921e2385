//! The external roadmap generator: wire types, adapter trait, prompt
//! construction, and the subprocess-backed implementation.

pub mod cli_adapter;
pub mod prompt;
pub mod trait_def;
pub mod types;

pub use cli_adapter::CliGenerator;
pub use trait_def::RoadmapGenerator;
pub use types::{Attachment, FeasibilityOption, FeasibilityReport, OptionKind};
