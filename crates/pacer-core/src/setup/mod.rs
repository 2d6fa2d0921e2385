//! Project setup: the feasibility negotiation protocol.
//!
//! A draft travels through an explicit state machine on its way to
//! becoming a materialized project:
//!
//! ```text
//! drafting             -> checking_feasibility
//! checking_feasibility -> generating            (feasible, or check failed)
//! checking_feasibility -> presenting_options    (infeasible)
//! presenting_options   -> generating            (one option applied)
//! presenting_options   -> drafting              (revise)
//! generating           -> materialized
//! generating           -> drafting              (revise after a failed attempt)
//! ```
//!
//! The two generator calls are the only suspension points. A failed
//! feasibility check degrades to "feasible" and never blocks generation;
//! a failed generation is fatal for the attempt but preserves the draft
//! for retry or revision.

pub mod negotiation;

pub use negotiation::{CheckOutcome, Negotiation};

use std::fmt;

use thiserror::Error;

use crate::generator::types::OptionKind;
use crate::roadmap::parser::PlanFormatError;

/// Phase of a setup negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupPhase {
    /// The user is assembling the draft; nothing has been submitted.
    Drafting,
    /// The feasibility check is in flight.
    CheckingFeasibility,
    /// The check came back infeasible; adjustment options are on offer.
    PresentingOptions,
    /// Cleared for (or retrying) roadmap generation.
    Generating,
    /// Terminal success: the project exists with its tasks.
    Materialized,
}

impl fmt::Display for SetupPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Drafting => "drafting",
            Self::CheckingFeasibility => "checking_feasibility",
            Self::PresentingOptions => "presenting_options",
            Self::Generating => "generating",
            Self::Materialized => "materialized",
        };
        f.write_str(s)
    }
}

/// The setup phase machine.
pub struct SetupStateMachine;

impl SetupStateMachine {
    /// Check whether a transition from `from` to `to` is a valid edge in
    /// the phase graph.
    pub fn is_valid_transition(from: SetupPhase, to: SetupPhase) -> bool {
        matches!(
            (from, to),
            (SetupPhase::Drafting, SetupPhase::CheckingFeasibility)
                | (SetupPhase::CheckingFeasibility, SetupPhase::Generating)
                | (SetupPhase::CheckingFeasibility, SetupPhase::PresentingOptions)
                | (SetupPhase::PresentingOptions, SetupPhase::Generating)
                | (SetupPhase::PresentingOptions, SetupPhase::Drafting)
                | (SetupPhase::Generating, SetupPhase::Materialized)
                | (SetupPhase::Generating, SetupPhase::Drafting)
        )
    }
}

/// Errors from the negotiation protocol.
#[derive(Debug, Error)]
pub enum SetupError {
    /// An operation was invoked in a phase where it is not allowed
    /// (including re-submission while a negotiation is already past
    /// drafting).
    #[error("cannot {action} while the negotiation is {phase}")]
    InvalidPhase {
        phase: SetupPhase,
        action: &'static str,
    },

    #[error("no adjustment option at index {index} ({available} offered)")]
    UnknownOption { index: usize, available: usize },

    #[error("suggested value {value:?} is not usable for a {kind} adjustment")]
    InvalidOptionValue { kind: OptionKind, value: String },

    /// The external generator errored; the draft is preserved for retry.
    #[error("roadmap generation failed: {0}")]
    Generation(#[source] anyhow::Error),

    /// The generator answered, but with an unusable roadmap; the draft is
    /// preserved for retry.
    #[error("generated roadmap is invalid: {0}")]
    InvalidRoadmap(#[from] PlanFormatError),
}
