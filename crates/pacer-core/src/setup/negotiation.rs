//! One negotiation instance: a draft, its attachments, and the phase it
//! has reached.
//!
//! `&mut self` on every operation plus the phase guards make re-entry
//! impossible through this type; serializing user-triggered submissions
//! (e.g. disabling controls while a call is in flight) remains the
//! caller's responsibility, as does discarding the instance once
//! materialized.

use tracing::{info, warn};

use pacer_store::models::{Project, ProjectDraft};

use super::{SetupError, SetupPhase, SetupStateMachine};
use crate::generator::trait_def::RoadmapGenerator;
use crate::generator::types::{Attachment, FeasibilityOption, FeasibilityReport, OptionKind};
use crate::roadmap::{materialize, validate};

/// What the feasibility check decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Feasible (or the check failed and was degraded): generation may
    /// proceed with the draft as-is.
    ClearedForGeneration { reasoning: String },
    /// Infeasible: the generator suggests adjustments; apply one or
    /// revise the draft.
    AdjustmentsSuggested {
        reasoning: String,
        options: Vec<FeasibilityOption>,
    },
}

/// A single draft's negotiation with the external generator.
pub struct Negotiation {
    draft: ProjectDraft,
    attachments: Vec<Attachment>,
    phase: SetupPhase,
    options: Vec<FeasibilityOption>,
}

impl Negotiation {
    /// Start a negotiation for a draft and its attachments.
    pub fn new(draft: ProjectDraft, attachments: Vec<Attachment>) -> Self {
        Self {
            draft,
            attachments,
            phase: SetupPhase::Drafting,
            options: Vec::new(),
        }
    }

    pub fn phase(&self) -> SetupPhase {
        self.phase
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// The adjustment options currently on offer (empty outside
    /// [`SetupPhase::PresentingOptions`]).
    pub fn options(&self) -> &[FeasibilityOption] {
        &self.options
    }

    /// Submit the draft for a feasibility check.
    ///
    /// A transport or parse failure in the check is degraded to a
    /// feasible verdict: a broken feasibility service must never block
    /// plan generation outright.
    pub async fn submit(
        &mut self,
        generator: &dyn RoadmapGenerator,
    ) -> Result<CheckOutcome, SetupError> {
        self.advance(SetupPhase::CheckingFeasibility, "submit")?;

        let report = match generator
            .check_feasibility(&self.draft, &self.attachments)
            .await
        {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "feasibility check failed; proceeding as feasible");
                FeasibilityReport::assumed_feasible(&e.to_string())
            }
        };

        if report.is_feasible {
            self.advance(SetupPhase::Generating, "clear for generation")?;
            Ok(CheckOutcome::ClearedForGeneration {
                reasoning: report.reasoning,
            })
        } else {
            self.advance(SetupPhase::PresentingOptions, "present options")?;
            self.options = report.options.clone();
            Ok(CheckOutcome::AdjustmentsSuggested {
                reasoning: report.reasoning,
                options: report.options,
            })
        }
    }

    /// Merge exactly one suggested adjustment into the draft and clear the
    /// way for generation. The amended draft is trusted and NOT re-checked
    /// for feasibility.
    pub fn apply_option(&mut self, index: usize) -> Result<(), SetupError> {
        if self.phase != SetupPhase::PresentingOptions {
            return Err(SetupError::InvalidPhase {
                phase: self.phase,
                action: "apply an option",
            });
        }

        let option = self
            .options
            .get(index)
            .ok_or(SetupError::UnknownOption {
                index,
                available: self.options.len(),
            })?
            .clone();

        match option.kind {
            OptionKind::Hours => {
                let hours: f64 = option.suggested_value.trim().parse().map_err(|_| {
                    SetupError::InvalidOptionValue {
                        kind: option.kind,
                        value: option.suggested_value.clone(),
                    }
                })?;
                if !hours.is_finite() || hours <= 0.0 {
                    return Err(SetupError::InvalidOptionValue {
                        kind: option.kind,
                        value: option.suggested_value,
                    });
                }
                self.draft.daily_work_time = hours;
            }
            OptionKind::Deadline => {
                self.draft.end_date = option.suggested_value.trim().parse().map_err(|_| {
                    SetupError::InvalidOptionValue {
                        kind: option.kind,
                        value: option.suggested_value.clone(),
                    }
                })?;
            }
            OptionKind::Goal => {
                self.draft.goal = option.suggested_value;
            }
        }

        self.options.clear();
        self.advance(SetupPhase::Generating, "apply an option")?;
        Ok(())
    }

    /// Replace the draft and return to drafting. Accepted while options
    /// are on offer or after a failed generation attempt; a materialized
    /// negotiation is over and cannot be revised.
    pub fn revise(&mut self, draft: ProjectDraft) -> Result<(), SetupError> {
        if self.phase != SetupPhase::Drafting {
            self.advance(SetupPhase::Drafting, "revise")?;
        }
        self.options.clear();
        self.draft = draft;
        Ok(())
    }

    /// Run roadmap generation for the (possibly amended) draft and
    /// materialize the result.
    ///
    /// On failure the negotiation stays in its generating phase with the
    /// draft intact, so the caller may retry or revise; no partial
    /// project is ever produced.
    pub async fn generate(
        &mut self,
        generator: &dyn RoadmapGenerator,
    ) -> Result<Project, SetupError> {
        if self.phase != SetupPhase::Generating {
            return Err(SetupError::InvalidPhase {
                phase: self.phase,
                action: "generate",
            });
        }

        let plan = generator
            .generate_roadmap(&self.draft, &self.attachments)
            .await
            .map_err(SetupError::Generation)?;
        validate(&plan)?;

        let project = materialize(&self.draft, &plan);
        self.advance(SetupPhase::Materialized, "materialize")?;
        Ok(project)
    }

    /// Move to `to`, rejecting moves the phase graph does not allow.
    fn advance(&mut self, to: SetupPhase, action: &'static str) -> Result<(), SetupError> {
        if !SetupStateMachine::is_valid_transition(self.phase, to) {
            return Err(SetupError::InvalidPhase {
                phase: self.phase,
                action,
            });
        }
        info!(from = %self.phase, to = %to, "setup phase transition");
        self.phase = to;
        Ok(())
    }
}
