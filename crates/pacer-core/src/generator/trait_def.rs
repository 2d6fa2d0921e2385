//! The `RoadmapGenerator` trait -- the adapter interface for the external
//! plan-generation service.
//!
//! Each concrete backend (an AI CLI subprocess, a test double, etc.)
//! implements this trait. The trait is intentionally object-safe so it can
//! be passed around as `&dyn RoadmapGenerator`.

use anyhow::Result;
use async_trait::async_trait;

use pacer_store::models::ProjectDraft;

use super::types::{Attachment, FeasibilityReport};
use crate::roadmap::plan_format::DayPlan;

/// Adapter interface for the external generative-AI collaborator.
///
/// Both calls may fail; the caller decides what failure means. The
/// negotiation protocol degrades a failed feasibility check to "feasible"
/// but treats a failed generation as fatal for the attempt.
///
/// # Object Safety
///
/// This trait is object-safe: it can be stored and passed as
/// `&dyn RoadmapGenerator`.
#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    /// Human-readable name for this backend (e.g. "gemini-cli").
    fn name(&self) -> &str;

    /// Judge whether the draft's goal is achievable within its timeframe
    /// and daily time budget, suggesting adjustments when it is not.
    async fn check_feasibility(
        &self,
        draft: &ProjectDraft,
        attachments: &[Attachment],
    ) -> Result<FeasibilityReport>;

    /// Produce a day-by-day task breakdown for the draft.
    async fn generate_roadmap(
        &self,
        draft: &ProjectDraft,
        attachments: &[Attachment],
    ) -> Result<Vec<DayPlan>>;
}

// Compile-time assertion: RoadmapGenerator must be object-safe.
// If this line compiles, the trait can be used as `dyn RoadmapGenerator`.
const _: () = {
    fn _assert_object_safe(_: &dyn RoadmapGenerator) {}
};
