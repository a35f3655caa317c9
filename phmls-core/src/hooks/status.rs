use super::*;
use crate::{entities::*, workflow};

/// Validates a status change against the workflow.
///
/// The target status is compared with the persisted status of the
/// original listing. New listings are treated as drafts.
#[derive(Debug, Clone, Copy)]
pub struct StatusTransition;

impl Hook for StatusTransition {
    fn name(&self) -> &'static str {
        "status_transition"
    }

    fn run(
        &self,
        ctx: &ChangeContext,
        candidate: Listing,
        _: &dyn ReferenceRepo,
    ) -> Result<Listing> {
        let from = ctx
            .original
            .map(|original| original.status)
            .unwrap_or_default();
        if candidate.status == from {
            return Ok(candidate);
        }
        let owner = ctx
            .original
            .map(|original| original.created_by)
            .unwrap_or(candidate.created_by);
        workflow::authorize_transition(ctx.actor, owner, from, candidate.status)?;
        Ok(candidate)
    }
}
