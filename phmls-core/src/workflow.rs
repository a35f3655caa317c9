//! The review workflow of listings.
//!
//! ```text
//! draft ──► submitted ──► published
//!              │  ▲  └──► rejected
//!              ▼  │
//!         needs_revision
//! ```
//!
//! Admins may set any status unconditionally.

use strum::IntoEnumIterator;

use crate::{
    entities::*,
    hooks::{Error, Result},
};

use ListingStatus as S;

#[rustfmt::skip]
const TRANSITIONS: &[(ListingStatus, ListingStatus, &[Role])] = &[
    (S::Draft,         S::Submitted,     &[Role::Agent, Role::Admin]),
    (S::Submitted,     S::Published,     &[Role::Approver, Role::Admin]),
    (S::Submitted,     S::NeedsRevision, &[Role::Approver, Role::Admin]),
    (S::Submitted,     S::Rejected,      &[Role::Approver, Role::Admin]),
    (S::NeedsRevision, S::Submitted,     &[Role::Agent, Role::Admin]),
];

/// The roles that may move a listing from one status to another,
/// without the admin override.
pub fn allowed_roles(from: ListingStatus, to: ListingStatus) -> &'static [Role] {
    TRANSITIONS
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, roles)| *roles)
        .unwrap_or_default()
}

pub fn is_transition_allowed(
    role: Role,
    is_owner: bool,
    from: ListingStatus,
    to: ListingStatus,
) -> bool {
    if role == Role::Admin || from == to {
        return true;
    }
    if from.is_terminal() {
        return false;
    }
    if !allowed_roles(from, to).contains(&role) {
        return false;
    }
    // Agents only ever move their own listings
    role != Role::Agent || is_owner
}

pub fn authorize_transition(
    actor: &User,
    owner: Id,
    from: ListingStatus,
    to: ListingStatus,
) -> Result<()> {
    if !is_transition_allowed(actor.role, actor.id == owner, from, to) {
        log::debug!(
            "User {} ({}) is not allowed to move a listing from {from} to {to}",
            actor.id,
            actor.role
        );
        return Err(Error::InvalidTransition { from, to });
    }
    Ok(())
}

/// All statuses the actor may move the listing to.
pub fn allowed_targets(actor: &User, listing: &Listing) -> Vec<ListingStatus> {
    let is_owner = listing.is_created_by(actor.id);
    ListingStatus::iter()
        .filter(|to| *to != listing.status)
        .filter(|to| is_transition_allowed(actor.role, is_owner, listing.status, *to))
        .collect()
}
