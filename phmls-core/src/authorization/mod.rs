//! Role based access control.
//!
//! Every policy is a pure function from the acting user and the requested
//! [`Operation`] to an [`AccessDecision`]. Row level restrictions are
//! expressed as [`Predicate`]s instead of closures so that repositories can
//! apply them to queries and use cases can check single records with the
//! very same rule.

use std::result::Result as StdResult;

use thiserror::Error;

use crate::entities::{Role, User};

pub mod document;
pub mod listing;
pub mod notification;
pub mod predicate;
pub mod share_link;
pub mod user;

pub use self::predicate::{Comparison, Predicate, Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision<F> {
    Allow,
    Deny,
    FilterBy(Predicate<F>),
}

impl<F> AccessDecision<F>
where
    F: Copy,
{
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Deny)
    }

    /// Check a single, already loaded record.
    pub fn permits<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        match self {
            Self::Allow => true,
            Self::Deny => false,
            Self::FilterBy(predicate) => predicate.eval(record),
        }
    }

    /// The row filter that a query has to apply.
    pub fn into_predicate(self) -> Predicate<F> {
        match self {
            Self::Allow => Predicate::always(),
            Self::Deny => Predicate::never(),
            Self::FilterBy(predicate) => predicate,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, allowed_roles: &[Role]) -> Result<()> {
    if !allowed_roles.contains(&user.role) {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}
