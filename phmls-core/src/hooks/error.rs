use thiserror::Error;

use crate::{entities::ListingStatus, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} or {1} is required")]
    RequiredOneOf(&'static str, &'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{min} must not be greater than {max}")]
    InvalidRange {
        min: &'static str,
        max: &'static str,
    },
    #[error("Unknown {field} '{value}'")]
    UnknownReference { field: &'static str, value: String },
    #[error("{child} '{child_ref}' does not belong to {parent} '{parent_ref}'")]
    LocationHierarchy {
        child: &'static str,
        child_ref: String,
        parent: &'static str,
        parent_ref: String,
    },
    #[error("{child} '{child_ref}' does not belong to {parent} '{parent_ref}'")]
    ClassificationHierarchy {
        child: &'static str,
        child_ref: String,
        parent: &'static str,
        parent_ref: String,
    },
    #[error("Preselling listings must not contain resale-only fields: {}", .0.join(", "))]
    ResaleOnlyFields(Vec<&'static str>),
    #[error("Resale listings must not contain preselling-only fields: {}", .0.join(", "))]
    PresellingOnlyFields(Vec<&'static str>),
    #[error("Invalid status transition from '{from}' to '{to}'")]
    InvalidTransition {
        from: ListingStatus,
        to: ListingStatus,
    },
    #[error(transparent)]
    Lookup(#[from] repositories::Error),
}

impl Error {
    /// The form label of the offending field, if the
    /// error can be attributed to a single one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Required(field) | Self::NotPositive(field) => Some(field),
            Self::UnknownReference { field, .. } => Some(field),
            Self::LocationHierarchy { child, .. } | Self::ClassificationHierarchy { child, .. } => {
                Some(child)
            }
            Self::InvalidRange { min, .. } => Some(min),
            Self::InvalidTransition { .. } => Some("Status"),
            _ => None,
        }
    }
}

pub(crate) fn lookup<T>(
    result: repositories::Result<T>,
    field: &'static str,
    value: impl ToString,
) -> Result<T, Error> {
    match result {
        Err(repositories::Error::NotFound) => Err(Error::UnknownReference {
            field,
            value: value.to_string(),
        }),
        result => result.map_err(Error::Lookup),
    }
}
