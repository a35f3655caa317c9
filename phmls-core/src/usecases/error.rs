use thiserror::Error;

use crate::{gateways::geo, hooks, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The requested object could not be found")]
    NotFound,
    #[error("Invalid email address")]
    Email,
    #[error("The user already exists")]
    UserExists,
    #[error("Users cannot change their own role")]
    OwnRole,
    #[error("The share link is inactive")]
    ShareLinkInactive,
    #[error("The share link has expired")]
    ShareLinkExpired,
    #[error("Invalid share link lifetime")]
    ShareLinkLifetime,
    #[error(transparent)]
    Validation(#[from] hooks::Error),
    #[error(transparent)]
    Gateway(#[from] geo::Error),
    #[error(transparent)]
    Repo(repositories::Error),
}

impl From<repositories::Error> for Error {
    fn from(err: repositories::Error) -> Self {
        match err {
            repositories::Error::NotFound => Self::NotFound,
            err => Self::Repo(err),
        }
    }
}
