#[macro_use]
extern crate log;

mod change_user_role;
mod create_listing;
mod create_user;
mod delete_listing;
mod documents;
mod import_province;
mod notifications;
mod queries;
mod seed;
mod share_links;
mod update_listing;

pub mod prelude {
    pub use super::{
        change_user_role::*, create_listing::*, create_user::*, delete_listing::*, documents::*,
        import_province::*, notifications::*, queries::*, seed::*, share_links::*,
        update_listing::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use phmls_core::{entities::*, usecases};
pub(crate) use phmls_db_memory::Connections;

#[cfg(test)]
pub(crate) mod tests;
