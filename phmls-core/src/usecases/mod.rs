//! Use cases operate on a single, already opened connection.
//!
//! The caller is responsible for running them inside a transaction
//! and for triggering side effects like notifications after the
//! transaction has been committed.

mod change_user_role;
mod create_listing;
mod create_user;
mod delete_listing;
mod documents;
mod error;
mod import_province;
mod notifications;
mod query_listings;
mod share_links;
mod update_listing;

#[cfg(test)]
pub mod tests;

pub use self::{
    change_user_role::*, create_listing::*, create_user::*, delete_listing::*, documents::*,
    error::Error, import_province::*, notifications::*, query_listings::*, share_links::*,
    update_listing::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        authorization::{AccessDecision, Operation, Record},
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
use self::prelude::*;

// Reads are denied with `NotFound` to not reveal the
// existence of records the actor must not see.
fn check_read<R>(decision: AccessDecision<R::Field>, record: &R) -> Result<()>
where
    R: Record,
{
    if decision.permits(record) {
        Ok(())
    } else {
        Err(Error::NotFound)
    }
}

fn check_write<R>(decision: AccessDecision<R::Field>, record: &R) -> Result<()>
where
    R: Record,
{
    if decision.permits(record) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

pub fn authorize_user<R>(repo: &R, id: Id) -> Result<User>
where
    R: UserRepo,
{
    match repo.get_user(id) {
        Ok(user) => Ok(user),
        Err(RepoError::NotFound) => Err(Error::Unauthorized),
        Err(err) => Err(err.into()),
    }
}

pub fn list_users<R>(repo: &R, actor: &User) -> Result<Vec<User>>
where
    R: UserRepo,
{
    let filter = crate::authorization::user::access(actor, Operation::Read).into_predicate();
    Ok(repo.find_users(&filter)?)
}

#[cfg(test)]
mod user_tests {
    use super::{tests::*, *};

    #[test]
    fn unknown_users_are_unauthorized() {
        let db = MockDb::default().with_users([user(1, Role::Agent)]);
        assert_eq!(Id::new(1), authorize_user(&db, Id::new(1)).unwrap().id);
        assert!(matches!(
            authorize_user(&db, Id::new(2)),
            Err(Error::Unauthorized)
        ));
    }

    #[test]
    fn list_users_of_an_approver() {
        let db = MockDb::default().with_users([
            user(1, Role::Agent),
            user(2, Role::Approver),
            user(3, Role::Admin),
        ]);
        let ids: Vec<_> = list_users(&db, &user(2, Role::Approver))
            .unwrap()
            .into_iter()
            .map(|u| u.id.value())
            .collect();
        assert_eq!(vec![1, 2], ids);
        assert_eq!(1, list_users(&db, &user(1, Role::Agent)).unwrap().len());
        assert_eq!(3, list_users(&db, &user(3, Role::Admin)).unwrap().len());
    }
}
