use super::prelude::*;
use crate::hooks;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Creates a new account.
///
/// Only admins may create accounts. The very first account can be
/// created without an actor and always becomes an admin.
pub fn create_user<R>(repo: &R, actor: Option<&User>, new_user: NewUser) -> Result<User>
where
    R: UserRepo,
{
    let NewUser { email, name, role } = new_user;
    let role = if repo.count_users()? == 0 {
        log::info!("Bootstrapping the first admin account");
        Role::Admin
    } else {
        match actor {
            None => return Err(Error::Unauthorized),
            Some(actor) if !actor.is_admin() => return Err(Error::Forbidden),
            Some(_) => role,
        }
    };
    let email = email.trim().to_lowercase();
    if !fast_chemail::is_valid_email(&email) {
        return Err(Error::Email);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(hooks::Error::Required("Name").into());
    }
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = repo.create_user(User {
        id: Id::default(),
        email,
        name: name.to_owned(),
        role,
    })?;
    log::info!("Created {} account {} for {}", user.role, user.id, user.email);
    Ok(user)
}
