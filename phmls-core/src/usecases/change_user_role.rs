use super::prelude::*;
use crate::authorization;

pub fn change_user_role<R>(repo: &R, actor: &User, user_id: Id, role: Role) -> Result<User>
where
    R: UserRepo,
{
    log::info!("Changing role to {role} for user {user_id}");
    authorization::authorize_role(actor, &[Role::Admin]).map_err(|_| Error::Forbidden)?;
    if actor.id == user_id {
        return Err(Error::OwnRole);
    }
    let mut user = repo.get_user(user_id)?;
    if user.role != role {
        user.role = role;
        repo.update_user(&user)?;
    }
    Ok(user)
}
