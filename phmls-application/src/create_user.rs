use super::*;

pub fn create_user(
    connections: &Connections,
    actor: Option<Id>,
    new_user: usecases::NewUser,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = actor
            .map(|id| usecases::authorize_user(conn, id))
            .transpose()?;
        usecases::create_user(conn, actor.as_ref(), new_user).inspect_err(|err| {
            warn!("Failed to create user: {err}");
        })
    })?)
}
