use super::*;

pub fn delete_listing(connections: &Connections, actor: Id, id: Id) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        usecases::delete_listing(conn, &actor, id).inspect_err(|err| {
            warn!("Failed to delete listing {id}: {err}");
        })
    })?)
}
