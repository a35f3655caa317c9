use super::*;

pub fn create_listing(
    connections: &Connections,
    actor: Id,
    new_listing: usecases::NewListing,
) -> Result<Listing> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        usecases::create_listing(conn, &actor, new_listing)
    })?)
}
