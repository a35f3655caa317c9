use super::*;

pub fn get_listing(connections: &Connections, actor: Id, id: Id) -> Result<Listing> {
    let db = connections.shared()?;
    let actor = usecases::authorize_user(&db, actor)?;
    Ok(usecases::get_listing(&db, &actor, id)?)
}

pub fn query_listings(
    connections: &Connections,
    actor: Id,
    query: &usecases::ListingQuery,
) -> Result<Vec<Listing>> {
    let db = connections.shared()?;
    let actor = usecases::authorize_user(&db, actor)?;
    Ok(usecases::query_listings(&db, &actor, query)?)
}

/// The statuses the actor may move the listing to next.
pub fn allowed_transitions(
    connections: &Connections,
    actor: Id,
    id: Id,
) -> Result<Vec<ListingStatus>> {
    let db = connections.shared()?;
    let actor = usecases::authorize_user(&db, actor)?;
    let listing = usecases::get_listing(&db, &actor, id)?;
    Ok(phmls_core::workflow::allowed_targets(&actor, &listing))
}

pub fn list_users(connections: &Connections, actor: Id) -> Result<Vec<User>> {
    let db = connections.shared()?;
    let actor = usecases::authorize_user(&db, actor)?;
    Ok(usecases::list_users(&db, &actor)?)
}
