use std::time::Duration;

use super::*;

pub fn create_share_link(
    connections: &Connections,
    actor: Id,
    listing: Id,
    lifetime: Option<Duration>,
) -> Result<ExternalShareLink> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        let link = usecases::create_share_link(conn, &actor, listing, lifetime, Timestamp::now())?;
        info!("Created share link {} for listing {listing}", link.id);
        Ok::<_, usecases::Error>(link)
    })?)
}

pub fn deactivate_share_link(
    connections: &Connections,
    actor: Id,
    id: Id,
) -> Result<ExternalShareLink> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        usecases::deactivate_share_link(conn, &actor, id)
    })?)
}

pub fn list_share_links(connections: &Connections, actor: Id) -> Result<Vec<ExternalShareLink>> {
    let db = connections.shared()?;
    let actor = usecases::authorize_user(&db, actor)?;
    Ok(usecases::list_share_links(&db, &actor)?)
}

/// Resolves a token for an anonymous visitor.
pub fn open_share_link(connections: &Connections, token: &Token) -> Result<Listing> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::open_share_link(conn, token, Timestamp::now()).inspect_err(|err| {
            debug!("Rejected share link: {err}");
        })
    })?)
}
