use super::*;

pub fn create_document(
    connections: &Connections,
    actor: Id,
    listing: Id,
    new_document: usecases::NewDocument,
) -> Result<Document> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        usecases::create_document(conn, &actor, listing, new_document).inspect_err(|err| {
            warn!("Failed to attach document to listing {listing}: {err}");
        })
    })?)
}

pub fn delete_document(connections: &Connections, actor: Id, id: Id) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        usecases::delete_document(conn, &actor, id)
    })?)
}

pub fn list_documents(connections: &Connections, actor: Id, listing: Id) -> Result<Vec<Document>> {
    let db = connections.shared()?;
    let actor = usecases::authorize_user(&db, actor)?;
    Ok(usecases::list_documents(&db, &actor, listing)?)
}
