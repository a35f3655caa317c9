use super::*;

pub fn list_notifications(
    connections: &Connections,
    actor: Id,
    unread_only: bool,
) -> Result<Vec<Notification>> {
    let db = connections.shared()?;
    let actor = usecases::authorize_user(&db, actor)?;
    Ok(usecases::list_notifications(&db, &actor, unread_only)?)
}

pub fn mark_notification_read(connections: &Connections, actor: Id, id: Id) -> Result<Notification> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        usecases::mark_notification_read(conn, &actor, id)
    })?)
}
