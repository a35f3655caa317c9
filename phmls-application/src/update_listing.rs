use super::*;

use phmls_core::gateways::notify::NotificationGateway;

pub fn update_listing(
    connections: &Connections,
    notify: &dyn NotificationGateway,
    actor: Id,
    id: Id,
    patch: usecases::ListingPatch,
) -> Result<Listing> {
    let (updated, actor) = connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        let updated = usecases::update_listing(conn, &actor, id, patch).inspect_err(|err| {
            warn!("Failed to update listing {id}: {err}");
        })?;
        Ok::<_, usecases::Error>((updated, actor))
    })?;
    let usecases::UpdatedListing {
        listing,
        previous_status,
    } = updated;

    // Notifications must never affect the outcome
    // of the committed change.
    if let Some(from) = previous_status {
        info!(
            "Listing {} changed status from {from} to {}",
            listing.id, listing.status
        );
        if let Err(err) = notify_status_changed(connections, notify, &listing, from, &actor) {
            error!(
                "Failed to send notifications for listing {}: {}",
                listing.id, err
            );
        }
    }
    Ok(listing)
}

pub fn change_listing_status(
    connections: &Connections,
    notify: &dyn NotificationGateway,
    actor: Id,
    id: Id,
    status: ListingStatus,
) -> Result<Listing> {
    update_listing(
        connections,
        notify,
        actor,
        id,
        usecases::ListingPatch::status(status),
    )
}

fn notify_status_changed(
    connections: &Connections,
    notify: &dyn NotificationGateway,
    listing: &Listing,
    from: ListingStatus,
    actor: &User,
) -> Result<()> {
    let notifications = connections.exclusive()?.transaction(|conn| {
        let notifications = usecases::compose_status_notifications(conn, listing, from, actor)?;
        usecases::store_notifications(conn, notifications)
    })?;
    for notification in &notifications {
        notify.deliver(notification, listing);
    }
    Ok(())
}
