use super::{check_read, check_write, prelude::*};
use crate::authorization::notification::{self, NotificationField};
use crate::authorization::Predicate;

/// Notifications about a status change of a listing.
///
/// A submitted listing concerns every approver. A published,
/// rejected or returned listing concerns its owner. Nobody is
/// notified about their own action.
pub fn compose_status_notifications<R>(
    repo: &R,
    listing: &Listing,
    from: ListingStatus,
    actor: &User,
) -> Result<Vec<Notification>>
where
    R: UserRepo,
{
    let to = listing.status;
    let title = &listing.title;
    let (kind, recipients, message) = match to {
        ListingStatus::Submitted => {
            let approvers = repo.find_users_by_role(Role::Approver)?;
            let message = if from == ListingStatus::NeedsRevision {
                format!("Listing '{title}' was revised and submitted again for review")
            } else {
                format!("Listing '{title}' was submitted for review")
            };
            (
                NotificationKind::ListingSubmitted,
                approvers.into_iter().map(|u| u.id).collect::<Vec<_>>(),
                message,
            )
        }
        ListingStatus::Published => (
            NotificationKind::ListingPublished,
            vec![listing.created_by],
            format!("Your listing '{title}' has been published"),
        ),
        ListingStatus::NeedsRevision => (
            NotificationKind::ListingNeedsRevision,
            vec![listing.created_by],
            format!("Your listing '{title}' needs revision"),
        ),
        ListingStatus::Rejected => (
            NotificationKind::ListingRejected,
            vec![listing.created_by],
            format!("Your listing '{title}' has been rejected"),
        ),
        ListingStatus::Draft => return Ok(vec![]),
    };
    let created_at = Timestamp::now();
    Ok(recipients
        .into_iter()
        .filter(|recipient: &Id| *recipient != actor.id)
        .map(|recipient| Notification {
            id: Id::default(),
            recipient,
            listing: listing.id,
            kind,
            message: message.clone(),
            read: false,
            created_at,
        })
        .collect())
}

pub fn store_notifications<R>(
    repo: &R,
    notifications: Vec<Notification>,
) -> Result<Vec<Notification>>
where
    R: NotificationRepo,
{
    let mut stored = Vec::with_capacity(notifications.len());
    for notification in notifications {
        stored.push(repo.create_notification(notification)?);
    }
    log::debug!("Stored {} notification(s)", stored.len());
    Ok(stored)
}

pub fn list_notifications<R>(repo: &R, actor: &User, unread_only: bool) -> Result<Vec<Notification>>
where
    R: NotificationRepo,
{
    let mut filter = notification::access(actor, Operation::Read).into_predicate();
    if unread_only {
        filter = filter.and(Predicate::equals(NotificationField::Read, false));
    }
    Ok(repo.find_notifications(&filter)?)
}

pub fn mark_notification_read<R>(repo: &R, actor: &User, id: Id) -> Result<Notification>
where
    R: NotificationRepo,
{
    let mut notification = repo.get_notification(id)?;
    check_read(notification::access(actor, Operation::Read), &notification)?;
    check_write(notification::access(actor, Operation::Update), &notification)?;
    if !notification.read {
        notification.read = true;
        repo.update_notification(&notification)?;
    }
    Ok(notification)
}
