use super::{check_read, prelude::*};
use crate::authorization::listing;

/// Deletes a listing together with its documents, share links
/// and notifications.
pub fn delete_listing<R>(repo: &R, actor: &User, id: Id) -> Result<()>
where
    R: ListingRepo + DocumentRepo + ShareLinkRepo + NotificationRepo,
{
    let listing = repo.get_listing(id)?;
    if !listing::access(actor, Operation::Delete).permits(&listing) {
        check_read(listing::access(actor, Operation::Read), &listing)?;
        log::warn!(
            "User {} is not allowed to delete listing {id} with status {}",
            actor.id,
            listing.status
        );
        return Err(Error::Forbidden);
    }
    let documents = repo.delete_documents_of_listing(id)?;
    let share_links = repo.delete_share_links_of_listing(id)?;
    let notifications = repo.delete_notifications_of_listing(id)?;
    repo.delete_listing(id)?;
    log::info!(
        "Deleted listing {id} with {documents} document(s), {share_links} share link(s) and {notifications} notification(s) by user {}",
        actor.id
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn agent_deletes_own_draft_with_attachments() {
        let db = MockDb::seeded();
        let agent = user(1, Role::Agent);
        let listing = db.add_listing(valid_resale(1));
        db.documents.borrow_mut().push(Document {
            id: Id::new(1),
            listing: listing.id,
            title: "Title".into(),
            file_name: "tct.pdf".into(),
            visibility: Visibility::Private,
            uploaded_by: Id::new(1),
            created_at: Timestamp::now(),
        });
        db.share_links.borrow_mut().push(ExternalShareLink {
            id: Id::new(1),
            token: Token::new(),
            listing: listing.id,
            created_by: Id::new(1),
            is_active: true,
            expires_at: None,
            view_count: 0,
            last_viewed_at: None,
            created_at: Timestamp::now(),
        });
        db.notifications.borrow_mut().push(Notification {
            id: Id::new(1),
            recipient: Id::new(2),
            listing: listing.id,
            kind: NotificationKind::ListingSubmitted,
            message: "Listing submitted".into(),
            read: false,
            created_at: Timestamp::now(),
        });
        delete_listing(&db, &agent, listing.id).unwrap();
        assert!(db.listings.borrow().is_empty());
        assert!(db.documents.borrow().is_empty());
        assert!(db.share_links.borrow().is_empty());
        assert!(db.notifications.borrow().is_empty());
    }

    #[test]
    fn approver_deletes_foreign_draft() {
        let db = MockDb::seeded();
        let approver = user(2, Role::Approver);
        let listing = db.add_listing(valid_resale(1));
        delete_listing(&db, &approver, listing.id).unwrap();
        assert!(db.listings.borrow().is_empty());
    }

    #[test]
    fn agent_cannot_see_foreign_draft() {
        let db = MockDb::seeded();
        let other = user(4, Role::Agent);
        let listing = db.add_listing(valid_resale(1));
        assert!(matches!(
            delete_listing(&db, &other, listing.id),
            Err(Error::NotFound)
        ));
        assert_eq!(1, db.listings.borrow().len());
    }

    #[test]
    fn agent_cannot_delete_submitted_listing() {
        let db = MockDb::seeded();
        let agent = user(1, Role::Agent);
        let mut listing = valid_resale(1);
        listing.status = ListingStatus::Submitted;
        let listing = db.add_listing(listing);
        assert!(matches!(
            delete_listing(&db, &agent, listing.id),
            Err(Error::Forbidden)
        ));
        assert_eq!(1, db.listings.borrow().len());
    }

    #[test]
    fn approver_deletes_any_visible_listing() {
        let db = MockDb::seeded();
        let approver = user(2, Role::Approver);
        let mut listing = valid_resale(1);
        listing.status = ListingStatus::Rejected;
        let listing = db.add_listing(listing);
        assert!(delete_listing(&db, &approver, listing.id).is_ok());
        assert!(matches!(
            delete_listing(&db, &approver, listing.id),
            Err(Error::NotFound)
        ));
    }
}
