use std::time::Duration;

use super::{check_read, check_write, prelude::*};
use crate::authorization::{listing, share_link};

pub fn create_share_link<R>(
    repo: &R,
    actor: &User,
    listing_id: Id,
    lifetime: Option<Duration>,
    now: Timestamp,
) -> Result<ExternalShareLink>
where
    R: ListingRepo + ShareLinkRepo,
{
    let listing = repo.get_listing(listing_id)?;
    check_read(listing::access(actor, Operation::Read), &listing)?;
    let expires_at = match lifetime {
        Some(lifetime) if lifetime.is_zero() => return Err(Error::ShareLinkLifetime),
        Some(lifetime) => Some(now.checked_add(lifetime).ok_or(Error::ShareLinkLifetime)?),
        None => None,
    };
    let link = ExternalShareLink {
        id: Id::default(),
        token: Token::new(),
        listing: listing.id,
        created_by: actor.id,
        is_active: true,
        expires_at,
        view_count: 0,
        last_viewed_at: None,
        created_at: now,
    };
    check_write(share_link::access(actor, Operation::Create), &link)?;
    let link = repo.create_share_link(link)?;
    log::info!(
        "Created share link {} for listing {} by user {}",
        link.id,
        listing.id,
        actor.id
    );
    Ok(link)
}

pub fn deactivate_share_link<R>(repo: &R, actor: &User, id: Id) -> Result<ExternalShareLink>
where
    R: ShareLinkRepo,
{
    let mut link = repo.get_share_link(id)?;
    check_read(share_link::access(actor, Operation::Read), &link)?;
    check_write(share_link::access(actor, Operation::Update), &link)?;
    if link.is_active {
        link.is_active = false;
        repo.update_share_link(&link)?;
        log::info!("Deactivated share link {id} by user {}", actor.id);
    }
    Ok(link)
}

pub fn list_share_links<R>(repo: &R, actor: &User) -> Result<Vec<ExternalShareLink>>
where
    R: ShareLinkRepo,
{
    let filter = share_link::access(actor, Operation::Read).into_predicate();
    Ok(repo.find_share_links(&filter)?)
}

/// Resolves a share link for an anonymous visitor.
///
/// Every successful visit is counted.
pub fn open_share_link<R>(repo: &R, token: &Token, now: Timestamp) -> Result<Listing>
where
    R: ListingRepo + ShareLinkRepo,
{
    let mut link = repo.get_share_link_by_token(token)?;
    if !link.is_active {
        return Err(Error::ShareLinkInactive);
    }
    if link.is_expired_at(now) {
        return Err(Error::ShareLinkExpired);
    }
    let listing = repo.get_listing(link.listing)?;
    link.view_count = link.view_count.saturating_add(1);
    link.last_viewed_at = Some(now);
    repo.update_share_link(&link)?;
    log::debug!(
        "Share link {} of listing {} viewed {} time(s)",
        link.id,
        listing.id,
        link.view_count
    );
    Ok(listing)
}
