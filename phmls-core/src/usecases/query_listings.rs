use super::{check_read, prelude::*};
use crate::authorization::{
    listing::{self, ListingField, ListingFilter},
    Predicate,
};

pub fn get_listing<R>(repo: &R, actor: &User, id: Id) -> Result<Listing>
where
    R: ListingRepo,
{
    let listing = repo.get_listing(id)?;
    check_read(listing::access(actor, Operation::Read), &listing)?;
    Ok(listing)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub status: Option<ListingStatus>,
    pub listing_type: Option<ListingType>,
    pub created_by: Option<Id>,
    pub province: Option<PsgcCode>,
    pub limit: Option<usize>,
}

impl ListingQuery {
    fn filter(&self) -> ListingFilter {
        let Self {
            status,
            listing_type,
            created_by,
            province,
            limit: _,
        } = self;
        let mut filter = Predicate::always();
        if let Some(status) = status {
            filter = filter.and(Predicate::equals(ListingField::Status, *status));
        }
        if let Some(listing_type) = listing_type {
            filter = filter.and(Predicate::equals(ListingField::ListingType, *listing_type));
        }
        if let Some(created_by) = created_by {
            filter = filter.and(Predicate::equals(ListingField::CreatedBy, *created_by));
        }
        if let Some(province) = province {
            filter = filter.and(Predicate::equals(ListingField::Province, province));
        }
        filter
    }
}

/// All listings the actor may read that match the query.
pub fn query_listings<R>(repo: &R, actor: &User, query: &ListingQuery) -> Result<Vec<Listing>>
where
    R: ListingRepo,
{
    let filter = listing::access(actor, Operation::Read)
        .into_predicate()
        .and(query.filter());
    log::debug!("Querying listings: {filter}");
    let mut listings = repo.find_listings(&filter)?;
    if let Some(limit) = query.limit {
        listings.truncate(limit);
    }
    Ok(listings)
}
