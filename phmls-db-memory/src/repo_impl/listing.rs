use phmls_core::authorization::listing::ListingFilter;

use super::*;

fn create_listing(tables: &mut Tables, mut listing: Listing) -> Result<Listing> {
    listing.id = next_id(&mut tables.sequences.listings)?;
    listing.revision = Revision::initial();
    tables.listings.insert(listing.id, listing.clone());
    Ok(listing)
}

fn update_listing(tables: &mut Tables, mut listing: Listing) -> Result<Listing> {
    let stored = tables
        .listings
        .get_mut(&listing.id)
        .ok_or(repo::Error::NotFound)?;
    if stored.revision != listing.revision {
        log::debug!(
            "Revision conflict on listing {}: expected {:?}, got {:?}",
            listing.id,
            stored.revision,
            listing.revision
        );
        return Err(repo::Error::InvalidVersion);
    }
    listing.revision = listing.revision.next();
    *stored = listing.clone();
    Ok(listing)
}

impl ListingRepo for DbConnection<'_> {
    fn get_listing(&self, id: Id) -> Result<Listing> {
        get(&self.tables().listings, &id)
    }
    fn find_listings(&self, filter: &ListingFilter) -> Result<Vec<Listing>> {
        Ok(filtered(&self.tables().listings, filter))
    }
    fn create_listing(&self, listing: Listing) -> Result<Listing> {
        create_listing(&mut *self.tables_mut()?, listing)
    }
    fn update_listing(&self, listing: Listing) -> Result<Listing> {
        update_listing(&mut *self.tables_mut()?, listing)
    }
    fn delete_listing(&self, id: Id) -> Result<()> {
        self.tables_mut()?
            .listings
            .remove(&id)
            .map(|_| ())
            .ok_or(repo::Error::NotFound)
    }
    fn count_listings(&self) -> Result<usize> {
        Ok(self.tables().listings.len())
    }
}
