use super::*;
use crate::entities::*;

/// Applies server side defaults and normalizes text input.
///
/// On creation the actor becomes the owner. Everybody except admins
/// starts with a resale draft. On update the owner and the creation
/// time are restored from the persisted listing, as is the listing
/// type for everybody except admins.
#[derive(Debug, Clone, Copy)]
pub struct Defaults;

impl Hook for Defaults {
    fn name(&self) -> &'static str {
        "defaults"
    }

    fn run(&self, ctx: &ChangeContext, mut candidate: Listing, _: &dyn ReferenceRepo) -> Result<Listing> {
        let is_admin = ctx.actor.is_admin();
        match ctx.original {
            None => {
                candidate.created_by = ctx.actor.id;
                if !is_admin {
                    candidate.listing_type = ListingType::Resale;
                    candidate.status = ListingStatus::Draft;
                }
            }
            Some(original) => {
                candidate.id = original.id;
                candidate.created_by = original.created_by;
                candidate.created_at = original.created_at;
                if !is_admin {
                    candidate.listing_type = original.listing_type;
                }
            }
        }
        normalize(&mut candidate);
        if candidate.title.is_empty() {
            return Err(Error::Required("Title"));
        }
        Ok(candidate)
    }
}

fn normalize(listing: &mut Listing) {
    listing.title = listing.title.trim().to_owned();
    for text in [
        &mut listing.description,
        &mut listing.street_address,
        &mut listing.model_name,
        &mut listing.standard_inclusions,
        &mut listing.preselling_notes,
    ] {
        *text = text
            .take()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty());
    }
    dedup(&mut listing.transaction_types);
    dedup(&mut listing.payment_terms);
}

// Keeps the first occurrence
fn dedup<T: PartialEq + Copy>(values: &mut Vec<T>) {
    let mut unique = Vec::with_capacity(values.len());
    for v in values.drain(..) {
        if !unique.contains(&v) {
            unique.push(v);
        }
    }
    *values = unique;
}
