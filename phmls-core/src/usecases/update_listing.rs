use super::{check_read, prelude::*};
use crate::{
    authorization::listing,
    hooks::{ChangeContext, Pipeline},
    workflow,
};

/// Changes to an existing listing.
///
/// `None` leaves a field untouched. Optional fields of the listing are
/// wrapped twice so that `Some(None)` clears them.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPatch {
    /// The revision the changes are based on.
    pub revision             : Option<Revision>,

    pub title                : Option<String>,
    pub description          : Option<Option<String>>,
    pub listing_type         : Option<ListingType>,
    pub status               : Option<ListingStatus>,

    pub property_category    : Option<Option<Id>>,
    pub property_type        : Option<Option<Id>>,
    pub property_subtype     : Option<Option<Id>>,

    pub province             : Option<Option<PsgcCode>>,
    pub city                 : Option<Option<PsgcCode>>,
    pub barangay             : Option<Option<PsgcCode>>,
    pub development          : Option<Option<Id>>,
    pub street_address       : Option<Option<String>>,

    pub transaction_types    : Option<Vec<TransactionType>>,
    pub price                : Option<Option<f64>>,
    pub price_per_sqm        : Option<Option<f64>>,
    pub floor_area_sqm       : Option<Option<f64>>,
    pub lot_area_sqm         : Option<Option<f64>>,
    pub bedrooms             : Option<Option<u16>>,
    pub bathrooms            : Option<Option<u16>>,
    pub parking_slots        : Option<Option<u16>>,
    pub furnishing           : Option<Option<Furnishing>>,
    pub construction_year    : Option<Option<u16>>,
    pub tenure               : Option<Option<Tenure>>,
    pub title_status         : Option<Option<TitleStatus>>,
    pub payment_terms        : Option<Vec<PaymentTerm>>,

    pub model_name           : Option<Option<String>>,
    pub indicative_price_min : Option<Option<f64>>,
    pub indicative_price_max : Option<Option<f64>>,
    pub min_floor_area_sqm   : Option<Option<f64>>,
    pub min_lot_area_sqm     : Option<Option<f64>>,
    pub standard_inclusions  : Option<Option<String>>,
    pub preselling_notes     : Option<Option<String>>,
}

impl ListingPatch {
    pub fn status(status: ListingStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply_to(self, listing: &mut Listing) {
        let Self {
            revision: _,
            title,
            description,
            listing_type,
            status,
            property_category,
            property_type,
            property_subtype,
            province,
            city,
            barangay,
            development,
            street_address,
            transaction_types,
            price,
            price_per_sqm,
            floor_area_sqm,
            lot_area_sqm,
            bedrooms,
            bathrooms,
            parking_slots,
            furnishing,
            construction_year,
            tenure,
            title_status,
            payment_terms,
            model_name,
            indicative_price_min,
            indicative_price_max,
            min_floor_area_sqm,
            min_lot_area_sqm,
            standard_inclusions,
            preselling_notes,
        } = self;

        macro_rules! patch {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = $field {
                        listing.$field = value;
                    }
                )+
            };
        }

        patch!(
            title,
            description,
            listing_type,
            status,
            property_category,
            property_type,
            property_subtype,
            province,
            city,
            barangay,
            development,
            street_address,
            transaction_types,
            price,
            price_per_sqm,
            floor_area_sqm,
            lot_area_sqm,
            bedrooms,
            bathrooms,
            parking_slots,
            furnishing,
            construction_year,
            tenure,
            title_status,
            payment_terms,
            model_name,
            indicative_price_min,
            indicative_price_max,
            min_floor_area_sqm,
            min_lot_area_sqm,
            standard_inclusions,
            preselling_notes,
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedListing {
    pub listing: Listing,
    /// Only set if the status has changed.
    pub previous_status: Option<ListingStatus>,
}

pub fn update_listing<R>(
    repo: &R,
    actor: &User,
    id: Id,
    patch: ListingPatch,
) -> Result<UpdatedListing>
where
    R: ListingRepo + ReferenceRepo,
{
    let original = repo.get_listing(id)?;
    if !listing::access(actor, Operation::Update).permits(&original) {
        check_read(listing::access(actor, Operation::Read), &original)?;
        // A status change that the workflow would never allow
        // is reported as such instead of a generic denial.
        if let Some(to) = patch.status.filter(|to| *to != original.status) {
            workflow::authorize_transition(actor, original.created_by, original.status, to)
                .inspect_err(|err| {
                    log::warn!("Rejected update of listing {id} by user {}: {err}", actor.id);
                })?;
        }
        log::warn!(
            "User {} is not allowed to update listing {id} with status {}",
            actor.id,
            original.status
        );
        return Err(Error::Forbidden);
    }
    if let Some(revision) = patch.revision {
        if revision != original.revision {
            log::warn!(
                "Rejected update of listing {id} based on an outdated revision {}",
                u64::from(revision)
            );
            return Err(RepoError::InvalidVersion.into());
        }
    }

    let mut candidate = original.clone();
    patch.apply_to(&mut candidate);
    candidate.revision = original.revision;
    candidate.updated_at = Timestamp::now();
    let candidate = Pipeline::listing()
        .run(&ChangeContext::update(actor, &original), candidate, repo)
        .inspect_err(|err| {
            log::warn!("Rejected update of listing {id} by user {}: {err}", actor.id);
        })?;

    let listing = repo.update_listing(candidate)?;
    let previous_status = (listing.status != original.status).then_some(original.status);
    match previous_status {
        Some(from) => log::info!(
            "Changed status of listing {id} from {from} to {} by user {}",
            listing.status,
            actor.id
        ),
        None => log::info!("Updated listing {id} by user {}", actor.id),
    }
    Ok(UpdatedListing {
        listing,
        previous_status,
    })
}

pub fn change_listing_status<R>(
    repo: &R,
    actor: &User,
    id: Id,
    status: ListingStatus,
) -> Result<UpdatedListing>
where
    R: ListingRepo + ReferenceRepo,
{
    update_listing(repo, actor, id, ListingPatch::status(status))
}
