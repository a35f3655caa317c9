use super::{check_write, prelude::*};
use crate::{
    authorization::listing,
    hooks::{ChangeContext, Pipeline},
};

/// The editable fields of a listing as supplied by the caller.
///
/// The owner, the timestamps and the revision are always
/// managed by the system.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewListing {
    pub title                : String,
    pub description          : Option<String>,
    pub listing_type         : Option<ListingType>,
    pub status               : Option<ListingStatus>,

    pub property_category    : Option<Id>,
    pub property_type        : Option<Id>,
    pub property_subtype     : Option<Id>,

    pub province             : Option<PsgcCode>,
    pub city                 : Option<PsgcCode>,
    pub barangay             : Option<PsgcCode>,
    pub development          : Option<Id>,
    pub street_address       : Option<String>,

    pub transaction_types    : Vec<TransactionType>,
    pub price                : Option<f64>,
    pub price_per_sqm        : Option<f64>,
    pub floor_area_sqm       : Option<f64>,
    pub lot_area_sqm         : Option<f64>,
    pub bedrooms             : Option<u16>,
    pub bathrooms            : Option<u16>,
    pub parking_slots        : Option<u16>,
    pub furnishing           : Option<Furnishing>,
    pub construction_year    : Option<u16>,
    pub tenure               : Option<Tenure>,
    pub title_status         : Option<TitleStatus>,
    pub payment_terms        : Vec<PaymentTerm>,

    pub model_name           : Option<String>,
    pub indicative_price_min : Option<f64>,
    pub indicative_price_max : Option<f64>,
    pub min_floor_area_sqm   : Option<f64>,
    pub min_lot_area_sqm     : Option<f64>,
    pub standard_inclusions  : Option<String>,
    pub preselling_notes     : Option<String>,
}

impl NewListing {
    pub fn into_listing(self, created_by: Id, now: Timestamp) -> Listing {
        let Self {
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
        Listing {
            id: Id::default(),
            revision: Revision::initial(),
            title,
            description,
            listing_type: listing_type.unwrap_or_default(),
            status: status.unwrap_or_default(),
            created_by,
            created_at: now,
            updated_at: now,
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
        }
    }
}

pub fn create_listing<R>(repo: &R, actor: &User, new_listing: NewListing) -> Result<Listing>
where
    R: ListingRepo + ReferenceRepo,
{
    let candidate = new_listing.into_listing(actor.id, Timestamp::now());
    let listing = Pipeline::listing()
        .run(&ChangeContext::create(actor), candidate, repo)
        .inspect_err(|err| {
            log::warn!("Rejected new listing of user {}: {err}", actor.id);
        })?;
    check_write(listing::access(actor, Operation::Create), &listing)?;
    let listing = repo.create_listing(listing)?;
    log::info!(
        "Created {} listing {} with status {} by user {}",
        listing.listing_type,
        listing.id,
        listing.status,
        actor.id
    );
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::hooks;

    #[test]
    fn agent_creates_a_draft() {
        let db = MockDb::seeded();
        let agent = user(2, Role::Agent);
        let listing = create_listing(
            &db,
            &agent,
            NewListing {
                status: Some(ListingStatus::Draft),
                ..new_resale()
            },
        )
        .unwrap();
        assert_eq!(ListingStatus::Draft, listing.status);
        assert_eq!(Id::new(2), listing.created_by);
        assert!(listing.revision.is_initial());
        assert_eq!(1, db.listings.borrow().len());
    }

    #[test]
    fn preselling_without_development() {
        let db = MockDb::seeded();
        let admin = user(1, Role::Admin);
        let err = create_listing(
            &db,
            &admin,
            NewListing {
                development: None,
                ..new_preselling()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("Development"));
        assert!(db.listings.borrow().is_empty());
    }

    #[test]
    fn preselling_without_model_name() {
        let db = MockDb::seeded();
        let admin = user(1, Role::Admin);
        let err = create_listing(
            &db,
            &admin,
            NewListing {
                model_name: None,
                ..new_preselling()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(hooks::Error::Required("Model Name"))
        ));
    }

    #[test]
    fn admin_creates_preselling_listings() {
        let db = MockDb::seeded();
        let admin = user(1, Role::Admin);
        let listing = create_listing(&db, &admin, new_preselling()).unwrap();
        assert_eq!(ListingType::Preselling, listing.listing_type);
        assert_eq!(None, listing.price);
    }

    #[test]
    fn resale_listings_have_no_preselling_fields() {
        let db = MockDb::seeded();
        let agent = user(2, Role::Agent);
        let err = create_listing(
            &db,
            &agent,
            NewListing {
                model_name: Some("Acacia".into()),
                ..new_resale()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(hooks::Error::PresellingOnlyFields(_))
        ));
    }

    #[test]
    fn location_must_be_consistent() {
        let db = MockDb::seeded();
        let agent = user(2, Role::Agent);
        let err = create_listing(
            &db,
            &agent,
            NewListing {
                barangay: Some(OTHER_BARANGAY.into()),
                ..new_resale()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(hooks::Error::LocationHierarchy { .. })
        ));
    }
}
