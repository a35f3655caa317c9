use super::*;
use crate::entities::*;

/// Enforces the fields that depend on the listing type.
///
/// Preselling units are priced as an indicative range per unit
/// model within a development. Resale properties carry a price
/// and, for lots, the lot area and the price per square meter.
/// Fields of the other listing type must be empty.
#[derive(Debug, Clone, Copy)]
pub struct ListingTypeFields;

impl Hook for ListingTypeFields {
    fn name(&self) -> &'static str {
        "listing_type_fields"
    }

    fn run(
        &self,
        _: &ChangeContext,
        candidate: Listing,
        refs: &dyn ReferenceRepo,
    ) -> Result<Listing> {
        match candidate.listing_type {
            ListingType::Preselling => check_preselling(&candidate)?,
            ListingType::Resale => {
                let lot_like = match candidate.property_type {
                    Some(id) => lookup(refs.get_property_type(id), "Property Type", id)?.lot_like,
                    None => false,
                };
                check_resale(&candidate, lot_like)?;
            }
        }
        Ok(candidate)
    }
}

fn check_preselling(listing: &Listing) -> Result<()> {
    if listing.development.is_none() {
        return Err(Error::Required("Development"));
    }
    if listing.model_name.is_none() {
        return Err(Error::Required("Model Name"));
    }
    let min_price = optional_positive(listing.indicative_price_min, "Indicative Price Min")?;
    let max_price = optional_positive(listing.indicative_price_max, "Indicative Price Max")?;
    match (min_price, max_price) {
        (None, None) => {
            return Err(Error::RequiredOneOf(
                "Indicative Price Min",
                "Indicative Price Max",
            ))
        }
        (Some(min), Some(max)) if min > max => {
            return Err(Error::InvalidRange {
                min: "Indicative Price Min",
                max: "Indicative Price Max",
            })
        }
        _ => {}
    }
    let min_floor = optional_positive(listing.min_floor_area_sqm, "Min Floor Area")?;
    let min_lot = optional_positive(listing.min_lot_area_sqm, "Min Lot Area")?;
    if min_floor.is_none() && min_lot.is_none() {
        return Err(Error::RequiredOneOf("Min Floor Area", "Min Lot Area"));
    }
    let resale_only = resale_only_fields(listing);
    if !resale_only.is_empty() {
        return Err(Error::ResaleOnlyFields(resale_only));
    }
    Ok(())
}

fn check_resale(listing: &Listing, lot_like: bool) -> Result<()> {
    required_positive(listing.price, "Price")?;
    if lot_like {
        required_positive(listing.lot_area_sqm, "Lot Area")?;
        required_positive(listing.price_per_sqm, "Price per Sqm")?;
    } else {
        optional_positive(listing.lot_area_sqm, "Lot Area")?;
        optional_positive(listing.price_per_sqm, "Price per Sqm")?;
    }
    optional_positive(listing.floor_area_sqm, "Floor Area")?;
    let preselling_only = preselling_only_fields(listing);
    if !preselling_only.is_empty() {
        return Err(Error::PresellingOnlyFields(preselling_only));
    }
    Ok(())
}

fn required_positive(value: Option<f64>, field: &'static str) -> Result<f64> {
    optional_positive(value, field)?.ok_or(Error::Required(field))
}

fn optional_positive(value: Option<f64>, field: &'static str) -> Result<Option<f64>> {
    match value {
        Some(v) if v.is_nan() || v <= 0.0 => Err(Error::NotPositive(field)),
        value => Ok(value),
    }
}

#[rustfmt::skip]
fn resale_only_fields(listing: &Listing) -> Vec<&'static str> {
    [
        ("Price"             , listing.price.is_some()),
        ("Price per Sqm"     , listing.price_per_sqm.is_some()),
        ("Floor Area"        , listing.floor_area_sqm.is_some()),
        ("Lot Area"          , listing.lot_area_sqm.is_some()),
        ("Furnishing"        , listing.furnishing.is_some()),
        ("Construction Year" , listing.construction_year.is_some()),
        ("Tenure"            , listing.tenure.is_some()),
        ("Title Status"      , listing.title_status.is_some()),
    ]
    .into_iter()
    .filter_map(|(label, is_set)| is_set.then_some(label))
    .collect()
}

#[rustfmt::skip]
fn preselling_only_fields(listing: &Listing) -> Vec<&'static str> {
    [
        ("Model Name"           , listing.model_name.is_some()),
        ("Indicative Price Min" , listing.indicative_price_min.is_some()),
        ("Indicative Price Max" , listing.indicative_price_max.is_some()),
        ("Min Floor Area"       , listing.min_floor_area_sqm.is_some()),
        ("Min Lot Area"         , listing.min_lot_area_sqm.is_some()),
        ("Standard Inclusions"  , listing.standard_inclusions.is_some()),
        ("Preselling Notes"     , listing.preselling_notes.is_some()),
    ]
    .into_iter()
    .filter_map(|(label, is_set)| is_set.then_some(label))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn check(listing: Listing) -> Result<Listing> {
        let admin = user(1, Role::Admin);
        ListingTypeFields.run(&ChangeContext::create(&admin), listing, &MockDb::seeded())
    }

    #[test]
    fn preselling_requires_a_development() {
        let mut listing = valid_preselling(1);
        listing.development = None;
        let err = check(listing).unwrap_err();
        assert_eq!("Development is required", err.to_string());
    }

    #[test]
    fn preselling_requires_a_model_name() {
        let mut listing = valid_preselling(1);
        listing.model_name = None;
        let err = check(listing).unwrap_err();
        assert_eq!("Model Name is required", err.to_string());
    }

    #[test]
    fn preselling_requires_an_indicative_price() {
        let mut listing = valid_preselling(1);
        listing.indicative_price_min = None;
        listing.indicative_price_max = None;
        assert!(matches!(
            check(listing).unwrap_err(),
            Error::RequiredOneOf("Indicative Price Min", "Indicative Price Max")
        ));
        let mut listing = valid_preselling(1);
        listing.indicative_price_min = None;
        assert!(check(listing).is_ok());
    }

    #[test]
    fn indicative_price_range_must_be_ordered() {
        let mut listing = valid_preselling(1);
        listing.indicative_price_min = Some(5_000_000.0);
        listing.indicative_price_max = Some(4_000_000.0);
        assert!(matches!(
            check(listing).unwrap_err(),
            Error::InvalidRange { .. }
        ));
    }

    #[test]
    fn preselling_requires_a_minimum_area() {
        let mut listing = valid_preselling(1);
        listing.min_floor_area_sqm = None;
        assert!(matches!(
            check(listing.clone()).unwrap_err(),
            Error::RequiredOneOf("Min Floor Area", "Min Lot Area")
        ));
        listing.min_lot_area_sqm = Some(0.0);
        assert_eq!(Some("Min Lot Area"), check(listing).unwrap_err().field());
    }

    #[test]
    fn preselling_rejects_all_resale_fields() {
        let mut listing = valid_preselling(1);
        listing.price = Some(1.0);
        listing.tenure = Some(Tenure::Freehold);
        listing.furnishing = Some(Furnishing::Unfurnished);
        let err = check(listing).unwrap_err();
        assert_eq!(
            "Preselling listings must not contain resale-only fields: Price, Furnishing, Tenure",
            err.to_string()
        );
    }

    #[test]
    fn resale_requires_a_positive_price() {
        let mut listing = valid_resale(1);
        listing.price = None;
        assert_eq!("Price is required", check(listing).unwrap_err().to_string());
        let mut listing = valid_resale(1);
        listing.price = Some(0.0);
        assert_eq!(
            "Price must be greater than zero",
            check(listing).unwrap_err().to_string()
        );
    }

    #[test]
    fn lots_require_area_and_price_per_sqm() {
        let mut listing = valid_resale(1);
        listing.property_type = Some(LOT.into());
        listing.property_subtype = None;
        assert_eq!(Some("Lot Area"), check(listing.clone()).unwrap_err().field());
        listing.lot_area_sqm = Some(300.0);
        assert_eq!(
            Some("Price per Sqm"),
            check(listing.clone()).unwrap_err().field()
        );
        listing.price_per_sqm = Some(15_000.0);
        assert!(check(listing).is_ok());
    }

    #[test]
    fn resale_rejects_all_preselling_fields() {
        let mut listing = valid_resale(1);
        listing.model_name = Some("Acacia".into());
        listing.indicative_price_max = Some(1.0);
        let err = check(listing).unwrap_err();
        assert!(matches!(
            err,
            Error::PresellingOnlyFields(ref fields)
                if fields == &["Model Name", "Indicative Price Max"]
        ));
    }
}
