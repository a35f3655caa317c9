//! Conversions from caller-facing records into use case inputs.

use phmls_application::prelude as flows;
use phmls_boundary as json;
use phmls_core::{entities::*, usecases};

fn convert_all<F, T>(from: Vec<F>) -> Vec<T>
where
    T: From<F>,
{
    from.into_iter().map(T::from).collect()
}

fn clearable<F, T>(from: Option<Option<F>>) -> Option<Option<T>>
where
    T: From<F>,
{
    from.map(|value| value.map(T::from))
}

pub fn new_listing(from: json::NewListing) -> usecases::NewListing {
    let json::NewListing {
        title,
        description,
        listing_type,
        status,
        fields,
    } = from;
    let json::ListingFields {
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
    } = fields;
    usecases::NewListing {
        title,
        description,
        listing_type: listing_type.map(Into::into),
        status: status.map(Into::into),
        property_category: property_category.map(Id::from),
        property_type: property_type.map(Id::from),
        property_subtype: property_subtype.map(Id::from),
        province: province.map(PsgcCode::from),
        city: city.map(PsgcCode::from),
        barangay: barangay.map(PsgcCode::from),
        development: development.map(Id::from),
        street_address,
        transaction_types: convert_all(transaction_types),
        price,
        price_per_sqm,
        floor_area_sqm,
        lot_area_sqm,
        bedrooms,
        bathrooms,
        parking_slots,
        furnishing: furnishing.map(Into::into),
        construction_year,
        tenure: tenure.map(Into::into),
        title_status: title_status.map(Into::into),
        payment_terms: convert_all(payment_terms),
        model_name,
        indicative_price_min,
        indicative_price_max,
        min_floor_area_sqm,
        min_lot_area_sqm,
        standard_inclusions,
        preselling_notes,
    }
}

pub fn listing_patch(from: json::ListingPatch) -> usecases::ListingPatch {
    let json::ListingPatch {
        revision,
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
    } = from;
    usecases::ListingPatch {
        revision: revision.map(Revision::from),
        title,
        description,
        listing_type: listing_type.map(Into::into),
        status: status.map(Into::into),
        property_category: clearable(property_category),
        property_type: clearable(property_type),
        property_subtype: clearable(property_subtype),
        province: clearable(province),
        city: clearable(city),
        barangay: clearable(barangay),
        development: clearable(development),
        street_address,
        transaction_types: transaction_types.map(convert_all),
        price,
        price_per_sqm,
        floor_area_sqm,
        lot_area_sqm,
        bedrooms,
        bathrooms,
        parking_slots,
        furnishing: clearable(furnishing),
        construction_year,
        tenure: clearable(tenure),
        title_status: clearable(title_status),
        payment_terms: payment_terms.map(convert_all),
        model_name,
        indicative_price_min,
        indicative_price_max,
        min_floor_area_sqm,
        min_lot_area_sqm,
        standard_inclusions,
        preselling_notes,
    }
}

pub fn new_user(from: json::NewUser) -> usecases::NewUser {
    let json::NewUser { email, name, role } = from;
    usecases::NewUser {
        email,
        name,
        role: role.into(),
    }
}

pub fn reference_data(from: json::ReferenceData) -> flows::ReferenceData {
    let json::ReferenceData {
        provinces,
        cities,
        barangays,
        developments,
        property_categories,
        property_types,
        property_subtypes,
        users,
    } = from;
    flows::ReferenceData {
        provinces: convert_all(provinces),
        cities: convert_all(cities),
        barangays: convert_all(barangays),
        developments: convert_all(developments),
        property_categories: convert_all(property_categories),
        property_types: convert_all(property_types),
        property_subtypes: convert_all(property_subtypes),
        users: users.into_iter().map(new_user).collect(),
    }
}

pub fn imported_locations(
    province: &PsgcCode,
    from: usecases::ImportedLocations,
) -> json::ImportedLocations {
    let usecases::ImportedLocations { cities, barangays } = from;
    json::ImportedLocations {
        province: province.to_string(),
        cities,
        barangays,
    }
}
