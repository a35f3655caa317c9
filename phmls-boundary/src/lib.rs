//! Caller-facing record shapes.
//!
//! All records are flat JSON objects with camelCase keys. Timestamps
//! are unix timestamps in milliseconds, ids are plain numbers and PSGC
//! codes are strings.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    #[default]
    Resale,
    Preselling,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Draft,
    Submitted,
    NeedsRevision,
    Published,
    Rejected,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Rent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Furnishing {
    Unfurnished,
    SemiFurnished,
    FullyFurnished,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tenure {
    Freehold,
    Leasehold,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TitleStatus {
    Clean,
    Mortgaged,
    Pending,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTerm {
    Cash,
    BankFinancing,
    PagIbig,
    InHouseFinancing,
    Installment,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Agent,
    Approver,
    Admin,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Internal,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ListingSubmitted,
    ListingPublished,
    ListingNeedsRevision,
    ListingRejected,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id                   : u64,
    pub revision             : u64,
    pub title                : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description          : Option<String>,
    pub listing_type         : ListingType,
    pub status               : ListingStatus,
    pub created_by           : u64,
    pub created_at           : i64,
    pub updated_at           : i64,
    #[serde(flatten)]
    pub fields               : ListingFields,
}

/// The editable fields of a listing besides its title,
/// description, type and status.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_category    : Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type        : Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_subtype     : Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province             : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city                 : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barangay             : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub development          : Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address       : Option<String>,

    pub transaction_types    : Vec<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price                : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_sqm        : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_area_sqm       : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_area_sqm         : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms             : Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms            : Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_slots        : Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnishing           : Option<Furnishing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_year    : Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure               : Option<Tenure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_status         : Option<TitleStatus>,
    pub payment_terms        : Vec<PaymentTerm>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name           : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicative_price_min : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicative_price_max : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_floor_area_sqm   : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_lot_area_sqm     : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_inclusions  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preselling_notes     : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title        : String,
    #[serde(default)]
    pub description  : Option<String>,
    #[serde(default)]
    pub listing_type : Option<ListingType>,
    #[serde(default)]
    pub status       : Option<ListingStatus>,
    #[serde(flatten)]
    pub fields       : ListingFields,
}

/// Distinguishes an absent key (`None`) from an
/// explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Only the keys that are present are changed,
/// `null` clears an optional field.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision             : Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title                : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub description          : Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type         : Option<ListingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status               : Option<ListingStatus>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub property_category    : Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub property_type        : Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub property_subtype     : Option<Option<u64>>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub province             : Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub city                 : Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub barangay             : Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub development          : Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub street_address       : Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_types    : Option<Vec<TransactionType>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub price                : Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub price_per_sqm        : Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub floor_area_sqm       : Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub lot_area_sqm         : Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub bedrooms             : Option<Option<u16>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub bathrooms            : Option<Option<u16>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub parking_slots        : Option<Option<u16>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub furnishing           : Option<Option<Furnishing>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub construction_year    : Option<Option<u16>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub tenure               : Option<Option<Tenure>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub title_status         : Option<Option<TitleStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms        : Option<Vec<PaymentTerm>>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub model_name           : Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub indicative_price_min : Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub indicative_price_max : Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub min_floor_area_sqm   : Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub min_lot_area_sqm     : Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub standard_inclusions  : Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "double_option")]
    pub preselling_notes     : Option<Option<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id          : u64,
    pub listing     : u64,
    pub title       : String,
    pub file_name   : String,
    pub visibility  : Visibility,
    pub uploaded_by : u64,
    pub created_at  : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id         : u64,
    pub recipient  : u64,
    pub listing    : u64,
    pub kind       : NotificationKind,
    pub message    : String,
    pub read       : bool,
    pub created_at : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub id             : u64,
    pub token          : String,
    pub listing        : u64,
    pub created_by     : u64,
    pub is_active      : bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at     : Option<i64>,
    pub view_count     : u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_viewed_at : Option<i64>,
    pub created_at     : i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Province {
    pub code: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub code: String,
    pub name: String,
    pub province: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Barangay {
    pub code: String,
    pub name: String,
    pub city: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Development {
    pub id: u64,
    pub name: String,
    pub barangay: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PropertyCategory {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyType {
    pub id: u64,
    pub name: String,
    pub category: u64,
    #[serde(default)]
    pub lot_like: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySubtype {
    pub id: u64,
    pub name: String,
    pub property_type: u64,
}

/// Input of the `seed` command.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceData {
    pub provinces: Vec<Province>,
    pub cities: Vec<City>,
    pub barangays: Vec<Barangay>,
    pub developments: Vec<Development>,
    pub property_categories: Vec<PropertyCategory>,
    pub property_types: Vec<PropertyType>,
    pub property_subtypes: Vec<PropertySubtype>,
    pub users: Vec<NewUser>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportedLocations {
    pub province: String,
    pub cities: usize,
    pub barangays: usize,
}
