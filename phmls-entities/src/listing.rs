use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{id::*, location::PsgcCode, revision::*, time::Timestamp};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ListingType {
    /// Existing, ready properties that are priced directly.
    #[default]
    Resale,
    /// Properties under construction, priced as an indicative
    /// range per unit model.
    Preselling,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ListingStatus {
    #[default]
    Draft,
    Submitted,
    NeedsRevision,
    Published,
    Rejected,
}

impl ListingStatus {
    /// Published and rejected listings only leave their
    /// state by an explicit administrative action.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Published | Self::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransactionType {
    Sale,
    Rent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Furnishing {
    Unfurnished,
    SemiFurnished,
    FullyFurnished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tenure {
    Freehold,
    Leasehold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TitleStatus {
    Clean,
    Mortgaged,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PaymentTerm {
    Cash,
    BankFinancing,
    PagIbig,
    InHouseFinancing,
    Installment,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    pub id                   : Id,
    pub revision             : Revision,
    pub title                : String,
    pub description          : Option<String>,
    pub listing_type         : ListingType,
    pub status               : ListingStatus,
    pub created_by           : Id,
    pub created_at           : Timestamp,
    pub updated_at           : Timestamp,

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

impl Listing {
    pub fn is_created_by(&self, user_id: Id) -> bool {
        self.created_by == user_id
    }
}
