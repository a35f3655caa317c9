//! Three level property classification: category, type and subtype.

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyCategory {
    pub id   : Id,
    pub name : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyType {
    pub id       : Id,
    pub name     : String,
    pub category : Id,
    /// Lots are priced by area, e.g. residential, commercial
    /// or agricultural lots and farm land.
    pub lot_like : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySubtype {
    pub id            : Id,
    pub name          : String,
    pub property_type : Id,
}
