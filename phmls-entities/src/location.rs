//! Philippine geographic reference data.
//!
//! Provinces, cities (including municipalities) and barangays are identified
//! by their Philippine Standard Geographic Code (PSGC). Developments are
//! named projects or subdivisions that are maintained locally and located
//! within a single barangay.

use std::fmt;

use crate::id::Id;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PsgcCode(String);

impl PsgcCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl From<String> for PsgcCode {
    fn from(from: String) -> Self {
        Self(from.trim().to_owned())
    }
}

impl From<&str> for PsgcCode {
    fn from(from: &str) -> Self {
        Self(from.trim().to_owned())
    }
}

impl From<PsgcCode> for String {
    fn from(from: PsgcCode) -> Self {
        from.0
    }
}

impl AsRef<str> for PsgcCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PsgcCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Province {
    pub code : PsgcCode,
    pub name : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub code     : PsgcCode,
    pub name     : String,
    pub province : PsgcCode,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barangay {
    pub code : PsgcCode,
    pub name : String,
    pub city : PsgcCode,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Development {
    pub id        : Id,
    pub name      : String,
    pub barangay  : PsgcCode,
    pub developer : Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psgc_codes_are_numeric() {
        assert!(PsgcCode::from(" 0402100000 ").is_valid());
        assert!(!PsgcCode::from("").is_valid());
        assert!(!PsgcCode::from("04-021").is_valid());
    }
}
