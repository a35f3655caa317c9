use thiserror::Error;

use crate::entities::PsgcCode;

/// A named unit of the Philippine Standard Geographic Code
/// as returned by the reference service.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoRecord {
    pub code        : PsgcCode,
    pub name        : String,
    pub parent_code : Option<PsgcCode>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(String),
    #[error("Geographic reference service unavailable: {0}")]
    Unavailable(String),
}

pub trait GeoReferenceGateway {
    fn province(&self, code: &PsgcCode) -> Result<GeoRecord, Error>;
    fn cities_of_province(&self, code: &PsgcCode) -> Result<Vec<GeoRecord>, Error>;
    fn barangays_of_city(&self, code: &PsgcCode) -> Result<Vec<GeoRecord>, Error>;
}
