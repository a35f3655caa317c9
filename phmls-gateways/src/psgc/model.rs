//! Records of the public PSGC API (<https://psgc.gitlab.io/api>).

use phmls_core::{entities::PsgcCode, gateways::geo::GeoRecord};
use serde::Deserialize;

/// Missing parents are encoded as `false`, e.g. the province
/// of a city in Metro Manila.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ParentCode {
    Code(String),
    #[allow(dead_code)]
    Absent(bool),
}

fn parent(code: &Option<ParentCode>) -> Option<PsgcCode> {
    match code {
        Some(ParentCode::Code(code)) if !code.is_empty() => Some(code.as_str().into()),
        _ => None,
    }
}

#[rustfmt::skip]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsgcRecord {
    code              : String,
    name              : String,
    #[serde(default)]
    region_code       : Option<ParentCode>,
    #[serde(default)]
    province_code     : Option<ParentCode>,
    #[serde(default)]
    city_code         : Option<ParentCode>,
    #[serde(default)]
    municipality_code : Option<ParentCode>,
}

impl PsgcRecord {
    fn into_geo_record(self, parent_code: Option<PsgcCode>) -> GeoRecord {
        GeoRecord {
            code: self.code.into(),
            name: self.name,
            parent_code,
        }
    }

    pub fn into_province(self) -> GeoRecord {
        let parent_code = parent(&self.region_code);
        self.into_geo_record(parent_code)
    }

    pub fn into_city(self) -> GeoRecord {
        let parent_code = parent(&self.province_code);
        self.into_geo_record(parent_code)
    }

    pub fn into_barangay(self) -> GeoRecord {
        let parent_code = parent(&self.city_code).or_else(|| parent(&self.municipality_code));
        self.into_geo_record(parent_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_city_with_province() {
        let json = r#"{
            "code": "0402103000",
            "name": "City of Bacoor",
            "oldName": "",
            "isCapital": false,
            "isCity": true,
            "provinceCode": "0402100000",
            "districtCode": false,
            "regionCode": "0400000000"
        }"#;
        let city = serde_json::from_str::<PsgcRecord>(json).unwrap().into_city();
        assert_eq!("City of Bacoor", city.name);
        assert_eq!(Some(PsgcCode::from("0402100000")), city.parent_code);
    }

    #[test]
    fn parse_missing_parent() {
        let json = r#"{
            "code": "1380600000",
            "name": "City of Manila",
            "provinceCode": false,
            "regionCode": "1300000000"
        }"#;
        let city = serde_json::from_str::<PsgcRecord>(json).unwrap().into_city();
        assert_eq!(None, city.parent_code);
    }

    #[test]
    fn barangays_of_municipalities() {
        let json = r#"{
            "code": "0402101001",
            "name": "Poblacion",
            "cityCode": false,
            "municipalityCode": "0402101000"
        }"#;
        let barangay = serde_json::from_str::<PsgcRecord>(json)
            .unwrap()
            .into_barangay();
        assert_eq!(Some(PsgcCode::from("0402101000")), barangay.parent_code);
    }
}
