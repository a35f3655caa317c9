use super::prelude::*;
use crate::{
    gateways::geo::{GeoRecord, GeoReferenceGateway},
    hooks,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportedLocations {
    pub cities: usize,
    pub barangays: usize,
}

/// Copies a province with all of its cities and barangays from
/// the geographic reference service into the location repository.
pub fn import_province<G, R>(
    gateway: &G,
    repo: &R,
    actor: &User,
    code: &PsgcCode,
) -> Result<ImportedLocations>
where
    G: GeoReferenceGateway + ?Sized,
    R: LocationRepo,
{
    if !actor.is_admin() {
        return Err(Error::Forbidden);
    }
    if !code.is_valid() {
        return Err(hooks::Error::UnknownReference {
            field: "Province",
            value: code.to_string(),
        }
        .into());
    }
    let GeoRecord { code, name, .. } = gateway.province(code)?;
    repo.upsert_province(Province {
        code: code.clone(),
        name,
    })?;
    let mut imported = ImportedLocations::default();
    for city in gateway.cities_of_province(&code)? {
        let barangays = gateway.barangays_of_city(&city.code)?;
        repo.upsert_city(City {
            code: city.code.clone(),
            name: city.name,
            province: code.clone(),
        })?;
        imported.cities += 1;
        for barangay in barangays {
            repo.upsert_barangay(Barangay {
                code: barangay.code,
                name: barangay.name,
                city: city.code.clone(),
            })?;
            imported.barangays += 1;
        }
    }
    log::info!(
        "Imported province {code} with {} cities and {} barangays",
        imported.cities,
        imported.barangays
    );
    Ok(imported)
}
