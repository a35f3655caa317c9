use super::*;

use phmls_core::gateways::geo::GeoReferenceGateway;

pub fn import_province(
    connections: &Connections,
    gateway: &dyn GeoReferenceGateway,
    actor: Id,
    code: &PsgcCode,
) -> Result<usecases::ImportedLocations> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let actor = usecases::authorize_user(conn, actor)?;
        usecases::import_province(gateway, conn, &actor, code).inspect_err(|err| {
            warn!("Failed to import province {code}: {err}");
        })
    })?)
}
