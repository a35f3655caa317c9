use super::*;

use phmls_core::repositories::{ClassificationRepo, LocationRepo, UserRepo};

/// Reference collections and accounts to load into
/// an empty or existing database.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub provinces: Vec<Province>,
    pub cities: Vec<City>,
    pub barangays: Vec<Barangay>,
    pub developments: Vec<Development>,
    pub property_categories: Vec<PropertyCategory>,
    pub property_types: Vec<PropertyType>,
    pub property_subtypes: Vec<PropertySubtype>,
    pub users: Vec<usecases::NewUser>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub locations: usize,
    pub classifications: usize,
    pub users: usize,
}

/// Upserts all reference records and creates the missing
/// accounts within a single transaction.
///
/// Accounts are created on behalf of the first admin. If the
/// database has no users yet the first account becomes that admin.
pub fn seed(connections: &Connections, data: ReferenceData) -> Result<SeedSummary> {
    let ReferenceData {
        provinces,
        cities,
        barangays,
        developments,
        property_categories,
        property_types,
        property_subtypes,
        users,
    } = data;
    Ok(connections.exclusive()?.transaction(|conn| {
        let mut summary = SeedSummary {
            locations: provinces.len() + cities.len() + barangays.len() + developments.len(),
            classifications: property_categories.len()
                + property_types.len()
                + property_subtypes.len(),
            users: 0,
        };
        for province in provinces {
            conn.upsert_province(province)?;
        }
        for city in cities {
            conn.upsert_city(city)?;
        }
        for barangay in barangays {
            conn.upsert_barangay(barangay)?;
        }
        for development in developments {
            conn.upsert_development(development)?;
        }
        for category in property_categories {
            conn.upsert_property_category(category)?;
        }
        for property_type in property_types {
            conn.upsert_property_type(property_type)?;
        }
        for subtype in property_subtypes {
            conn.upsert_property_subtype(subtype)?;
        }
        for new_user in users {
            let email = new_user.email.trim().to_lowercase();
            if conn.try_get_user_by_email(&email)?.is_some() {
                debug!("Skipping existing user {}", new_user.email);
                continue;
            }
            let admin = conn.find_users_by_role(Role::Admin)?.into_iter().next();
            usecases::create_user(conn, admin.as_ref(), new_user)?;
            summary.users += 1;
        }
        info!(
            "Seeded {} location(s), {} classification(s) and {} user(s)",
            summary.locations, summary.classifications, summary.users
        );
        Ok::<_, usecases::Error>(summary)
    })?)
}
