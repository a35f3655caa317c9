use super::*;
use crate::entities::*;

/// Checks that the barangay lies in the city, the city in the
/// province and the development, if any, in the barangay.
#[derive(Debug, Clone, Copy)]
pub struct LocationHierarchy;

impl Hook for LocationHierarchy {
    fn name(&self) -> &'static str {
        "location_hierarchy"
    }

    fn run(&self, _: &ChangeContext, candidate: Listing, refs: &dyn ReferenceRepo) -> Result<Listing> {
        let province = candidate.province.as_ref().ok_or(Error::Required("Province"))?;
        let city = candidate.city.as_ref().ok_or(Error::Required("City"))?;
        let barangay = candidate.barangay.as_ref().ok_or(Error::Required("Barangay"))?;

        lookup(refs.get_province(province), "Province", province)?;

        let c = lookup(refs.get_city(city), "City", city)?;
        if &c.province != province {
            return Err(Error::LocationHierarchy {
                child: "City",
                child_ref: city.to_string(),
                parent: "Province",
                parent_ref: province.to_string(),
            });
        }

        let b = lookup(refs.get_barangay(barangay), "Barangay", barangay)?;
        if &b.city != city {
            return Err(Error::LocationHierarchy {
                child: "Barangay",
                child_ref: barangay.to_string(),
                parent: "City",
                parent_ref: city.to_string(),
            });
        }

        if let Some(development) = candidate.development {
            let d = lookup(refs.get_development(development), "Development", development)?;
            if &d.barangay != barangay {
                return Err(Error::LocationHierarchy {
                    child: "Development",
                    child_ref: d.name,
                    parent: "Barangay",
                    parent_ref: barangay.to_string(),
                });
            }
        }
        Ok(candidate)
    }
}
