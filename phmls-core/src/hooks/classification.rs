use super::*;
use crate::entities::*;

/// Clears dependent classification fields when their parent
/// changes during an update: a new category clears type and
/// subtype, a new type clears the subtype.
#[derive(Debug, Clone, Copy)]
pub struct ResetClassification;

impl Hook for ResetClassification {
    fn name(&self) -> &'static str {
        "reset_classification"
    }

    fn run(&self, ctx: &ChangeContext, mut candidate: Listing, _: &dyn ReferenceRepo) -> Result<Listing> {
        let Some(original) = ctx.original else {
            return Ok(candidate);
        };
        if candidate.property_category != original.property_category {
            if candidate.property_type.is_some() || candidate.property_subtype.is_some() {
                log::debug!(
                    "Resetting property type and subtype of listing {} after its category changed",
                    original.id
                );
            }
            candidate.property_type = None;
            candidate.property_subtype = None;
        } else if candidate.property_type != original.property_type {
            if candidate.property_subtype.is_some() {
                log::debug!(
                    "Resetting property subtype of listing {} after its type changed",
                    original.id
                );
            }
            candidate.property_subtype = None;
        }
        Ok(candidate)
    }
}

/// Checks that the subtype belongs to the type and
/// the type to the category.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationHierarchy;

impl Hook for ClassificationHierarchy {
    fn name(&self) -> &'static str {
        "classification_hierarchy"
    }

    fn run(&self, _: &ChangeContext, candidate: Listing, refs: &dyn ReferenceRepo) -> Result<Listing> {
        let category = candidate
            .property_category
            .ok_or(Error::Required("Property Category"))?;
        lookup(refs.get_property_category(category), "Property Category", category)?;

        let Some(property_type) = candidate.property_type else {
            if candidate.property_subtype.is_some() {
                return Err(Error::Required("Property Type"));
            }
            return Ok(candidate);
        };
        let t = lookup(refs.get_property_type(property_type), "Property Type", property_type)?;
        if t.category != category {
            return Err(Error::ClassificationHierarchy {
                child: "Property Type",
                child_ref: t.name,
                parent: "Property Category",
                parent_ref: category.to_string(),
            });
        }

        if let Some(subtype) = candidate.property_subtype {
            let s = lookup(refs.get_property_subtype(subtype), "Property Subtype", subtype)?;
            if s.property_type != property_type {
                return Err(Error::ClassificationHierarchy {
                    child: "Property Subtype",
                    child_ref: s.name,
                    parent: "Property Type",
                    parent_ref: t.name,
                });
            }
        }
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn check(listing: Listing) -> Result<Listing> {
        let agent = user(1, Role::Agent);
        ClassificationHierarchy.run(&ChangeContext::create(&agent), listing, &MockDb::seeded())
    }

    fn reset(original: &Listing, candidate: Listing) -> Listing {
        let agent = user(1, Role::Agent);
        ResetClassification
            .run(
                &ChangeContext::update(&agent, original),
                candidate,
                &MockDb::default(),
            )
            .unwrap()
    }

    #[test]
    fn consistent_classification() {
        assert!(check(valid_resale(1)).is_ok());
        let mut listing = valid_resale(1);
        listing.property_type = None;
        listing.property_subtype = None;
        assert!(check(listing).is_ok());
    }

    #[test]
    fn category_is_required() {
        let mut listing = valid_resale(1);
        listing.property_category = None;
        assert_eq!(Some("Property Category"), check(listing).unwrap_err().field());
    }

    #[test]
    fn subtype_requires_a_type() {
        let mut listing = valid_resale(1);
        listing.property_type = None;
        assert_eq!(Some("Property Type"), check(listing).unwrap_err().field());
    }

    #[test]
    fn type_of_another_category() {
        let mut listing = valid_resale(1);
        listing.property_type = Some(OFFICE.into());
        listing.property_subtype = None;
        let err = check(listing).unwrap_err();
        assert!(matches!(
            err,
            Error::ClassificationHierarchy {
                child: "Property Type",
                ..
            }
        ));
    }

    #[test]
    fn subtype_of_another_type() {
        let mut listing = valid_resale(1);
        listing.property_subtype = Some(RETAIL.into());
        let err = check(listing).unwrap_err();
        assert!(matches!(
            err,
            Error::ClassificationHierarchy {
                child: "Property Subtype",
                parent: "Property Type",
                ..
            }
        ));
    }

    #[test]
    fn new_type_clears_only_the_subtype() {
        let original = valid_resale(1);
        let mut candidate = original.clone();
        candidate.property_type = Some(LOT.into());
        let listing = reset(&original, candidate);
        assert_eq!(Some(Id::new(RESIDENTIAL)), listing.property_category);
        assert_eq!(Some(Id::new(LOT)), listing.property_type);
        assert_eq!(None, listing.property_subtype);
    }

    #[test]
    fn unchanged_classification_is_kept() {
        let original = valid_resale(1);
        let listing = reset(&original, original.clone());
        assert_eq!(original.property_subtype, listing.property_subtype);
    }

    #[test]
    fn nothing_is_reset_on_creation() {
        let agent = user(1, Role::Agent);
        let listing = ResetClassification
            .run(&ChangeContext::create(&agent), valid_resale(1), &MockDb::default())
            .unwrap();
        assert_eq!(Some(Id::new(TOWNHOUSE)), listing.property_subtype);
    }
}
