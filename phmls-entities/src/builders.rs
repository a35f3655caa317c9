pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{listing_builder::*, user_builder::*};

pub mod listing_builder {

    use super::*;
    use crate::{id::*, listing::*, location::*, revision::*, time::*};

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.listing.id = id.into();
            self
        }
        pub fn revision(mut self, v: u64) -> Self {
            self.listing.revision = v.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.listing.title = title.into();
            self
        }
        pub fn listing_type(mut self, listing_type: ListingType) -> Self {
            self.listing.listing_type = listing_type;
            self
        }
        pub fn status(mut self, status: ListingStatus) -> Self {
            self.listing.status = status;
            self
        }
        pub fn created_by(mut self, user_id: u64) -> Self {
            self.listing.created_by = user_id.into();
            self
        }
        pub fn category(mut self, id: u64) -> Self {
            self.listing.property_category = Some(id.into());
            self
        }
        pub fn property_type(mut self, id: u64) -> Self {
            self.listing.property_type = Some(id.into());
            self
        }
        pub fn subtype(mut self, id: u64) -> Self {
            self.listing.property_subtype = Some(id.into());
            self
        }
        pub fn location(mut self, province: &str, city: &str, barangay: &str) -> Self {
            self.listing.province = Some(province.into());
            self.listing.city = Some(city.into());
            self.listing.barangay = Some(barangay.into());
            self
        }
        pub fn development(mut self, id: u64) -> Self {
            self.listing.development = Some(id.into());
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.listing.price = Some(price);
            self
        }
        pub fn price_per_sqm(mut self, price: f64) -> Self {
            self.listing.price_per_sqm = Some(price);
            self
        }
        pub fn floor_area(mut self, sqm: f64) -> Self {
            self.listing.floor_area_sqm = Some(sqm);
            self
        }
        pub fn lot_area(mut self, sqm: f64) -> Self {
            self.listing.lot_area_sqm = Some(sqm);
            self
        }
        pub fn furnishing(mut self, furnishing: Furnishing) -> Self {
            self.listing.furnishing = Some(furnishing);
            self
        }
        pub fn model_name(mut self, name: &str) -> Self {
            self.listing.model_name = Some(name.into());
            self
        }
        pub fn indicative_price(mut self, min: Option<f64>, max: Option<f64>) -> Self {
            self.listing.indicative_price_min = min;
            self.listing.indicative_price_max = max;
            self
        }
        pub fn min_floor_area(mut self, sqm: f64) -> Self {
            self.listing.min_floor_area_sqm = Some(sqm);
            self
        }
        pub fn min_lot_area(mut self, sqm: f64) -> Self {
            self.listing.min_lot_area_sqm = Some(sqm);
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> ListingBuild {
            let now = Timestamp::now();
            ListingBuild {
                listing: Listing {
                    id: Id::default(),
                    revision: Revision::initial(),
                    title: "".into(),
                    description: None,
                    listing_type: ListingType::Resale,
                    status: ListingStatus::Draft,
                    created_by: Id::default(),
                    created_at: now,
                    updated_at: now,
                    property_category: None,
                    property_type: None,
                    property_subtype: None,
                    province: None,
                    city: None,
                    barangay: None,
                    development: None,
                    street_address: None,
                    transaction_types: vec![TransactionType::Sale],
                    price: None,
                    price_per_sqm: None,
                    floor_area_sqm: None,
                    lot_area_sqm: None,
                    bedrooms: None,
                    bathrooms: None,
                    parking_slots: None,
                    furnishing: None,
                    construction_year: None,
                    tenure: None,
                    title_status: None,
                    payment_terms: vec![],
                    model_name: None,
                    indicative_price_min: None,
                    indicative_price_max: None,
                    min_floor_area_sqm: None,
                    min_lot_area_sqm: None,
                    standard_inclusions: None,
                    preselling_notes: None,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::default(),
                    email: "".into(),
                    name: "".into(),
                    role: Role::Agent,
                },
            }
        }
    }

    #[test]
    fn default_user_is_an_agent() {
        let user = User::build().id(3).email("a@b.ph").finish();
        assert_eq!(Role::Agent, user.role);
        assert_eq!(Id::new(3), user.id);
        assert!(!user.is_admin());
    }
}
