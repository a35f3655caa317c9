pub mod prelude {

    use std::cell::RefCell;

    pub use phmls_core::{
        entities::*,
        gateways::notify::NotificationGateway,
        repositories::{
            ClassificationRepo, DocumentRepo, Error as RepoError, ListingRepo, LocationRepo,
            ShareLinkRepo, UserRepo,
        },
        usecases,
    };

    pub(crate) use crate::{error::AppError, prelude as flows, Connections};

    pub const PROVINCE: &str = "0402100000";
    pub const CITY: &str = "0402103000";
    pub const BARANGAY: &str = "0402103001";

    pub const RESIDENTIAL: u64 = 1;
    pub const HOUSE: u64 = 10;
    pub const DEVELOPMENT: u64 = 1;

    #[derive(Default)]
    pub struct RecordingNotifyGW {
        delivered: RefCell<Vec<Notification>>,
    }

    impl RecordingNotifyGW {
        pub fn delivered(&self) -> Vec<Notification> {
            self.delivered.borrow().clone()
        }
    }

    impl NotificationGateway for RecordingNotifyGW {
        fn deliver(&self, notification: &Notification, _: &Listing) {
            self.delivered.borrow_mut().push(notification.clone());
        }
    }

    pub fn reference_data() -> flows::ReferenceData {
        let user = |email: &str, role| usecases::NewUser {
            email: email.into(),
            name: email.into(),
            role,
        };
        flows::ReferenceData {
            provinces: vec![Province {
                code: PROVINCE.into(),
                name: "Cavite".into(),
            }],
            cities: vec![City {
                code: CITY.into(),
                name: "City of Bacoor".into(),
                province: PROVINCE.into(),
            }],
            barangays: vec![Barangay {
                code: BARANGAY.into(),
                name: "Alima".into(),
                city: CITY.into(),
            }],
            developments: vec![Development {
                id: DEVELOPMENT.into(),
                name: "Lancaster New City".into(),
                barangay: BARANGAY.into(),
                developer: None,
            }],
            property_categories: vec![PropertyCategory {
                id: RESIDENTIAL.into(),
                name: "Residential".into(),
            }],
            property_types: vec![PropertyType {
                id: HOUSE.into(),
                name: "House and Lot".into(),
                category: RESIDENTIAL.into(),
                lot_like: false,
            }],
            property_subtypes: vec![],
            users: vec![
                user("admin@example.ph", Role::Admin),
                user("agent@example.ph", Role::Agent),
                user("approver@example.ph", Role::Approver),
            ],
        }
    }

    pub fn new_resale() -> usecases::NewListing {
        usecases::NewListing {
            title: "House and lot in Bacoor".into(),
            property_category: Some(RESIDENTIAL.into()),
            property_type: Some(HOUSE.into()),
            province: Some(PROVINCE.into()),
            city: Some(CITY.into()),
            barangay: Some(BARANGAY.into()),
            transaction_types: vec![TransactionType::Sale],
            price: Some(4_500_000.0),
            ..Default::default()
        }
    }

    pub struct BackendFixture {
        pub db_connections: Connections,
        pub notify: RecordingNotifyGW,
        pub admin: Id,
        pub agent: Id,
        pub approver: Id,
    }

    impl BackendFixture {
        /// Without any reference data or users.
        pub fn empty() -> Self {
            Self::with_connections(Connections::in_memory())
        }

        pub fn with_connections(db_connections: Connections) -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                db_connections,
                notify: RecordingNotifyGW::default(),
                admin: Id::new(1),
                agent: Id::new(2),
                approver: Id::new(3),
            }
        }

        pub fn new() -> Self {
            let fixture = Self::empty();
            flows::seed(&fixture.db_connections, reference_data()).unwrap();
            fixture
        }

        pub fn create_user(&self, email: &str, role: Role) -> Id {
            flows::create_user(
                &self.db_connections,
                Some(self.admin),
                usecases::NewUser {
                    email: email.into(),
                    name: email.into(),
                    role,
                },
            )
            .unwrap()
            .id
        }

        pub fn get_user(&self, id: Id) -> User {
            self.db_connections.shared().unwrap().get_user(id).unwrap()
        }

        pub fn count_users(&self) -> usize {
            self.db_connections.shared().unwrap().count_users().unwrap()
        }

        pub fn create_listing(&self, actor: Id, new_listing: usecases::NewListing) -> Listing {
            flows::create_listing(&self.db_connections, actor, new_listing).unwrap()
        }

        pub fn get_listing(&self, actor: Id, id: Id) -> Listing {
            flows::get_listing(&self.db_connections, actor, id).unwrap()
        }

        pub fn count_listings(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_listings()
                .unwrap()
        }

        pub fn change_status(
            &self,
            actor: Id,
            id: Id,
            status: ListingStatus,
        ) -> Result<Listing, AppError> {
            flows::change_listing_status(&self.db_connections, &self.notify, actor, id, status)
        }

        pub fn create_document(&self, actor: Id, listing: Id) -> Document {
            flows::create_document(
                &self.db_connections,
                actor,
                listing,
                usecases::NewDocument {
                    title: "Title copy".into(),
                    file_name: "tct.pdf".into(),
                    visibility: Visibility::Private,
                },
            )
            .unwrap()
        }

        pub fn notifications_of(&self, user: Id) -> Vec<Notification> {
            flows::list_notifications(&self.db_connections, user, false).unwrap()
        }
    }
}
