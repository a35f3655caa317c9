// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use std::io;

use thiserror::Error;

use crate::{
    authorization::{
        document::DocumentFilter, listing::ListingFilter, notification::NotificationFilter,
        share_link::ShareLinkFilter, user::UserFilter,
    },
    entities::*,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The version of the object is invalid")]
    InvalidVersion,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait ListingRepo {
    fn get_listing(&self, id: Id) -> Result<Listing>;

    // Only listings that match the filter, ordered by id
    fn find_listings(&self, filter: &ListingFilter) -> Result<Vec<Listing>>;

    // Assigns a new id and the initial revision
    fn create_listing(&self, listing: Listing) -> Result<Listing>;

    // Fails with `InvalidVersion` if the stored revision
    // differs from `listing.revision`. The returned listing
    // carries the next revision.
    fn update_listing(&self, listing: Listing) -> Result<Listing>;

    fn delete_listing(&self, id: Id) -> Result<()>;

    fn count_listings(&self) -> Result<usize>;
}

pub trait UserRepo {
    // Assigns a new id
    fn create_user(&self, user: User) -> Result<User>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn find_users(&self, filter: &UserFilter) -> Result<Vec<User>>;
    fn find_users_by_role(&self, role: Role) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait LocationRepo {
    fn get_province(&self, code: &PsgcCode) -> Result<Province>;
    fn get_city(&self, code: &PsgcCode) -> Result<City>;
    fn get_barangay(&self, code: &PsgcCode) -> Result<Barangay>;
    fn get_development(&self, id: Id) -> Result<Development>;

    fn all_provinces(&self) -> Result<Vec<Province>>;
    fn cities_of_province(&self, province: &PsgcCode) -> Result<Vec<City>>;
    fn barangays_of_city(&self, city: &PsgcCode) -> Result<Vec<Barangay>>;

    fn upsert_province(&self, province: Province) -> Result<()>;
    fn upsert_city(&self, city: City) -> Result<()>;
    fn upsert_barangay(&self, barangay: Barangay) -> Result<()>;
    fn upsert_development(&self, development: Development) -> Result<()>;
}

pub trait ClassificationRepo {
    fn get_property_category(&self, id: Id) -> Result<PropertyCategory>;
    fn get_property_type(&self, id: Id) -> Result<PropertyType>;
    fn get_property_subtype(&self, id: Id) -> Result<PropertySubtype>;

    fn all_property_categories(&self) -> Result<Vec<PropertyCategory>>;

    fn upsert_property_category(&self, category: PropertyCategory) -> Result<()>;
    fn upsert_property_type(&self, property_type: PropertyType) -> Result<()>;
    fn upsert_property_subtype(&self, subtype: PropertySubtype) -> Result<()>;
}

pub trait DocumentRepo {
    // Assigns a new id
    fn create_document(&self, document: Document) -> Result<Document>;
    fn get_document(&self, id: Id) -> Result<Document>;
    fn find_documents_of_listing(
        &self,
        listing: Id,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>>;
    fn delete_document(&self, id: Id) -> Result<()>;
    fn delete_documents_of_listing(&self, listing: Id) -> Result<usize>;
}

pub trait NotificationRepo {
    // Assigns a new id
    fn create_notification(&self, notification: Notification) -> Result<Notification>;
    fn get_notification(&self, id: Id) -> Result<Notification>;
    fn update_notification(&self, notification: &Notification) -> Result<()>;
    fn find_notifications(&self, filter: &NotificationFilter) -> Result<Vec<Notification>>;
    fn delete_notifications_of_listing(&self, listing: Id) -> Result<usize>;
}

pub trait ShareLinkRepo {
    // Assigns a new id
    fn create_share_link(&self, link: ExternalShareLink) -> Result<ExternalShareLink>;
    fn get_share_link(&self, id: Id) -> Result<ExternalShareLink>;
    fn get_share_link_by_token(&self, token: &Token) -> Result<ExternalShareLink>;
    fn update_share_link(&self, link: &ExternalShareLink) -> Result<()>;
    fn find_share_links(&self, filter: &ShareLinkFilter) -> Result<Vec<ExternalShareLink>>;
    fn delete_share_links_of_listing(&self, listing: Id) -> Result<usize>;
}
