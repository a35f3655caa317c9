use std::cell::RefCell;

use super::{prelude::*, NewListing};
use crate::authorization::{
    document::DocumentFilter, listing::ListingFilter, notification::NotificationFilter,
    share_link::ShareLinkFilter, user::UserFilter,
};
use phmls_entities::builders::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

pub const PROVINCE: &str = "0402100000";
pub const CITY: &str = "0402101000";
pub const BARANGAY: &str = "0402101001";
pub const OTHER_PROVINCE: &str = "1380000000";
pub const OTHER_CITY: &str = "1380100000";
pub const OTHER_BARANGAY: &str = "1380100001";

pub const RESIDENTIAL: u64 = 1;
pub const COMMERCIAL: u64 = 2;
pub const HOUSE: u64 = 10;
pub const LOT: u64 = 11;
pub const OFFICE: u64 = 20;
pub const TOWNHOUSE: u64 = 100;
pub const RETAIL: u64 = 200;

pub const DEVELOPMENT: u64 = 1;
pub const OTHER_DEVELOPMENT: u64 = 2;

#[derive(Default)]
pub struct MockDb {
    pub listings: RefCell<Vec<Listing>>,
    pub users: RefCell<Vec<User>>,
    pub provinces: RefCell<Vec<Province>>,
    pub cities: RefCell<Vec<City>>,
    pub barangays: RefCell<Vec<Barangay>>,
    pub developments: RefCell<Vec<Development>>,
    pub categories: RefCell<Vec<PropertyCategory>>,
    pub property_types: RefCell<Vec<PropertyType>>,
    pub subtypes: RefCell<Vec<PropertySubtype>>,
    pub documents: RefCell<Vec<Document>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub share_links: RefCell<Vec<ExternalShareLink>>,
}

impl MockDb {
    /// Two independent location chains, a development in each
    /// barangay and a small classification tree.
    pub fn seeded() -> Self {
        let db = Self::default();
        for (p, c, b) in [
            (PROVINCE, CITY, BARANGAY),
            (OTHER_PROVINCE, OTHER_CITY, OTHER_BARANGAY),
        ] {
            db.provinces.borrow_mut().push(Province {
                code: p.into(),
                name: format!("Province {p}"),
            });
            db.cities.borrow_mut().push(City {
                code: c.into(),
                name: format!("City {c}"),
                province: p.into(),
            });
            db.barangays.borrow_mut().push(Barangay {
                code: b.into(),
                name: format!("Barangay {b}"),
                city: c.into(),
            });
        }
        for (id, barangay) in [(DEVELOPMENT, BARANGAY), (OTHER_DEVELOPMENT, OTHER_BARANGAY)] {
            db.developments.borrow_mut().push(Development {
                id: id.into(),
                name: format!("Development {id}"),
                barangay: barangay.into(),
                developer: None,
            });
        }
        for (id, name) in [(RESIDENTIAL, "Residential"), (COMMERCIAL, "Commercial")] {
            db.categories.borrow_mut().push(PropertyCategory {
                id: id.into(),
                name: name.into(),
            });
        }
        for (id, name, category, lot_like) in [
            (HOUSE, "House and Lot", RESIDENTIAL, false),
            (LOT, "Lot", RESIDENTIAL, true),
            (OFFICE, "Office", COMMERCIAL, false),
        ] {
            db.property_types.borrow_mut().push(PropertyType {
                id: id.into(),
                name: name.into(),
                category: category.into(),
                lot_like,
            });
        }
        for (id, name, property_type) in [(TOWNHOUSE, "Townhouse", HOUSE), (RETAIL, "Retail", OFFICE)] {
            db.subtypes.borrow_mut().push(PropertySubtype {
                id: id.into(),
                name: name.into(),
                property_type: property_type.into(),
            });
        }
        db
    }

    pub fn with_users(self, users: impl IntoIterator<Item = User>) -> Self {
        self.users.borrow_mut().extend(users);
        self
    }

    pub fn add_listing(&self, listing: Listing) -> Listing {
        self.create_listing(listing).unwrap()
    }
}

/// A resale house that passes every hook.
pub fn valid_resale(owner: u64) -> Listing {
    Listing::build()
        .title("House and lot in Bacoor")
        .created_by(owner)
        .location(PROVINCE, CITY, BARANGAY)
        .category(RESIDENTIAL)
        .property_type(HOUSE)
        .subtype(TOWNHOUSE)
        .price(4_500_000.0)
        .finish()
}

/// A preselling unit that passes every hook.
pub fn valid_preselling(owner: u64) -> Listing {
    Listing::build()
        .title("Tower A, 1BR")
        .created_by(owner)
        .listing_type(ListingType::Preselling)
        .location(PROVINCE, CITY, BARANGAY)
        .development(DEVELOPMENT)
        .category(RESIDENTIAL)
        .model_name("Acacia")
        .indicative_price(Some(3_000_000.0), Some(3_800_000.0))
        .min_floor_area(24.0)
        .finish()
}

pub fn new_resale() -> NewListing {
    NewListing {
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

pub fn new_preselling() -> NewListing {
    NewListing {
        title: "Tower A, 1BR".into(),
        listing_type: Some(ListingType::Preselling),
        property_category: Some(RESIDENTIAL.into()),
        province: Some(PROVINCE.into()),
        city: Some(CITY.into()),
        barangay: Some(BARANGAY.into()),
        development: Some(DEVELOPMENT.into()),
        model_name: Some("Acacia".into()),
        indicative_price_min: Some(3_000_000.0),
        min_floor_area_sqm: Some(24.0),
        ..Default::default()
    }
}

pub fn user(id: u64, role: Role) -> User {
    User::build()
        .id(id)
        .email(&format!("user{id}@example.ph"))
        .name(&format!("User {id}"))
        .role(role)
        .finish()
}

fn get<T: Clone>(items: &RefCell<Vec<T>>, f: impl Fn(&T) -> bool) -> RepoResult<T> {
    items
        .borrow()
        .iter()
        .find(|x| f(*x))
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn next_id<T>(items: &[T], id: impl Fn(&T) -> Id) -> Id {
    items.iter().map(id).max().unwrap_or_default().next()
}

fn upsert<T>(items: &RefCell<Vec<T>>, item: T, same: impl Fn(&T, &T) -> bool) {
    let mut items = items.borrow_mut();
    match items.iter_mut().find(|x| same(x, &item)) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

fn update<T>(items: &RefCell<Vec<T>>, item: &T, same: impl Fn(&T, &T) -> bool) -> RepoResult<()>
where
    T: Clone,
{
    let mut items = items.borrow_mut();
    let existing = items
        .iter_mut()
        .find(|x| same(x, item))
        .ok_or(RepoError::NotFound)?;
    *existing = item.clone();
    Ok(())
}

fn remove<T>(items: &RefCell<Vec<T>>, f: impl Fn(&T) -> bool) -> usize {
    let mut items = items.borrow_mut();
    let len = items.len();
    items.retain(|x| !f(x));
    len - items.len()
}

impl ListingRepo for MockDb {
    fn get_listing(&self, id: Id) -> RepoResult<Listing> {
        get(&self.listings, |l| l.id == id)
    }
    fn find_listings(&self, filter: &ListingFilter) -> RepoResult<Vec<Listing>> {
        Ok(self
            .listings
            .borrow()
            .iter()
            .filter(|l| filter.eval(*l))
            .cloned()
            .collect())
    }
    fn create_listing(&self, mut listing: Listing) -> RepoResult<Listing> {
        listing.id = next_id(&self.listings.borrow(), |l| l.id);
        listing.revision = Revision::initial();
        self.listings.borrow_mut().push(listing.clone());
        Ok(listing)
    }
    fn update_listing(&self, mut listing: Listing) -> RepoResult<Listing> {
        let mut listings = self.listings.borrow_mut();
        let existing = listings
            .iter_mut()
            .find(|l| l.id == listing.id)
            .ok_or(RepoError::NotFound)?;
        if existing.revision != listing.revision {
            return Err(RepoError::InvalidVersion);
        }
        listing.revision = listing.revision.next();
        *existing = listing.clone();
        Ok(listing)
    }
    fn delete_listing(&self, id: Id) -> RepoResult<()> {
        match remove(&self.listings, |l| l.id == id) {
            0 => Err(RepoError::NotFound),
            _ => Ok(()),
        }
    }
    fn count_listings(&self) -> RepoResult<usize> {
        Ok(self.listings.borrow().len())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, mut user: User) -> RepoResult<User> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        user.id = next_id(&self.users.borrow(), |u| u.id);
        self.users.borrow_mut().push(user.clone());
        Ok(user)
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&self.users, user, |a, b| a.id == b.id)
    }
    fn get_user(&self, id: Id) -> RepoResult<User> {
        get(&self.users, |u| u.id == id)
    }
    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| u.email == email).cloned())
    }
    fn find_users(&self, filter: &UserFilter) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| filter.eval(*u))
            .cloned()
            .collect())
    }
    fn find_users_by_role(&self, role: Role) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl LocationRepo for MockDb {
    fn get_province(&self, code: &PsgcCode) -> RepoResult<Province> {
        get(&self.provinces, |p| &p.code == code)
    }
    fn get_city(&self, code: &PsgcCode) -> RepoResult<City> {
        get(&self.cities, |c| &c.code == code)
    }
    fn get_barangay(&self, code: &PsgcCode) -> RepoResult<Barangay> {
        get(&self.barangays, |b| &b.code == code)
    }
    fn get_development(&self, id: Id) -> RepoResult<Development> {
        get(&self.developments, |d| d.id == id)
    }
    fn all_provinces(&self) -> RepoResult<Vec<Province>> {
        Ok(self.provinces.borrow().clone())
    }
    fn cities_of_province(&self, province: &PsgcCode) -> RepoResult<Vec<City>> {
        Ok(self
            .cities
            .borrow()
            .iter()
            .filter(|c| &c.province == province)
            .cloned()
            .collect())
    }
    fn barangays_of_city(&self, city: &PsgcCode) -> RepoResult<Vec<Barangay>> {
        Ok(self
            .barangays
            .borrow()
            .iter()
            .filter(|b| &b.city == city)
            .cloned()
            .collect())
    }
    fn upsert_province(&self, province: Province) -> RepoResult<()> {
        upsert(&self.provinces, province, |a, b| a.code == b.code);
        Ok(())
    }
    fn upsert_city(&self, city: City) -> RepoResult<()> {
        upsert(&self.cities, city, |a, b| a.code == b.code);
        Ok(())
    }
    fn upsert_barangay(&self, barangay: Barangay) -> RepoResult<()> {
        upsert(&self.barangays, barangay, |a, b| a.code == b.code);
        Ok(())
    }
    fn upsert_development(&self, development: Development) -> RepoResult<()> {
        upsert(&self.developments, development, |a, b| a.id == b.id);
        Ok(())
    }
}

impl ClassificationRepo for MockDb {
    fn get_property_category(&self, id: Id) -> RepoResult<PropertyCategory> {
        get(&self.categories, |c| c.id == id)
    }
    fn get_property_type(&self, id: Id) -> RepoResult<PropertyType> {
        get(&self.property_types, |t| t.id == id)
    }
    fn get_property_subtype(&self, id: Id) -> RepoResult<PropertySubtype> {
        get(&self.subtypes, |s| s.id == id)
    }
    fn all_property_categories(&self) -> RepoResult<Vec<PropertyCategory>> {
        Ok(self.categories.borrow().clone())
    }
    fn upsert_property_category(&self, category: PropertyCategory) -> RepoResult<()> {
        upsert(&self.categories, category, |a, b| a.id == b.id);
        Ok(())
    }
    fn upsert_property_type(&self, property_type: PropertyType) -> RepoResult<()> {
        upsert(&self.property_types, property_type, |a, b| a.id == b.id);
        Ok(())
    }
    fn upsert_property_subtype(&self, subtype: PropertySubtype) -> RepoResult<()> {
        upsert(&self.subtypes, subtype, |a, b| a.id == b.id);
        Ok(())
    }
}

impl DocumentRepo for MockDb {
    fn create_document(&self, mut document: Document) -> RepoResult<Document> {
        document.id = next_id(&self.documents.borrow(), |d| d.id);
        self.documents.borrow_mut().push(document.clone());
        Ok(document)
    }
    fn get_document(&self, id: Id) -> RepoResult<Document> {
        get(&self.documents, |d| d.id == id)
    }
    fn find_documents_of_listing(
        &self,
        listing: Id,
        filter: &DocumentFilter,
    ) -> RepoResult<Vec<Document>> {
        Ok(self
            .documents
            .borrow()
            .iter()
            .filter(|d| d.listing == listing && filter.eval(*d))
            .cloned()
            .collect())
    }
    fn delete_document(&self, id: Id) -> RepoResult<()> {
        match remove(&self.documents, |d| d.id == id) {
            0 => Err(RepoError::NotFound),
            _ => Ok(()),
        }
    }
    fn delete_documents_of_listing(&self, listing: Id) -> RepoResult<usize> {
        Ok(remove(&self.documents, |d| d.listing == listing))
    }
}

impl NotificationRepo for MockDb {
    fn create_notification(&self, mut notification: Notification) -> RepoResult<Notification> {
        notification.id = next_id(&self.notifications.borrow(), |n| n.id);
        self.notifications.borrow_mut().push(notification.clone());
        Ok(notification)
    }
    fn get_notification(&self, id: Id) -> RepoResult<Notification> {
        get(&self.notifications, |n| n.id == id)
    }
    fn update_notification(&self, notification: &Notification) -> RepoResult<()> {
        update(&self.notifications, notification, |a, b| a.id == b.id)
    }
    fn find_notifications(&self, filter: &NotificationFilter) -> RepoResult<Vec<Notification>> {
        Ok(self
            .notifications
            .borrow()
            .iter()
            .filter(|n| filter.eval(*n))
            .cloned()
            .collect())
    }
    fn delete_notifications_of_listing(&self, listing: Id) -> RepoResult<usize> {
        Ok(remove(&self.notifications, |n| n.listing == listing))
    }
}

impl ShareLinkRepo for MockDb {
    fn create_share_link(&self, mut link: ExternalShareLink) -> RepoResult<ExternalShareLink> {
        link.id = next_id(&self.share_links.borrow(), |l| l.id);
        self.share_links.borrow_mut().push(link.clone());
        Ok(link)
    }
    fn get_share_link(&self, id: Id) -> RepoResult<ExternalShareLink> {
        get(&self.share_links, |l| l.id == id)
    }
    fn get_share_link_by_token(&self, token: &Token) -> RepoResult<ExternalShareLink> {
        get(&self.share_links, |l| &l.token == token)
    }
    fn update_share_link(&self, link: &ExternalShareLink) -> RepoResult<()> {
        update(&self.share_links, link, |a, b| a.id == b.id)
    }
    fn find_share_links(&self, filter: &ShareLinkFilter) -> RepoResult<Vec<ExternalShareLink>> {
        Ok(self
            .share_links
            .borrow()
            .iter()
            .filter(|l| filter.eval(*l))
            .cloned()
            .collect())
    }
    fn delete_share_links_of_listing(&self, listing: Id) -> RepoResult<usize> {
        Ok(remove(&self.share_links, |l| l.listing == listing))
    }
}
