use crate::entities::{Listing, Notification};

pub trait NotificationGateway {
    // Delivery is best effort. Implementations
    // log failures instead of returning them.
    fn deliver(&self, notification: &Notification, listing: &Listing);
}
