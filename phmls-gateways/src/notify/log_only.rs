use phmls_core::{
    entities::{Listing, Notification},
    gateways::notify::NotificationGateway,
};

/// Writes notifications into the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnly;

impl NotificationGateway for LogOnly {
    fn deliver(&self, notification: &Notification, listing: &Listing) {
        log::info!(
            "Notify user {}: {} ({})",
            notification.recipient,
            super::subject(notification, listing),
            notification.message
        );
    }
}
