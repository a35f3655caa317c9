use std::{io, path::Path};

use jfs::Store;
use phmls_core::{
    entities::{Listing, Notification, Timestamp},
    gateways::notify::NotificationGateway,
};
use serde::{Deserialize, Serialize};

/// Stores every delivered notification as a JSON file,
/// e.g. for inspection during development.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonNotification {
    recipient: u64,
    listing: u64,
    subject: String,
    message: String,
}

impl JsonNotification {
    fn new(notification: &Notification, listing: &Listing) -> Self {
        Self {
            recipient: notification.recipient.into(),
            listing: listing.id.into(),
            subject: super::subject(notification, listing),
            message: notification.message.clone(),
        }
    }
}

impl NotificationGateway for SendToJsonFile {
    fn deliver(&self, notification: &Notification, listing: &Listing) {
        let now = Timestamp::now().as_millis();
        let key = format!("{now}-{}-{}", notification.recipient, notification.id);
        let json = JsonNotification::new(notification, listing);
        if let Err(err) = self.json_store.save_with_id(&json, &key) {
            log::error!("Unable to save notification in JSON file: {err}");
        }
    }
}
