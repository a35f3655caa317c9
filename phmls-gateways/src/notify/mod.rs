//! Delivery of stored notifications to their recipients.

use phmls_core::entities::{Listing, Notification};

mod json_file;
mod log_only;

pub use self::{json_file::SendToJsonFile, log_only::LogOnly};

fn subject(notification: &Notification, listing: &Listing) -> String {
    format!("[{}] {}", notification.kind, listing.title)
}
