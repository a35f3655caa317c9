use strum::{AsRefStr, Display, EnumString};

use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NotificationKind {
    ListingSubmitted,
    ListingPublished,
    ListingNeedsRevision,
    ListingRejected,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    pub id         : Id,
    pub recipient  : Id,
    pub listing    : Id,
    pub kind       : NotificationKind,
    pub message    : String,
    pub read       : bool,
    pub created_at : Timestamp,
}
