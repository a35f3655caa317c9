use strum::{AsRefStr, Display, EnumString};

use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Visibility {
    /// Only the uploader, approvers and administrators.
    #[default]
    Private,
    /// Every authenticated user.
    Internal,
}

/// A file attached to a listing, e.g. a title copy or floor plan.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub id          : Id,
    pub listing     : Id,
    pub title       : String,
    pub file_name   : String,
    pub visibility  : Visibility,
    pub uploaded_by : Id,
    pub created_at  : Timestamp,
}
