#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # phmls-entities
//!
//! Reusable, agnostic domain entities for a Philippine multiple listing service.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod classification;
pub mod document;
pub mod id;
pub mod listing;
pub mod location;
pub mod notification;
pub mod revision;
pub mod share_link;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
