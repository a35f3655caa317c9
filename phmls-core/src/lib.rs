//! # phmls-core
//!
//! Business rules of the listing service: who may see and change what,
//! how a listing moves through its review workflow and which invariants
//! every stored listing satisfies.

pub mod authorization;
pub mod db;
pub mod gateways;
pub mod hooks;
pub mod repositories;
pub mod usecases;
pub mod workflow;

pub mod entities {
    pub use phmls_entities::{
        classification::*, document::*, id::*, listing::*, location::*, notification::*,
        revision::*, share_link::*, time::*, user::*,
    };
}

pub use self::repositories::Error as RepoError;
