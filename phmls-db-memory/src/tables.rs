use std::collections::BTreeMap;

use anyhow::anyhow;
use phmls_core::{entities::*, repositories as repo};
use serde::{Deserialize, Serialize};

/// The complete state of the database.
///
/// Records are keyed by their id or PSGC code. Ids are
/// drawn from per table sequences and never handed out twice,
/// not even after the record that carried them was deleted.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub listings       : BTreeMap<Id, Listing>,
    pub users          : BTreeMap<Id, User>,
    pub provinces      : BTreeMap<PsgcCode, Province>,
    pub cities         : BTreeMap<PsgcCode, City>,
    pub barangays      : BTreeMap<PsgcCode, Barangay>,
    pub developments   : BTreeMap<Id, Development>,
    pub categories     : BTreeMap<Id, PropertyCategory>,
    pub property_types : BTreeMap<Id, PropertyType>,
    pub subtypes       : BTreeMap<Id, PropertySubtype>,
    pub documents      : BTreeMap<Id, Document>,
    pub notifications  : BTreeMap<Id, Notification>,
    pub share_links    : BTreeMap<Id, ExternalShareLink>,
    pub sequences      : Sequences,
}

/// The last id that has been assigned per table.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sequences {
    pub listings      : u64,
    pub users         : u64,
    pub documents     : u64,
    pub notifications : u64,
    pub share_links   : u64,
}

impl Tables {
    /// Moves every sequence at least up to the highest stored id,
    /// e.g. for snapshots that were written without sequences.
    pub(crate) fn catch_up_sequences(&mut self) {
        fn highest<T>(table: &BTreeMap<Id, T>) -> u64 {
            table
                .last_key_value()
                .map(|(id, _)| id.value())
                .unwrap_or_default()
        }
        let seq = &mut self.sequences;
        seq.listings = seq.listings.max(highest(&self.listings));
        seq.users = seq.users.max(highest(&self.users));
        seq.documents = seq.documents.max(highest(&self.documents));
        seq.notifications = seq.notifications.max(highest(&self.notifications));
        seq.share_links = seq.share_links.max(highest(&self.share_links));
    }
}

pub(crate) fn next_id(sequence: &mut u64) -> Result<Id, repo::Error> {
    let next = sequence
        .checked_add(1)
        .ok_or_else(|| repo::Error::Other(anyhow!("The id sequence is exhausted")))?;
    *sequence = next;
    Ok(Id::new(next))
}
