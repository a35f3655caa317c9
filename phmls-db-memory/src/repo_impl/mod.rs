// NOTE:
// Every table is a `BTreeMap`, i.e. all queries return
// records ordered by their key.

use std::collections::BTreeMap;

use phmls_core::{
    authorization::{Predicate, Record},
    entities::*,
    repositories::{self as repo, *},
};

use super::{tables::next_id, DbConnection, Tables};

mod classification;
mod document;
mod listing;
mod location;
mod notification;
mod share_link;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

fn get<K, V>(table: &BTreeMap<K, V>, key: &K) -> Result<V>
where
    K: Ord,
    V: Clone,
{
    table.get(key).cloned().ok_or(repo::Error::NotFound)
}

fn filtered<K, V>(table: &BTreeMap<K, V>, filter: &Predicate<V::Field>) -> Vec<V>
where
    V: Record + Clone,
{
    table
        .values()
        .filter(|record| filter.eval(*record))
        .cloned()
        .collect()
}

fn replace<V>(table: &mut BTreeMap<Id, V>, id: Id, record: V) -> Result<()> {
    let existing = table.get_mut(&id).ok_or(repo::Error::NotFound)?;
    *existing = record;
    Ok(())
}

fn remove_where<V>(table: &mut BTreeMap<Id, V>, f: impl Fn(&V) -> bool) -> usize {
    let len = table.len();
    table.retain(|_, record| !f(record));
    len - table.len()
}
