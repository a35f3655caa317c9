//! # phmls-db-memory
//!
//! An in-process database for the listing service.
//!
//! All records are kept in memory behind a single lock. Writes happen
//! inside transactions that operate on a private copy of the tables,
//! which replaces the shared state only if the transaction succeeds.
//! Committed state can optionally be written to a JSON snapshot file
//! and loaded again on startup.

use std::{
    cell::{Ref, RefCell, RefMut},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result as Fallible;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use phmls_core::{repositories as repo, usecases as uc};

mod repo_impl;
mod snapshot;
mod tables;

pub use self::tables::{Sequences, Tables};

type SharedTables = Arc<RwLock<Tables>>;

enum Access<'a> {
    ReadOnly(RwLockReadGuard<'a, Tables>),
    ReadWrite(&'a mut Tables),
}

impl Access<'_> {
    fn tables(&self) -> &Tables {
        match self {
            Self::ReadOnly(guard) => guard,
            Self::ReadWrite(tables) => tables,
        }
    }

    fn tables_mut(&mut self) -> Option<&mut Tables> {
        match self {
            Self::ReadOnly(_) => None,
            Self::ReadWrite(tables) => Some(tables),
        }
    }
}

pub struct DbConnection<'a> {
    access: RefCell<Access<'a>>,
}

/// A connection for concurrent readers.
///
/// Every attempt to write through it fails.
pub type DbReadOnly<'a> = DbConnection<'a>;

impl<'a> DbConnection<'a> {
    fn read_only(guard: RwLockReadGuard<'a, Tables>) -> Self {
        Self {
            access: RefCell::new(Access::ReadOnly(guard)),
        }
    }

    fn read_write(tables: &'a mut Tables) -> Self {
        Self {
            access: RefCell::new(Access::ReadWrite(tables)),
        }
    }

    fn tables(&self) -> Ref<'_, Tables> {
        Ref::map(self.access.borrow(), Access::tables)
    }

    fn tables_mut(&self) -> Result<RefMut<'_, Tables>, repo::Error> {
        RefMut::filter_map(self.access.borrow_mut(), Access::tables_mut).map_err(|_| {
            log::error!("Attempt to write through a read-only database connection");
            repo::Error::Other(anyhow::anyhow!("The database connection is read-only"))
        })
    }
}

pub struct DbReadWrite<'a> {
    locked_tables: RwLockWriteGuard<'a, Tables>,
    snapshot_file: Option<&'a Path>,
}

impl<'a> DbReadWrite<'a> {
    /// Runs `f` on a private copy of all tables.
    ///
    /// The copy replaces the shared tables only if `f` succeeds
    /// and, if configured, the snapshot has been written.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let mut working_copy = self.locked_tables.clone();
        let result: Result<T, uc::Error> =
            f(&DbConnection::read_write(&mut working_copy)).map_err(Into::into);
        let value = match result {
            Ok(value) => value,
            Err(err) => {
                log::debug!("Rolling back transaction: {err}");
                return Err(err);
            }
        };
        if let Some(path) = self.snapshot_file {
            snapshot::save(path, &working_copy)
                .inspect_err(|err| {
                    log::error!("Failed to write snapshot {}: {err}", path.display());
                })
                .map_err(|err| uc::Error::Repo(repo::Error::Other(err)))?;
        }
        *self.locked_tables = working_copy;
        Ok(value)
    }
}

#[derive(Clone)]
pub struct Connections {
    // Multiple readers can access the tables concurrently
    // while writers get exclusive access.
    tables: SharedTables,
    snapshot_file: Option<Arc<PathBuf>>,
}

impl Connections {
    /// A volatile database that starts empty.
    pub fn in_memory() -> Self {
        Self::new(Tables::default(), None)
    }

    /// A volatile database that starts with the given tables.
    pub fn from_tables(mut tables: Tables) -> Self {
        tables.catch_up_sequences();
        Self::new(tables, None)
    }

    /// Loads the snapshot file if it exists. Every
    /// committed transaction rewrites the file.
    pub fn init(snapshot_file: Option<&Path>) -> Fallible<Self> {
        let Some(path) = snapshot_file else {
            log::info!("Using a volatile in-memory database");
            return Ok(Self::in_memory());
        };
        let tables = snapshot::load(path)?;
        log::info!(
            "Loaded {} listing(s) and {} user(s) from {}",
            tables.listings.len(),
            tables.users.len(),
            path.display()
        );
        Ok(Self::new(tables, Some(path.to_path_buf())))
    }

    fn new(tables: Tables, snapshot_file: Option<PathBuf>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
            snapshot_file: snapshot_file.map(Arc::new),
        }
    }

    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        Ok(DbConnection::read_only(self.tables.read()))
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        Ok(DbReadWrite {
            locked_tables: self.tables.write(),
            snapshot_file: self.snapshot_file.as_deref().map(PathBuf::as_path),
        })
    }
}
