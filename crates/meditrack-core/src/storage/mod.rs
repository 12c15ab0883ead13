//! Persisted session values.
//!
//! A session is three keys: `token`, `role` and `username`. Storage is a
//! trait so the session store can run against an on-disk SQLite file in
//! production and a plain map in tests.

mod memory;
mod schema;
mod sqlite;

pub use memory::*;
pub use schema::*;
pub use sqlite::*;

use thiserror::Error;

/// Key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the canonical role name.
pub const ROLE_KEY: &str = "role";
/// Key holding the display username.
pub const USERNAME_KEY: &str = "username";

/// Every key the session owns.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, ROLE_KEY, USERNAME_KEY];

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key/value store for session values.
///
/// Batch writes must be all-or-nothing: after `set_many` or `remove_many`
/// returns, either every key changed or none did.
pub trait SessionStorage: Send {
    /// Read one value.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write several values in one unit.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> StorageResult<()>;

    /// Remove several keys in one unit. Missing keys are ignored.
    fn remove_many(&mut self, keys: &[&str]) -> StorageResult<()>;

    /// Write a single value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.set_many(&[(key, value)])
    }

    /// Remove a single key.
    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.remove_many(&[key])
    }
}
