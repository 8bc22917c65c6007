use crate::stmt::Record;

use std::time::Duration;

/// Pluggable result cache consulted by the cache-fronted read paths.
///
/// Entries are lists of records; a single-record read stores a list of zero or
/// one. The engine never invalidates entries, so freshness is up to the
/// caller and the implementation's expiry policy.
pub trait Cache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<Record>>;

    /// Store `value` under `key` with no expiry.
    fn put(&self, key: &str, value: Vec<Record>);

    /// Store `value` under `key`, expiring after `ttl`.
    fn put_with_ttl(&self, key: &str, value: Vec<Record>, ttl: Duration);
}
