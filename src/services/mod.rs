use async_trait::async_trait;

use crate::models::{Entry, User};
use crate::seatable::StoreError;

/// Backing store for users and late entries.
///
/// Implementations report backend trouble as [`StoreError`]; deciding what the
/// caller gets to see is left to the handlers.
#[async_trait]
pub trait LateEntryStore: Send + Sync {
    /// Look up `username` and check `password`. `Ok(None)` means no such user
    /// or a wrong password.
    async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, StoreError>;

    /// Every entry, in the order the store returns them.
    async fn fetch_all(&self) -> Result<Vec<Entry>, StoreError>;

    /// Stamp `entry` with the current server time and append it.
    async fn create(&self, entry: Entry) -> Result<Entry, StoreError>;
}
