//! In-memory adapter for the user repository port.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{IdSequence, User, UserDraft, UserId};

use super::lock;

#[derive(Debug, Default)]
struct UserTable {
    rows: BTreeMap<UserId, User>,
    ids: IdSequence,
}

impl UserTable {
    fn collides(&self, draft: &UserDraft, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .filter(|user| Some(user.id()) != except)
            .any(|user| user.collides_with(draft))
    }
}

/// Process-local user store.
///
/// Every uniqueness check and the write it guards happen under one lock, so
/// concurrent creates can never leave two users sharing a name or e-mail.
///
/// # Examples
/// ```
/// use helpdesk::outbound::memory::InMemoryUserRepository;
///
/// let repository = InMemoryUserRepository::new();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<UserTable>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn storage(message: String) -> UserRepositoryError {
    UserRepositoryError::storage(message)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let table = lock(&self.table, "user").map_err(storage)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let table = lock(&self.table, "user").map_err(storage)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: UserDraft) -> Result<User, UserRepositoryError> {
        let mut table = lock(&self.table, "user").map_err(storage)?;
        if table.collides(&draft, None) {
            return Err(UserRepositoryError::conflict());
        }
        let id = UserId::new(table.ids.next_id());
        let user = User::new(id, draft);
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, UserRepositoryError> {
        let mut table = lock(&self.table, "user").map_err(storage)?;
        if !table.rows.contains_key(&id) {
            return Err(UserRepositoryError::not_found(id.get()));
        }
        if table.collides(&draft, Some(id)) {
            return Err(UserRepositoryError::conflict());
        }
        let user = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| UserRepositoryError::not_found(id.get()))?;
        user.apply(draft);
        Ok(user.clone())
    }

    async fn remove(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut table = lock(&self.table, "user").map_err(storage)?;
        Ok(table.rows.remove(&id))
    }
}
