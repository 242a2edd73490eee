use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{User, UserFields, UserId};

/// Storage port for users. Handlers only talk to this trait, so the
/// in-memory store can be swapped for a durable one.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in id order.
    async fn list(&self) -> Result<Vec<User>>;
    async fn create(&self, fields: UserFields) -> Result<User>;
    async fn get(&self, id: UserId) -> Result<Option<User>>;
    /// Overwrites name and email. `None` when the id is unknown.
    async fn update(&self, id: UserId, fields: UserFields) -> Result<Option<User>>;
    /// `false` when the id is unknown.
    async fn delete(&self, id: UserId) -> Result<bool>;
}

#[derive(Debug)]
struct Store {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// Lock-guarded map keyed by id. Ids are handed out sequentially from 1
/// and are never reused, so id order is insertion order.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn create(&self, fields: UserFields) -> Result<User> {
        let mut store = self.store.write().await;
        let now = Utc::now();

        let user = User {
            id: store.next_id,
            name: fields.name,
            email: fields.email,
            created_at: now,
            updated_at: now,
        };
        store.next_id += 1;
        store.users.insert(user.id, user.clone());

        tracing::debug!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn update(&self, id: UserId, fields: UserFields) -> Result<Option<User>> {
        let mut store = self.store.write().await;

        let Some(user) = store.users.get_mut(&id) else {
            return Ok(None);
        };

        user.name = fields.name;
        user.email = fields.email;
        user.updated_at = Utc::now().max(user.created_at);

        tracing::debug!(user_id = id, "Updated user");
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        let mut store = self.store.write().await;
        let removed = store.users.remove(&id).is_some();

        if removed {
            tracing::debug!(user_id = id, "Deleted user");
        }
        Ok(removed)
    }
}
