//! In-Memory User Repository
//!
//! `RwLock<HashMap>` guards map membership; each User sits behind its own
//! `Mutex`, so statistics mutations are mutually exclusive per user name
//! while cross-user operations proceed independently.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::domain::entity::user::{PlayStats, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// In-memory implementation of [`UserRepository`]
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, Arc<Mutex<User>>>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        match users.entry(user.user_name.as_str().to_string()) {
            Entry::Occupied(_) => Err(AuthError::UserNameTaken),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(user)));
                Ok(())
            }
        }
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let slot = {
            let users = self.users.read().await;
            users.get(user_name.as_str()).cloned()
        };

        match slot {
            Some(slot) => Ok(Some(slot.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn record_result(
        &self,
        user_name: &UserName,
        score: u32,
    ) -> AuthResult<Option<PlayStats>> {
        let slot = {
            let users = self.users.read().await;
            users.get(user_name.as_str()).cloned()
        };

        let Some(slot) = slot else {
            return Ok(None);
        };

        let mut user = slot.lock().await;
        let outcome = user.record_result(score);
        tracing::debug!(
            user_name = %user.user_name,
            score,
            ?outcome,
            "Recorded play result"
        );
        Ok(Some(user.stats))
    }
}
