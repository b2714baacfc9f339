//! Repository Traits
//!
//! Interface for credential storage. Implementation is in the
//! infrastructure layer; the store owns User records exclusively and
//! serializes mutations per user name.

use crate::domain::entity::user::{PlayStats, User};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Fails with `AuthError::UserNameTaken` if the name is already present.
    async fn create(&self, user: User) -> AuthResult<()>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Record a play result, returning the updated statistics
    ///
    /// Returns `Ok(None)` when the user does not exist. The mutation is
    /// exclusive per user name: concurrent submissions for the same user
    /// never lose updates.
    async fn record_result(&self, user_name: &UserName, score: u32)
    -> AuthResult<Option<PlayStats>>;
}
