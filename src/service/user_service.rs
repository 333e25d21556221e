use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::domain::{User, UserCreate, UserId};
use crate::error::UserError;
use crate::store::UserStore;

/// Service for user management.
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Validates the payload and persists a new user.
    ///
    /// **Tracing:** logs safe fields only, the payload itself is skipped.
    #[instrument(
        fields(user_name = %payload.first_name, user_email = %payload.email),
        skip(self, payload)
    )]
    pub async fn create(&self, payload: UserCreate) -> Result<User, UserError> {
        debug!("Processing create_user request");

        if let Err(msg) = payload.validate() {
            error!(error = %msg, "Validation failed");
            return Err(UserError::ValidationError(msg));
        }

        let user = self.users.create(payload).await;
        info!(user_id = user.id, "User created successfully");
        Ok(user)
    }

    #[instrument(fields(user_id = %id), skip(self))]
    pub async fn get(&self, id: UserId) -> Result<User, UserError> {
        debug!("Processing get_user request");

        match self.users.find_by_id(id).await {
            Some(user) => {
                info!(user_name = %user.first_name, "User found");
                Ok(user)
            }
            None => {
                debug!("User not found");
                Err(UserError::NotFound(id))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<User> {
        debug!("Processing list_users request");

        let users = self.users.find_all().await;
        info!(user_count = users.len(), "Listed users");
        users
    }
}
