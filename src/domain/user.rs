use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

pub type UserId = u64;

/// Represents a registered user in the system.
///
/// The password is stored as-is in this scope and is never serialized into
/// responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl UserCreate {
    /// Checks the required fields before the payload reaches a store.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("first name must not be empty".to_string());
        }
        if self.last_name.trim().is_empty() {
            return Err("last name must not be empty".to_string());
        }
        if !self.email.validate_email() {
            return Err(format!("invalid email address: {}", self.email));
        }
        Ok(())
    }

    /// Builds the full User once the store has assigned an identifier.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
        }
    }
}
