//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// Registered user stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated identifier (also used as document ID)
    pub id: String,
    /// Username as submitted; absent if the form omitted it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// Build a new user with a freshly generated identifier.
    pub fn new(username: Option<String>) -> Self {
        Self {
            id: crate::models::new_id(),
            username,
        }
    }
}
