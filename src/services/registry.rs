// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User registry: creates and lists user records.

use crate::db::Store;
use crate::error::Result;
use crate::models::User;
use std::sync::Arc;

pub struct UserRegistry {
    db: Arc<dyn Store>,
}

impl UserRegistry {
    pub fn new(db: Arc<dyn Store>) -> Self {
        Self { db }
    }

    /// Register a user. The username is stored exactly as given.
    pub async fn create_user(&self, username: Option<String>) -> Result<User> {
        let user = User::new(username);
        self.db.insert_user(&user).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// All registered users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.db.list_users().await
    }
}
