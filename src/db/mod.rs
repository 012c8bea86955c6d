//! Database layer.
//!
//! Handlers only see the [`Store`] trait. Two backends implement it:
//! Firestore for deployments and an in-process store for local runs and tests.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, StorageBackend};
use crate::error::Result;
use crate::models::{Exercise, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const EXERCISES: &str = "exercises";
}

/// Document store operations used by the services.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist a new user.
    async fn insert_user(&self, user: &User) -> Result<()>;

    /// All users, in no particular order.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Look up a user by ID.
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Persist a new exercise entry.
    async fn insert_exercise(&self, exercise: &Exercise) -> Result<()>;

    /// Exercise entries matching `filter`, in the store's natural order.
    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>>;
}

/// Query over the exercises collection.
#[derive(Debug, Clone, Default)]
pub struct ExerciseFilter {
    pub user_id: String,
    /// Inclusive lower bound on `date`
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `date`
    pub to: Option<DateTime<Utc>>,
    /// Maximum number of entries returned
    pub limit: Option<u32>,
}

impl ExerciseFilter {
    /// Whether an entry satisfies the equality and range conditions.
    /// The limit is applied by the caller.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id == self.user_id
            && self.from.is_none_or(|from| exercise.date >= from)
            && self.to.is_none_or(|to| exercise.date <= to)
    }
}

/// Open the storage backend selected by the configuration.
pub async fn connect(config: &Config) -> Result<Arc<dyn Store>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Ok(Arc::new(MemoryDb::new()))
        }
        StorageBackend::Firestore => Ok(Arc::new(FirestoreDb::new(&config.gcp_project_id).await?)),
    }
}
