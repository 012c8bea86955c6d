//! In-process document store.
//!
//! Keeps both collections in insertion order, which is the natural order
//! returned by queries.

use crate::db::{ExerciseFilter, Store};
use crate::error::Result;
use crate::models::{Exercise, User};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryDb {
    users: RwLock<Vec<User>>,
    exercises: RwLock<Vec<Exercise>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryDb {
    async fn insert_user(&self, user: &User) -> Result<()> {
        self.users.write().await.push(user.clone());
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn insert_exercise(&self, exercise: &Exercise) -> Result<()> {
        self.exercises.write().await.push(exercise.clone());
        Ok(())
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let limit = filter.limit.map_or(usize::MAX, |limit| limit as usize);

        Ok(self
            .exercises
            .read()
            .await
            .iter()
            .filter(|exercise| filter.matches(exercise))
            .take(limit)
            .cloned()
            .collect())
    }
}
