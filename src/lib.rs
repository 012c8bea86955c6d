// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise Tracker: register users and log timed exercises
//!
//! This crate provides the HTTP API for recording exercise entries per user
//! and retrieving a filtered log for each user.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use db::Store;
use services::{ExerciseLog, UserRegistry};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub registry: UserRegistry,
    pub exercise_log: ExerciseLog,
}

impl AppState {
    /// Build the state around an already opened storage handle.
    pub fn new(db: Arc<dyn Store>) -> Self {
        Self {
            registry: UserRegistry::new(db.clone()),
            exercise_log: ExerciseLog::new(db),
        }
    }
}
