// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod exercise_log;
pub mod registry;

pub use exercise_log::{ExerciseLog, LogQuery, NewExercise, UserLog};
pub use registry::UserRegistry;
