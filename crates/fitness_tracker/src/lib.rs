//! Workout statistics from raw sensor packages.
//!
//! A package is a short workout code plus a numeric tuple. [`read_package`]
//! turns it into a [`Training`], which computes distance, mean speed and
//! spent calories and renders them as an [`InfoMessage`].

use thiserror::Error;

pub mod config;
pub mod kind;
pub mod message;
pub mod package;
pub mod training;

pub use kind::WorkoutKind;
pub use message::InfoMessage;
pub use package::{Package, read_package};
pub use training::{Training, Workout};

#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("unknown workout type: {0}")]
    UnknownWorkout(String),
    #[error("{code} expects {expected} values, got {got}")]
    FieldCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid reading: {0}")]
    InvalidReading(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
