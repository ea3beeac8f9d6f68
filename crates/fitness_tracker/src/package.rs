//! Dispatch of raw sensor packages to the matching [`Training`].

use serde::{Deserialize, Serialize};

use crate::{TrackerError, TrackerResult, Training, Workout, WorkoutKind};

/// One sensor record: a workout code and its numeric tuple.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> TrackerResult<Training> {
        read_package(&self.code, &self.data)
    }
}

/// Build the training described by `code` from the sensor values in `data`.
///
/// Layouts by code:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, pool length, pool count
pub fn read_package(code: &str, data: &[f64]) -> TrackerResult<Training> {
    let kind = code.parse::<WorkoutKind>().inspect_err(|e| {
        tracing::warn!("rejected package: {}", e);
    })?;
    let training = build(kind, data).inspect_err(|e| {
        tracing::warn!("rejected {} package: {}", kind, e);
    })?;
    tracing::debug!(code = kind.code(), values = data.len(), "package dispatched");
    metrics::counter!("fitness_tracker_packages_total", "type" => kind.code()).increment(1);
    Ok(training)
}

fn build(kind: WorkoutKind, data: &[f64]) -> TrackerResult<Training> {
    if data.len() != kind.field_count() {
        return Err(TrackerError::FieldCount {
            code: kind.code(),
            expected: kind.field_count(),
            got: data.len(),
        });
    }
    let workout = Workout::new(data[0], data[1], data[2])?;
    match kind {
        WorkoutKind::Running => Ok(Training::running(workout)),
        WorkoutKind::SportsWalking => Training::sports_walking(workout, data[3]),
        WorkoutKind::Swimming => Training::swimming(workout, data[3], data[4]),
    }
}
