//! Distance, speed and calorie formulas for each workout kind.

use crate::{InfoMessage, TrackerError, TrackerResult, WorkoutKind};

const M_IN_KM: f64 = 1000.0;
const CM_IN_M: f64 = 100.0;
const MIN_IN_H: f64 = 60.0;

/// Step length in meters for running and walking.
const LEN_STEP: f64 = 0.65;
/// Stroke length in meters.
const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MSEC: f64 = 0.278;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Readings shared by every workout kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Workout {
    /// Steps or strokes.
    pub action: f64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl Workout {
    pub fn new(action: f64, duration: f64, weight: f64) -> TrackerResult<Self> {
        finite("action", action)?;
        finite("weight", weight)?;
        nonzero("duration", duration)?;
        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Training {
    Running(Workout),
    SportsWalking {
        workout: Workout,
        /// Centimeters.
        height: f64,
    },
    Swimming {
        workout: Workout,
        /// Meters.
        length_pool: f64,
        count_pool: f64,
    },
}

impl Training {
    pub fn running(workout: Workout) -> Self {
        Training::Running(workout)
    }

    pub fn sports_walking(workout: Workout, height: f64) -> TrackerResult<Self> {
        nonzero("height", height)?;
        Ok(Training::SportsWalking { workout, height })
    }

    pub fn swimming(workout: Workout, length_pool: f64, count_pool: f64) -> TrackerResult<Self> {
        finite("length_pool", length_pool)?;
        finite("count_pool", count_pool)?;
        Ok(Training::Swimming {
            workout,
            length_pool,
            count_pool,
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Training::Running(_) => WorkoutKind::Running,
            Training::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Training::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn workout(&self) -> &Workout {
        match self {
            Training::Running(workout)
            | Training::SportsWalking { workout, .. }
            | Training::Swimming { workout, .. } => workout,
        }
    }

    fn step_len(&self) -> f64 {
        match self {
            Training::Swimming { .. } => LEN_STROKE,
            _ => LEN_STEP,
        }
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.workout().action * self.step_len() / M_IN_KM
    }

    /// Mean speed in km/h. Swimming measures it by pool laps, not strokes.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Swimming {
                workout,
                length_pool,
                count_pool,
            } => length_pool * count_pool / M_IN_KM / workout.duration,
            _ => self.distance() / self.workout().duration,
        }
    }

    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        match self {
            Training::Running(w) => {
                (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * w.weight / M_IN_KM
                    * w.duration
                    * MIN_IN_H
            }
            Training::SportsWalking { workout: w, height } => {
                (WLK_WEIGHT_MULTIPLIER * w.weight
                    + ((speed * KMH_IN_MSEC).powi(2) / (height / CM_IN_M))
                        * WLK_SPEED_HEIGHT_MULTIPLIER
                        * w.weight)
                    * w.duration
                    * MIN_IN_H
            }
            Training::Swimming { workout: w, .. } => {
                (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * w.weight * w.duration
            }
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().name().to_string(),
            duration: self.workout().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

fn finite(field: &str, value: f64) -> TrackerResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TrackerError::InvalidReading(format!(
            "{field} must be a finite number, got {value}"
        )))
    }
}

fn nonzero(field: &str, value: f64) -> TrackerResult<()> {
    finite(field, value)?;
    if value == 0.0 {
        return Err(TrackerError::InvalidReading(format!("{field} must not be zero")));
    }
    Ok(())
}
