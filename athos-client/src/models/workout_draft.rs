//! Turning loosely-typed workout form input into request payloads.
//!
//! Drafts hold raw strings as entered. `build` trims, validates and converts
//! them, failing with [`ClientError::Validation`] before any request is made.

use super::workout::{
    CardioSessionInput, CardioWorkout, CreateWorkout, StrengthSetInput, StrengthWorkout,
};
use athos_core::{ClientError, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use uuid::Uuid;

const METERS_PER_MILE: f64 = 1609.344;

/// One strength set row as typed into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrengthSetRow {
    pub exercise_name: String,
    pub weight: String,
    pub reps: String,
}

impl StrengthSetRow {
    pub fn new(
        exercise_name: impl Into<String>,
        weight: impl Into<String>,
        reps: impl Into<String>,
    ) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            weight: weight.into(),
            reps: reps.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StrengthWorkoutDraft {
    pub title: String,
    pub start_ts: Option<DateTime<Utc>>,
    pub sets: Vec<StrengthSetRow>,
}

impl StrengthWorkoutDraft {
    pub fn build(&self) -> Result<CreateWorkout> {
        let mut strength_sets = Vec::with_capacity(self.sets.len());

        for row in &self.sets {
            let exercise_name = row.exercise_name.trim();
            if exercise_name.is_empty() {
                continue;
            }

            strength_sets.push(StrengthSetInput {
                exercise_name: exercise_name.to_string(),
                weight: parse_finite(&row.weight, "Weight must be a number.")?,
                reps: parse_optional(&row.reps, "Reps must be a non-negative whole number.")?,
            });
        }

        if strength_sets.is_empty() {
            return Err(ClientError::Validation(
                "Add at least one strength set with an exercise name.".to_string(),
            ));
        }

        Ok(CreateWorkout::Strength(StrengthWorkout {
            title: non_empty(&self.title),
            strength_sets,
            client_uuid: Uuid::new_v4(),
            start_ts: self.start_ts,
        }))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardioWorkoutDraft {
    pub title: String,
    pub start_ts: Option<DateTime<Utc>>,
    pub activity_type: String,
    pub duration_seconds: String,
    pub distance_m: String,
    pub avg_hr: String,
    pub calories: String,
}

impl CardioWorkoutDraft {
    pub fn build(&self) -> Result<CreateWorkout> {
        let activity_type = self.activity_type.trim();
        if activity_type.is_empty() {
            return Err(ClientError::Validation(
                "Activity type is required for cardio.".to_string(),
            ));
        }

        let duration = self.duration_seconds.trim();
        if duration.is_empty() {
            return Err(ClientError::Validation(
                "Duration seconds is required for cardio.".to_string(),
            ));
        }
        let duration_seconds = match duration.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 && value.round() < u64::MAX as f64 => {
                value.round() as u64
            }
            _ => {
                return Err(ClientError::Validation(
                    "Duration seconds must be a non-negative number.".to_string(),
                ))
            }
        };

        let distance_miles = parse_finite(&self.distance_m, "Distance must be a number.")?
            .map(|meters| meters / METERS_PER_MILE);

        let mut notes = vec![format!("activity_type={}", activity_type)];
        if let Some(avg_hr) = non_empty(&self.avg_hr) {
            notes.push(format!("avg_hr={}", avg_hr));
        }
        if let Some(calories) = non_empty(&self.calories) {
            notes.push(format!("calories={}", calories));
        }

        Ok(CreateWorkout::Cardio(CardioWorkout {
            title: Some(non_empty(&self.title).unwrap_or_else(|| activity_type.to_string())),
            cardio_session: CardioSessionInput {
                duration_seconds,
                distance_miles,
                notes: notes.join("; "),
            },
            client_uuid: Uuid::new_v4(),
            start_ts: self.start_ts,
        }))
    }
}

/// Parse a start time given as RFC 3339, or as a local `YYYY-MM-DDTHH:MM[:SS]`
/// wall-clock time.
pub fn parse_start_ts(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ClientError::Validation("Invalid start time".to_string()))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Like [`parse_optional`] for floats, also rejecting `NaN` and infinities.
fn parse_finite(value: &str, message: &str) -> Result<Option<f64>> {
    match parse_optional::<f64>(value, message)? {
        Some(number) if !number.is_finite() => Err(ClientError::Validation(message.to_string())),
        parsed => Ok(parsed),
    }
}

fn parse_optional<T: std::str::FromStr>(value: &str, message: &str) -> Result<Option<T>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ClientError::Validation(message.to_string()))
}
