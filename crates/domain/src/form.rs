use chrono::{DateTime, Utc};

use crate::{
    Exercise, ExerciseID, Name, NewWorkout, Set, Workout, WorkoutID, WorkoutSubmission,
};

pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_REPS: u32 = 10;

/// Editing state of a single exercise row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub id: ExerciseID,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f32>,
    pub notes: Option<String>,
    logged_sets: Option<Vec<Set>>,
}

impl ExerciseDraft {
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: ExerciseID::new(),
            name: String::new(),
            sets: DEFAULT_SETS,
            reps: DEFAULT_REPS,
            weight: None,
            notes: None,
            logged_sets: None,
        }
    }

    fn apply(&mut self, field: ExerciseField) {
        match field {
            ExerciseField::Name(name) => self.name = name,
            ExerciseField::Sets(sets) => self.sets = sets.max(1),
            ExerciseField::Reps(reps) => self.reps = reps.max(1),
            ExerciseField::Weight(weight) => self.weight = weight,
            ExerciseField::Notes(notes) => {
                self.notes = if notes.is_empty() { None } else { Some(notes) }
            }
        }
    }
}

impl From<&Exercise> for ExerciseDraft {
    fn from(value: &Exercise) -> Self {
        Self {
            id: value.id,
            name: value.name.to_string(),
            sets: value.sets,
            reps: value.reps,
            weight: value.weight,
            notes: value.notes.clone(),
            logged_sets: value.logged_sets.clone(),
        }
    }
}

/// Replacement value for one field of an exercise row.
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseField {
    Name(String),
    Sets(u32),
    Reps(u32),
    Weight(Option<f32>),
    Notes(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    Sets,
    Reps,
    Weight,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter a workout name")]
    MissingWorkoutName,
    #[error("Please fill in all exercise names")]
    MissingExerciseName,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Origin {
    id: WorkoutID,
    date: DateTime<Utc>,
    completed: bool,
}

/// State of the form for creating or editing a workout.
///
/// The form always contains at least one exercise row.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    origin: Option<Origin>,
    name: String,
    exercises: Vec<ExerciseDraft>,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: None,
            name: String::new(),
            exercises: vec![ExerciseDraft::blank()],
        }
    }

    #[must_use]
    pub fn edit(workout: &Workout) -> Self {
        let mut exercises = workout
            .exercises
            .iter()
            .map(ExerciseDraft::from)
            .collect::<Vec<_>>();
        if exercises.is_empty() {
            exercises.push(ExerciseDraft::blank());
        }
        Self {
            origin: Some(Origin {
                id: workout.id,
                date: workout.date,
                completed: workout.completed,
            }),
            name: workout.name.to_string(),
            exercises,
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.origin.is_some()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Workout"
        } else {
            "Add Workout"
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDraft] {
        &self.exercises
    }

    pub fn add_exercise(&mut self) -> ExerciseID {
        let exercise = ExerciseDraft::blank();
        let id = exercise.id;
        self.exercises.push(exercise);
        id
    }

    #[must_use]
    pub fn can_remove_exercise(&self) -> bool {
        self.exercises.len() > 1
    }

    pub fn remove_exercise(&mut self, id: ExerciseID) {
        if !self.can_remove_exercise() {
            return;
        }
        self.exercises.retain(|e| e.id != id);
    }

    pub fn update_exercise(&mut self, id: ExerciseID, field: ExerciseField) {
        if let Some(exercise) = self.exercises.iter_mut().find(|e| e.id == id) {
            exercise.apply(field);
        }
    }

    /// Update a numeric field from the raw text of an input element.
    pub fn update_number(&mut self, id: ExerciseID, field: NumberField, value: &str) {
        let field = match field {
            NumberField::Sets => ExerciseField::Sets(coerce_count(value)),
            NumberField::Reps => ExerciseField::Reps(coerce_count(value)),
            NumberField::Weight => ExerciseField::Weight(coerce_weight(value)),
        };
        self.update_exercise(id, field);
    }

    pub fn submit(&self) -> Result<WorkoutSubmission, FormError> {
        let name = Name::new(&self.name).map_err(|_| FormError::MissingWorkoutName)?;
        let exercises = self
            .exercises
            .iter()
            .map(|e| {
                Ok(Exercise {
                    id: e.id,
                    name: Name::new(&e.name).map_err(|_| FormError::MissingExerciseName)?,
                    sets: e.sets,
                    reps: e.reps,
                    weight: e.weight,
                    notes: e.notes.clone(),
                    logged_sets: e.logged_sets.clone(),
                })
            })
            .collect::<Result<Vec<_>, FormError>>()?;

        Ok(match self.origin {
            Some(origin) => WorkoutSubmission::Existing(Workout {
                id: origin.id,
                name,
                exercises,
                date: origin.date,
                completed: origin.completed,
            }),
            None => WorkoutSubmission::New(NewWorkout {
                name,
                exercises,
                date: Utc::now(),
                completed: false,
            }),
        })
    }
}

/// Coerce the text of a sets or reps input.
///
/// Empty or unparsable input yields 1, all values are at least 1.
#[must_use]
pub fn coerce_count(value: &str) -> u32 {
    if value.is_empty() {
        return 1;
    }
    match parse_leading_integer(value) {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Coerce the text of a weight input.
///
/// Empty input means no weight, unparsable input yields 1.
#[must_use]
pub fn coerce_weight(value: &str) -> Option<f32> {
    if value.is_empty() {
        return None;
    }
    let weight = parse_leading_integer(value).unwrap_or(1).max(0);
    #[allow(clippy::cast_precision_loss)]
    Some(weight as f32)
}

/// Parse the integer at the start of `value`, ignoring any trailing text.
fn parse_leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect::<Vec<_>>();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}
