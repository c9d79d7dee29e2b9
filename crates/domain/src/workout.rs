use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{CreateError, DeleteError, Exercise, Name, ReadError, StorageError, UpdateError};

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError>;
    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
    fn toggle_workout_completed(&self, id: WorkoutID) -> Result<Workout, UpdateError>;

    fn submit_workout(&self, submission: WorkoutSubmission) -> Result<Workout, CreateError> {
        match submission {
            WorkoutSubmission::New(workout) => self.create_workout(workout),
            WorkoutSubmission::Existing(workout) => Ok(self.replace_workout(workout)?),
        }
    }
}

/// Storage of the complete workout collection.
///
/// Writing always replaces the whole collection.
pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn write_workouts(&self, workouts: &[Workout]) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub exercises: Vec<Exercise>,
    pub date: DateTime<Utc>,
    pub completed: bool,
}

impl Workout {
    pub fn new(
        id: WorkoutID,
        name: Name,
        exercises: Vec<Exercise>,
        date: DateTime<Utc>,
        completed: bool,
    ) -> Result<Self, WorkoutError> {
        if exercises.is_empty() {
            return Err(WorkoutError::NoExercises);
        }
        Ok(Self {
            id,
            name,
            exercises,
            date,
            completed,
        })
    }

    #[must_use]
    pub fn has_exercise(&self, name: &str) -> bool {
        self.exercises.iter().any(|e| e.name.as_ref() == name)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error("Workout must contain at least one exercise")]
    NoExercises,
}

/// A workout which has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub name: Name,
    pub exercises: Vec<Exercise>,
    pub date: DateTime<Utc>,
    pub completed: bool,
}

impl NewWorkout {
    #[must_use]
    pub fn with_id(self, id: WorkoutID) -> Workout {
        Workout {
            id,
            name: self.name,
            exercises: self.exercises,
            date: self.date,
            completed: self.completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutSubmission {
    New(NewWorkout),
    Existing(Workout),
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
