use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{AverageReps, Name, Set, WeightRange, average_reps, sets_summary, weight_range};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    /// Planned number of sets.
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f32>,
    pub notes: Option<String>,
    /// Recorded sets, if any were logged for this exercise.
    pub logged_sets: Option<Vec<Set>>,
}

impl Exercise {
    #[must_use]
    pub fn sets_summary(&self) -> String {
        sets_summary(self.logged_sets.as_deref())
    }

    #[must_use]
    pub fn average_reps(&self) -> AverageReps {
        average_reps(self.logged_sets.as_deref())
    }

    #[must_use]
    pub fn weight_range(&self) -> WeightRange {
        weight_range(self.logged_sets.as_deref())
    }
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
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

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
