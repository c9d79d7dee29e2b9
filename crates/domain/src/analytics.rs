use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::Workout;

/// Names of all exercises contained in any workout, sorted and deduplicated.
#[must_use]
pub fn exercise_names(workouts: &[Workout]) -> Vec<String> {
    workouts
        .iter()
        .flat_map(|w| w.exercises.iter())
        .map(|e| e.name.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseProgress {
    pub date: DateTime<Utc>,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f32>,
}

/// Planned load of the named exercise in each workout, ordered by date.
///
/// If a workout contains the exercise multiple times, only the first
/// occurrence is taken into account.
#[must_use]
pub fn exercise_progress(workouts: &[Workout], name: &str) -> Vec<ExerciseProgress> {
    let mut progress = workouts
        .iter()
        .filter_map(|w| {
            w.exercises
                .iter()
                .find(|e| e.name.as_ref() == name)
                .map(|e| ExerciseProgress {
                    date: w.date,
                    sets: e.sets,
                    reps: e.reps,
                    weight: e.weight,
                })
        })
        .collect::<Vec<_>>();
    progress.sort_by_key(|p| p.date);
    progress
}
