use liftlog_domain::{Exercise, ExerciseID, WeightUnit, Workout, WorkoutID};
use log::warn;

/// Handlers for the actions offered on each workout of the list.
pub trait WorkoutListActions {
    fn edit(&mut self, workout: &Workout);
    fn delete(&mut self, id: WorkoutID);
    fn toggle_complete(&mut self, id: WorkoutID);
    fn view(&mut self, id: WorkoutID);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutListAction {
    Edit(WorkoutID),
    Delete(WorkoutID),
    ToggleComplete(WorkoutID),
    View(WorkoutID),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutItem {
    pub id: WorkoutID,
    pub title: String,
    pub completed: bool,
    pub exercise_count: String,
    pub toggle_title: &'static str,
    pub exercises: Vec<ExerciseDetail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDetail {
    pub id: ExerciseID,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub note: Option<String>,
}

impl ExerciseDetail {
    fn new(exercise: &Exercise, unit: WeightUnit) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.to_string(),
            sets: exercise.sets_summary(),
            reps: format!("~{} reps", exercise.average_reps()),
            weight: exercise.weight_range().display(unit),
            note: exercise
                .notes
                .as_ref()
                .filter(|notes| !notes.is_empty())
                .map(|notes| format!("Note: {notes}")),
        }
    }
}

/// Prepare the items of the workout list in the given order.
#[must_use]
pub fn present(workouts: &[Workout], unit: WeightUnit) -> Vec<WorkoutItem> {
    workouts
        .iter()
        .map(|workout| WorkoutItem {
            id: workout.id,
            title: workout.name.to_string(),
            completed: workout.completed,
            exercise_count: match workout.exercises.len() {
                1 => String::from("1 exercise"),
                n => format!("{n} exercises"),
            },
            toggle_title: if workout.completed {
                "Mark as incomplete"
            } else {
                "Mark as completed"
            },
            exercises: workout
                .exercises
                .iter()
                .map(|e| ExerciseDetail::new(e, unit))
                .collect(),
        })
        .collect()
}

pub fn dispatch(
    action: WorkoutListAction,
    workouts: &[Workout],
    actions: &mut impl WorkoutListActions,
) {
    match action {
        WorkoutListAction::Edit(id) => match workouts.iter().find(|w| w.id == id) {
            Some(workout) => actions.edit(workout),
            None => warn!("failed to edit workout: {id} not found"),
        },
        WorkoutListAction::Delete(id) => actions.delete(id),
        WorkoutListAction::ToggleComplete(id) => actions.toggle_complete(id),
        WorkoutListAction::View(id) => actions.view(id),
    }
}
