use liftlog_domain::{WorkoutForm, WorkoutSubmission};
use log::debug;

/// Receiver of the outcome of a workout form.
pub trait WorkoutFormHandler {
    fn submit(&mut self, workout: WorkoutSubmission);
    fn cancel(&mut self);
    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);
}

/// Validate the form and pass the workout to the handler.
///
/// Returns whether the workout was submitted.
pub fn submit(form: &WorkoutForm, handler: &mut impl WorkoutFormHandler) -> bool {
    match form.submit() {
        Ok(workout) => {
            handler.submit(workout);
            true
        }
        Err(err) => {
            debug!("rejected workout form: {err}");
            handler.alert(&err.to_string());
            false
        }
    }
}

pub fn cancel(handler: &mut impl WorkoutFormHandler) {
    handler.cancel();
}
