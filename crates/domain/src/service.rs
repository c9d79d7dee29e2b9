use log::{debug, error};

use crate::{
    CreateError, DeleteError, NewWorkout, ProgressEntry, ProgressEntryID,
    ProgressEntryRepository, ProgressEntryService, ReadError, UpdateError, UserID, Workout,
    WorkoutError, WorkoutID, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> Service<R> {
    fn add_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError> {
        if workout.exercises.is_empty() {
            return Err(CreateError::Other(Box::new(WorkoutError::NoExercises)));
        }
        let mut workouts = self.repository.read_workouts()?;
        let mut id = WorkoutID::new();
        while workouts.iter().any(|w| w.id == id) {
            id = WorkoutID::new();
        }
        let workout = workout.with_id(id);
        workouts.push(workout.clone());
        self.repository.write_workouts(&workouts)?;
        Ok(workout)
    }

    fn modify_workout(
        &self,
        id: WorkoutID,
        modify: impl FnOnce(&mut Workout),
    ) -> Result<Workout, UpdateError> {
        let mut workouts = self.repository.read_workouts()?;
        let Some(workout) = workouts.iter_mut().find(|w| w.id == id) else {
            return Err(UpdateError::NotFound);
        };
        modify(workout);
        if workout.exercises.is_empty() {
            return Err(UpdateError::Other(Box::new(WorkoutError::NoExercises)));
        }
        let workout = workout.clone();
        self.repository.write_workouts(&workouts)?;
        Ok(workout)
    }

    fn remove_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        let mut workouts = self.repository.read_workouts()?;
        let len = workouts.len();
        workouts.retain(|w| w.id != id);
        if workouts.len() != len {
            self.repository.write_workouts(&workouts)?;
        }
        Ok(id)
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), ReadError, "get", "workouts")
    }

    fn create_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError> {
        log_on_error!(self.add_workout(workout), CreateError, "create", "workout")
    }

    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.modify_workout(workout.id, |w| *w = workout.clone()),
            UpdateError,
            "replace",
            "workout"
        )
    }

    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(self.remove_workout(id), DeleteError, "delete", "workout")
    }

    fn toggle_workout_completed(&self, id: WorkoutID) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.modify_workout(id, |w| w.completed = !w.completed),
            UpdateError,
            "toggle",
            "workout"
        )
    }
}

impl<R: ProgressEntryRepository> Service<R> {
    fn add_progress_entry(&self, mut entry: ProgressEntry) -> Result<ProgressEntry, CreateError> {
        let mut entries = self.repository.read_progress_entries()?;
        if entry.id.is_nil() {
            entry.id = ProgressEntryID::new();
        } else if entries.iter().any(|e| e.id == entry.id) {
            return Err(CreateError::Conflict);
        }
        entries.push(entry.clone());
        self.repository.write_progress_entries(&entries)?;
        Ok(entry)
    }

    fn remove_progress_entry(&self, id: ProgressEntryID) -> Result<ProgressEntryID, DeleteError> {
        let mut entries = self.repository.read_progress_entries()?;
        let len = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() != len {
            self.repository.write_progress_entries(&entries)?;
        }
        Ok(id)
    }
}

impl<R: ProgressEntryRepository> ProgressEntryService for Service<R> {
    fn get_progress_entries(&self, user_id: &UserID) -> Result<Vec<ProgressEntry>, ReadError> {
        log_on_error!(
            self.repository.read_progress_entries().map(|entries| {
                let mut entries = entries
                    .into_iter()
                    .filter(|e| e.user_id == *user_id)
                    .collect::<Vec<_>>();
                entries.sort_by_key(|e| e.date);
                entries
            }),
            ReadError,
            "get",
            "progress entries"
        )
    }

    fn create_progress_entry(&self, entry: ProgressEntry) -> Result<ProgressEntry, CreateError> {
        log_on_error!(
            self.add_progress_entry(entry),
            CreateError,
            "create",
            "progress entry"
        )
    }

    fn delete_progress_entry(
        &self,
        id: ProgressEntryID,
    ) -> Result<ProgressEntryID, DeleteError> {
        log_on_error!(
            self.remove_progress_entry(id),
            DeleteError,
            "delete",
            "progress entry"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Exercise, Measurements, Name, StorageError, WorkoutSubmission};

    #[derive(Default)]
    struct FakeRepository {
        workouts: RefCell<Vec<Workout>>,
        progress_entries: RefCell<Vec<ProgressEntry>>,
        writes: Cell<u32>,
        offline: bool,
    }

    impl WorkoutRepository for FakeRepository {
        fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
            if self.offline {
                return Err(StorageError::NoConnection.into());
            }
            Ok(self.workouts.borrow().clone())
        }

        fn write_workouts(&self, workouts: &[Workout]) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            *self.workouts.borrow_mut() = workouts.to_vec();
            Ok(())
        }
    }

    impl ProgressEntryRepository for FakeRepository {
        fn read_progress_entries(&self) -> Result<Vec<ProgressEntry>, ReadError> {
            if self.offline {
                return Err(StorageError::NoConnection.into());
            }
            Ok(self.progress_entries.borrow().clone())
        }

        fn write_progress_entries(&self, entries: &[ProgressEntry]) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            *self.progress_entries.borrow_mut() = entries.to_vec();
            Ok(())
        }
    }

    fn new_workout(name: &str) -> NewWorkout {
        NewWorkout {
            name: Name::new(name).unwrap(),
            exercises: vec![Exercise {
                id: 1.into(),
                name: Name::new("Squat").unwrap(),
                sets: 3,
                reps: 10,
                weight: None,
                notes: None,
                logged_sets: None,
            }],
            date: Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap(),
            completed: false,
        }
    }

    fn progress_entry(id: u128, user_id: &str, day: u32) -> ProgressEntry {
        ProgressEntry {
            user_id: user_id.into(),
            id: id.into(),
            date: Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap(),
            weight: 80.0,
            body_fat: 15.0,
            measurements: Measurements {
                chest: 100.0,
                waist: 80.0,
                arms: 35.0,
            },
            photos: vec![],
        }
    }

    #[test]
    fn test_create_workout() {
        let service = Service::new(FakeRepository::default());

        let a = service.create_workout(new_workout("A")).unwrap();
        let b = service.create_workout(new_workout("B")).unwrap();

        assert!(!a.id.is_nil());
        assert_ne!(a.id, b.id);
        assert_eq!(service.get_workouts().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_replace_workout() {
        let service = Service::new(FakeRepository::default());
        let a = service.create_workout(new_workout("A")).unwrap();
        let b = service.create_workout(new_workout("B")).unwrap();

        let renamed = Workout {
            name: Name::new("A2").unwrap(),
            ..a.clone()
        };
        assert_eq!(service.replace_workout(renamed.clone()).unwrap(), renamed);
        assert_eq!(service.get_workouts().unwrap(), vec![renamed, b]);
    }

    #[test]
    fn test_replace_unknown_workout() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            service.replace_workout(new_workout("A").with_id(1.into())),
            Err(UpdateError::NotFound)
        ));
        assert_eq!(service.repository.writes.get(), 0);
    }

    #[test]
    fn test_submit_workout() {
        let service = Service::new(FakeRepository::default());
        let created = service
            .submit_workout(WorkoutSubmission::New(new_workout("A")))
            .unwrap();
        let updated = service
            .submit_workout(WorkoutSubmission::Existing(Workout {
                completed: true,
                ..created.clone()
            }))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(service.get_workouts().unwrap(), vec![updated]);
    }

    #[test]
    fn test_submit_unknown_workout() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            service.submit_workout(WorkoutSubmission::Existing(
                new_workout("A").with_id(1.into())
            )),
            Err(CreateError::NotFound)
        ));
        assert_eq!(service.repository.writes.get(), 0);
    }

    #[test]
    fn test_workout_without_exercises() {
        let service = Service::new(FakeRepository::default());
        let a = service.create_workout(new_workout("A")).unwrap();
        let writes = service.repository.writes.get();

        assert!(matches!(
            service.create_workout(NewWorkout {
                exercises: vec![],
                ..new_workout("B")
            }),
            Err(CreateError::Other(err))
                if err.downcast_ref::<WorkoutError>() == Some(&WorkoutError::NoExercises)
        ));
        assert!(matches!(
            service.replace_workout(Workout {
                exercises: vec![],
                ..a.clone()
            }),
            Err(UpdateError::Other(err))
                if err.downcast_ref::<WorkoutError>() == Some(&WorkoutError::NoExercises)
        ));
        assert_eq!(service.repository.writes.get(), writes);
        assert_eq!(service.get_workouts().unwrap(), vec![a]);
    }

    #[test]
    fn test_delete_workout() {
        let service = Service::new(FakeRepository::default());
        let a = service.create_workout(new_workout("A")).unwrap();
        let b = service.create_workout(new_workout("B")).unwrap();

        assert_eq!(service.delete_workout(a.id).unwrap(), a.id);
        assert_eq!(service.get_workouts().unwrap(), vec![b]);
    }

    #[test]
    fn test_delete_unknown_workout() {
        let service = Service::new(FakeRepository::default());
        service.create_workout(new_workout("A")).unwrap();
        let writes = service.repository.writes.get();

        assert_eq!(service.delete_workout(9.into()).unwrap(), 9.into());
        assert_eq!(service.get_workouts().unwrap().len(), 1);
        assert_eq!(service.repository.writes.get(), writes);
    }

    #[test]
    fn test_toggle_workout_completed() {
        let service = Service::new(FakeRepository::default());
        let a = service.create_workout(new_workout("A")).unwrap();

        assert!(service.toggle_workout_completed(a.id).unwrap().completed);
        assert!(service.get_workouts().unwrap()[0].completed);
        assert!(!service.toggle_workout_completed(a.id).unwrap().completed);
        assert!(matches!(
            service.toggle_workout_completed(9.into()),
            Err(UpdateError::NotFound)
        ));
    }

    #[test]
    fn test_storage_errors() {
        let service = Service::new(FakeRepository {
            offline: true,
            ..FakeRepository::default()
        });
        assert!(matches!(
            service.get_workouts(),
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
        assert!(matches!(
            service.create_workout(new_workout("A")),
            Err(CreateError::Storage(StorageError::NoConnection))
        ));
        assert!(matches!(
            service.delete_workout(1.into()),
            Err(DeleteError::Storage(StorageError::NoConnection))
        ));
        assert!(matches!(
            service.toggle_workout_completed(1.into()),
            Err(UpdateError::Storage(StorageError::NoConnection))
        ));
    }

    #[test]
    fn test_get_progress_entries() {
        let service = Service::new(FakeRepository {
            progress_entries: RefCell::new(vec![
                progress_entry(1, "alice", 3),
                progress_entry(2, "bob", 1),
                progress_entry(3, "alice", 2),
            ]),
            ..FakeRepository::default()
        });
        assert_eq!(
            service.get_progress_entries(&"alice".into()).unwrap(),
            vec![progress_entry(3, "alice", 2), progress_entry(1, "alice", 3)]
        );
        assert_eq!(service.get_progress_entries(&"carol".into()).unwrap(), vec![]);
    }

    #[test]
    fn test_create_progress_entry() {
        let service = Service::new(FakeRepository::default());

        let created = service
            .create_progress_entry(progress_entry(0, "alice", 1))
            .unwrap();
        assert!(!created.id.is_nil());

        assert_eq!(
            service
                .create_progress_entry(progress_entry(5, "alice", 2))
                .unwrap()
                .id,
            5.into()
        );
        assert!(matches!(
            service.create_progress_entry(progress_entry(5, "alice", 3)),
            Err(CreateError::Conflict)
        ));
        assert_eq!(service.get_progress_entries(&"alice".into()).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_progress_entry() {
        let service = Service::new(FakeRepository {
            progress_entries: RefCell::new(vec![
                progress_entry(1, "alice", 1),
                progress_entry(2, "alice", 2),
            ]),
            ..FakeRepository::default()
        });
        assert_eq!(service.delete_progress_entry(1.into()).unwrap(), 1.into());
        assert_eq!(
            service.get_progress_entries(&"alice".into()).unwrap(),
            vec![progress_entry(2, "alice", 2)]
        );
    }
}
