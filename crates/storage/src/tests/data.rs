use chrono::{TimeZone, Utc};
use liftlog_domain as domain;

pub static WORKOUTS: std::sync::LazyLock<Vec<domain::Workout>> =
    std::sync::LazyLock::new(|| vec![WORKOUT.clone(), WORKOUT_2.clone()]);

pub static WORKOUT: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: 1.into(),
        name: domain::Name::new("Upper Body").unwrap(),
        exercises: vec![EXERCISE.clone(), EXERCISE_2.clone()],
        date: Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap(),
        completed: true,
    });

pub static WORKOUT_2: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: 2.into(),
        name: domain::Name::new("Leg Day").unwrap(),
        exercises: vec![domain::Exercise {
            id: 3.into(),
            name: domain::Name::new("Squat").unwrap(),
            sets: 5,
            reps: 5,
            weight: Some(225.0),
            notes: None,
            logged_sets: None,
        }],
        date: Utc.with_ymd_and_hms(2024, 3, 3, 7, 15, 0).unwrap(),
        completed: false,
    });

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: 1.into(),
        name: domain::Name::new("Bench Press").unwrap(),
        sets: 3,
        reps: 8,
        weight: Some(135.0),
        notes: Some(String::from("Pause at the bottom")),
        logged_sets: Some(vec![
            domain::Set {
                reps: 8,
                weight: Some(135.0),
            },
            domain::Set {
                reps: 6,
                weight: Some(145.0),
            },
        ]),
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: 2.into(),
        name: domain::Name::new("Pull-up").unwrap(),
        sets: 3,
        reps: 10,
        weight: None,
        notes: None,
        logged_sets: Some(vec![domain::Set {
            reps: 10,
            weight: None,
        }]),
    });

pub static PROGRESS_ENTRIES: std::sync::LazyLock<Vec<domain::ProgressEntry>> =
    std::sync::LazyLock::new(|| vec![PROGRESS_ENTRY.clone(), PROGRESS_ENTRY_2.clone()]);

pub static PROGRESS_ENTRY: std::sync::LazyLock<domain::ProgressEntry> =
    std::sync::LazyLock::new(|| domain::ProgressEntry {
        user_id: USER.id.clone(),
        id: 1.into(),
        date: Utc.with_ymd_and_hms(2024, 3, 1, 7, 0, 0).unwrap(),
        weight: 180.5,
        body_fat: 18.0,
        measurements: domain::Measurements {
            chest: 40.0,
            waist: 33.5,
            arms: 14.0,
        },
        photos: vec![String::from("photos/2024-03-01.jpg")],
    });

pub static PROGRESS_ENTRY_2: std::sync::LazyLock<domain::ProgressEntry> =
    std::sync::LazyLock::new(|| domain::ProgressEntry {
        user_id: USER.id.clone(),
        id: 2.into(),
        date: Utc.with_ymd_and_hms(2024, 3, 8, 7, 0, 0).unwrap(),
        weight: 179.0,
        body_fat: 17.5,
        measurements: domain::Measurements {
            chest: 40.0,
            waist: 33.0,
            arms: 14.25,
        },
        photos: vec![],
    });

pub static USER: std::sync::LazyLock<domain::User> = std::sync::LazyLock::new(|| domain::User {
    id: "W4fJq2nRkLhT8s1bXyZ0".into(),
    email: String::from("alice@example.com"),
    email_verified: false,
});
