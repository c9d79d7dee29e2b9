use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use gloo_storage::Storage as GlooStorage;
use liftlog_domain as domain;
use liftlog_web_app::{Settings, SettingsRepository, log};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use uuid::Uuid;

/// Browser local storage holding all records of the app.
pub struct LocalStorage;

impl domain::WorkoutRepository for LocalStorage {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        read::<Vec<Workout>>(Key::Workouts)?
            .unwrap_or_default()
            .into_iter()
            .map(|w| {
                domain::Workout::try_from(w).map_err(|err| domain::ReadError::Other(Box::new(err)))
            })
            .collect()
    }

    fn write_workouts(&self, workouts: &[domain::Workout]) -> Result<(), domain::StorageError> {
        write(
            Key::Workouts,
            &workouts.iter().map(Workout::from).collect::<Vec<_>>(),
        )
    }
}

impl domain::ProgressEntryRepository for LocalStorage {
    fn read_progress_entries(&self) -> Result<Vec<domain::ProgressEntry>, domain::ReadError> {
        Ok(read::<Vec<ProgressEntry>>(Key::Progress)?
            .unwrap_or_default()
            .into_iter()
            .map(domain::ProgressEntry::from)
            .collect())
    }

    fn write_progress_entries(
        &self,
        entries: &[domain::ProgressEntry],
    ) -> Result<(), domain::StorageError> {
        write(
            Key::Progress,
            &entries.iter().map(ProgressEntry::from).collect::<Vec<_>>(),
        )
    }
}

impl SettingsRepository for LocalStorage {
    fn read_settings(&self) -> Result<Settings, String> {
        read(Key::Settings)
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    fn write_settings(&self, settings: Settings) -> Result<(), String> {
        write(Key::Settings, &settings).map_err(|err| err.to_string())
    }
}

impl LocalStorage {
    pub fn read_session(&self) -> Result<Session, domain::StorageError> {
        read(Key::Session)?.ok_or(domain::StorageError::NoSession)
    }

    pub fn write_session(&self, session: &Session) -> Result<(), domain::StorageError> {
        write(Key::Session, session)
    }

    pub fn delete_session(&self) {
        gloo_storage::LocalStorage::delete(Key::Session.as_ref());
    }
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        read(Key::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        write(Key::Log, &entries).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "workouts")]
    Workouts,
    #[strum(serialize = "progress")]
    Progress,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
    #[strum(serialize = "session")]
    Session,
}

fn read<T: DeserializeOwned>(key: Key) -> Result<Option<T>, domain::StorageError> {
    match gloo_storage::LocalStorage::get(key.as_ref()) {
        Ok(value) => Ok(Some(value)),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => Err(domain::StorageError::Other(Box::new(err))),
    }
}

fn write<T: Serialize>(key: Key, value: &T) -> Result<(), domain::StorageError> {
    gloo_storage::LocalStorage::set(key.as_ref(), value)
        .map_err(|err| domain::StorageError::Other(Box::new(err)))
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidWorkout(#[from] domain::WorkoutError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub date: DateTime<Utc>,
    pub completed: bool,
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            date: value.date,
            completed: value.completed,
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = Error;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(domain::Workout::new(
            value.id.into(),
            domain::Name::new(&value.name)?,
            value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            value.date,
            value.completed,
        )?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_sets: Option<Vec<Set>>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            sets: value.sets,
            reps: value.reps,
            weight: value.weight,
            notes: value.notes.clone(),
            logged_sets: value
                .logged_sets
                .as_ref()
                .map(|sets| sets.iter().copied().map(Set::from).collect()),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = Error;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            sets: value.sets,
            reps: value.reps,
            weight: value.weight,
            notes: value.notes,
            logged_sets: value
                .logged_sets
                .map(|sets| sets.into_iter().map(domain::Set::from).collect()),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl From<domain::Set> for Set {
    fn from(value: domain::Set) -> Self {
        Self {
            reps: value.reps,
            weight: value.weight,
        }
    }
}

impl From<Set> for domain::Set {
    fn from(value: Set) -> Self {
        Self {
            reps: value.reps,
            weight: value.weight,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub user_id: String,
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub weight: f32,
    pub body_fat: f32,
    pub measurements: Measurements,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl From<&domain::ProgressEntry> for ProgressEntry {
    fn from(value: &domain::ProgressEntry) -> Self {
        Self {
            user_id: value.user_id.to_string(),
            id: *value.id,
            date: value.date,
            weight: value.weight,
            body_fat: value.body_fat,
            measurements: Measurements {
                chest: value.measurements.chest,
                waist: value.measurements.waist,
                arms: value.measurements.arms,
            },
            photos: value.photos.clone(),
        }
    }
}

impl From<ProgressEntry> for domain::ProgressEntry {
    fn from(value: ProgressEntry) -> Self {
        Self {
            user_id: value.user_id.into(),
            id: value.id.into(),
            date: value.date,
            weight: value.weight,
            body_fat: value.body_fat,
            measurements: domain::Measurements {
                chest: value.measurements.chest,
                waist: value.measurements.waist,
                arms: value.measurements.arms,
            },
            photos: value.photos,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub chest: f32,
    pub waist: f32,
    pub arms: f32,
}

/// Signed-in account together with the token authorizing its requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub email_verified: bool,
    pub id_token: String,
}

impl Session {
    #[must_use]
    pub fn user(&self) -> domain::User {
        domain::User {
            id: self.user_id.clone().into(),
            email: self.email.clone(),
            email_verified: self.email_verified,
        }
    }
}
