use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{CreateError, DeleteError, ReadError, StorageError, UserID};

pub trait ProgressEntryService {
    fn get_progress_entries(&self, user_id: &UserID) -> Result<Vec<ProgressEntry>, ReadError>;
    fn create_progress_entry(&self, entry: ProgressEntry) -> Result<ProgressEntry, CreateError>;
    fn delete_progress_entry(&self, id: ProgressEntryID)
    -> Result<ProgressEntryID, DeleteError>;
}

pub trait ProgressEntryRepository {
    fn read_progress_entries(&self) -> Result<Vec<ProgressEntry>, ReadError>;
    fn write_progress_entries(&self, entries: &[ProgressEntry]) -> Result<(), StorageError>;
}

/// Body measurements of a user at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    pub user_id: UserID,
    pub id: ProgressEntryID,
    pub date: DateTime<Utc>,
    pub weight: f32,
    pub body_fat: f32,
    pub measurements: Measurements,
    /// References to stored photos.
    pub photos: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub chest: f32,
    pub waist: f32,
    pub arms: f32,
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgressEntryID(Uuid);

impl ProgressEntryID {
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

impl From<Uuid> for ProgressEntryID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ProgressEntryID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
