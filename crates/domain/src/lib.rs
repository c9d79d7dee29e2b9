#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod analytics;
mod auth;
mod error;
mod exercise;
mod form;
mod name;
mod progress;
mod service;
mod set;
mod user;
mod workout;

pub use analytics::*;
pub use auth::*;
pub use error::*;
pub use exercise::*;
pub use form::*;
pub use name::*;
pub use progress::*;
pub use service::*;
pub use set::*;
pub use user::*;
pub use workout::*;
