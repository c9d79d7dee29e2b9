#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

pub mod chart;
pub mod log;
mod service;
mod settings;
pub mod workout_form;
pub mod workout_list;

pub use service::*;
pub use settings::*;
