// Notes Agenda Library
// Slot layout, "now" tracking and range navigation for the notes calendar

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AgendaError, Result};
