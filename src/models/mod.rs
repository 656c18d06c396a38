// Module exports for models

pub mod item;
pub mod note;
pub mod range;
pub mod settings;
