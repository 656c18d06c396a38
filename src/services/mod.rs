// Service module exports

pub mod agenda;
pub mod clock;
pub mod navigation;
pub mod settings;
pub mod store;
