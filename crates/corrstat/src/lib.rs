//! corrstat library — application logic for the corrstat binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
