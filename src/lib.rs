pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{CsvExporter, JsonFileStore, LogNotifier};
pub use crate::config::{pool_file::PoolFile, CliConfig};
pub use crate::core::engine::DrawEngine;
pub use crate::core::generator::{generate, DrawSettings};
pub use crate::domain::model::{
    Assignment, DrawSummary, Exclusion, Participant, ParticipantId, PoolRoster,
};
pub use crate::utils::error::{Result, SantaError};
