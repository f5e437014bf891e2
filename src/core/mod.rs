pub mod engine;
pub mod generator;

pub use crate::domain::model::{Assignment, DrawSummary, PoolRoster};
pub use crate::domain::ports::{AssignmentStore, Notifier};
pub use crate::utils::error::Result;
