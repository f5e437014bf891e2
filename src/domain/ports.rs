use crate::domain::model::{Assignment, Participant};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence seam for drawn assignments. Implementations must enforce
/// at-most-one stored result per (year, pool) so two concurrent draws for
/// the same pool cannot both persist.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn has_assignments(&self, year: i32, pool: &str) -> Result<bool>;

    /// Persists the full assignment set, failing with `AlreadyGenerated`
    /// when a result for this (year, pool) exists. Returns the storage
    /// location for reporting.
    async fn save_assignments(
        &self,
        year: i32,
        pool: &str,
        assignments: &[Assignment],
    ) -> Result<String>;

    async fn load_assignments(&self, year: i32, pool: &str) -> Result<Vec<Assignment>>;
}

/// Outbound notification seam. Email delivery itself lives behind this
/// trait; the crate only ships a logging adapter.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        year: i32,
        pool: &str,
        giver: &Participant,
        receiver: &Participant,
    ) -> Result<()>;
}
