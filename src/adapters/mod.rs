// Adapters layer: concrete implementations of the domain ports (assignment
// storage, notifications) plus the CSV export used by the CLI.

use crate::domain::model::{Assignment, Participant, PoolRoster};
use crate::domain::ports::{AssignmentStore, Notifier};
use crate::utils::error::{Result, SantaError};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed assignment store. One JSON file per (year, pool); an
/// existing file means that draw already happened and is never overwritten.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: String,
}

impl JsonFileStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn assignment_path(&self, year: i32, pool: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("assignments_{}_{}.json", pool, year))
    }
}

#[async_trait]
impl AssignmentStore for JsonFileStore {
    async fn has_assignments(&self, year: i32, pool: &str) -> Result<bool> {
        Ok(self.assignment_path(year, pool).exists())
    }

    async fn save_assignments(
        &self,
        year: i32,
        pool: &str,
        assignments: &[Assignment],
    ) -> Result<String> {
        let full_path = self.assignment_path(year, pool);

        if full_path.exists() {
            return Err(SantaError::AlreadyGenerated {
                pool: pool.to_string(),
                year,
            });
        }

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json_data = serde_json::to_string_pretty(assignments)?;
        fs::write(&full_path, json_data)?;

        Ok(full_path.display().to_string())
    }

    async fn load_assignments(&self, year: i32, pool: &str) -> Result<Vec<Assignment>> {
        let data = fs::read_to_string(self.assignment_path(year, pool))?;
        let assignments = serde_json::from_str(&data)?;
        Ok(assignments)
    }
}

/// Notification adapter that only logs. Keeps the receiver out of the log
/// line payload at info level so an admin tailing logs is not spoiled.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(
        &self,
        year: i32,
        pool: &str,
        giver: &Participant,
        receiver: &Participant,
    ) -> Result<()> {
        match &giver.email {
            Some(email) => {
                tracing::info!(
                    "📧 {} ({}): notified for the {} draw in pool '{}'",
                    giver.name,
                    email,
                    year,
                    pool
                );
            }
            None => {
                tracing::info!(
                    "📧 {}: no email on file, skipping notification for pool '{}'",
                    giver.name,
                    pool
                );
            }
        }
        tracing::debug!("{} gives to {}", giver.name, receiver.name);
        Ok(())
    }
}

/// Writes the assignment list as a CSV file next to the JSON result, with
/// names resolved from the roster.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    base_path: String,
}

impl CsvExporter {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn export(&self, roster: &PoolRoster, assignments: &[Assignment]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(format!(
            "assignments_{}_{}.csv",
            roster.name,
            assignments.first().map(|a| a.year).unwrap_or_default()
        ));

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&full_path)?;
        writer.write_record(["year", "pool", "giver_id", "giver", "receiver_id", "receiver"])?;

        for assignment in assignments {
            let giver_name = roster
                .participant(assignment.giver)
                .map(|p| p.name.as_str())
                .unwrap_or("unknown");
            let receiver_name = roster
                .participant(assignment.receiver)
                .map(|p| p.name.as_str())
                .unwrap_or("unknown");

            writer.write_record([
                assignment.year.to_string(),
                assignment.pool.clone(),
                assignment.giver.to_string(),
                giver_name.to_string(),
                assignment.receiver.to_string(),
                receiver_name.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(full_path.display().to_string())
    }
}
