use crate::core::generator::{self, DrawSettings};
use crate::domain::model::{Assignment, DrawSummary, PoolRoster};
use crate::domain::ports::{AssignmentStore, Notifier};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::Validate;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Orchestrates one draw for a (year, pool): precondition checks, the
/// randomized generation itself, persistence, and notifications.
pub struct DrawEngine<S: AssignmentStore, N: Notifier> {
    store: S,
    notifier: N,
    settings: DrawSettings,
    seed: Option<u64>,
}

impl<S: AssignmentStore, N: Notifier> DrawEngine<S, N> {
    pub fn new(store: S, notifier: N, settings: DrawSettings) -> Self {
        Self {
            store,
            notifier,
            settings,
            seed: None,
        }
    }

    /// Pins the RNG seed so a draw can be replayed exactly.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub async fn run(&self, roster: &PoolRoster, year: i32) -> Result<DrawSummary> {
        tracing::info!("🎁 Starting draw for pool '{}' ({})", roster.name, year);

        roster.validate()?;

        if roster.participants.len() < 2 {
            return Err(SantaError::InsufficientParticipants {
                found: roster.participants.len(),
            });
        }

        if self.store.has_assignments(year, &roster.name).await? {
            return Err(SantaError::AlreadyGenerated {
                pool: roster.name.clone(),
                year,
            });
        }

        let participants = roster.participant_ids();
        let exclusions = roster.exclusion_lookup();
        tracing::debug!(
            "Drawing {} participants with {} exclusion rules",
            participants.len(),
            roster.exclusions.len()
        );

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let pairs = generator::generate(&participants, &exclusions, self.settings, &mut rng)?;

        let drawn_at = Utc::now();
        let assignments: Vec<Assignment> = pairs
            .into_iter()
            .map(|(giver, receiver)| Assignment {
                year,
                pool: roster.name.clone(),
                giver,
                receiver,
                drawn_at,
            })
            .collect();

        tracing::info!("💾 Persisting {} assignments", assignments.len());
        let output_location = self
            .store
            .save_assignments(year, &roster.name, &assignments)
            .await?;

        for assignment in &assignments {
            // 參與者在驗證階段已確認存在，這裡只是防禦性跳過
            let (Some(giver), Some(receiver)) = (
                roster.participant(assignment.giver),
                roster.participant(assignment.receiver),
            ) else {
                continue;
            };
            self.notifier
                .notify(year, &roster.name, giver, receiver)
                .await?;
        }

        tracing::info!(
            "✅ Draw complete for pool '{}': {} assignments",
            roster.name,
            assignments.len()
        );

        Ok(DrawSummary {
            pool: roster.name.clone(),
            year,
            assignment_count: assignments.len(),
            output_location,
        })
    }
}
