//! Randomized assignment generation.
//!
//! The draw is a rejection-sampling search: shuffle the participant list,
//! line the shuffle up against the original giver order as candidate
//! receivers, and reject the whole candidate as soon as any giver would
//! keep their own name or hit an exclusion. The first candidate that
//! survives every check is returned; there is no notion of a "best"
//! assignment.
//!
//! The search is probabilistic, not exact. `GenerationExhausted` means no
//! valid permutation was found within the attempt budget, which for a
//! pathological exclusion set can happen even when a valid assignment
//! exists. For the intended scale (tens of participants, light exclusion
//! density) the search converges in a handful of attempts; callers wanting
//! a certainty guarantee would need a constructive matching algorithm
//! instead.

use crate::domain::model::ParticipantId;
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Tuning knobs for the draw. A higher attempt budget lowers the false
/// "infeasible" rate at the cost of worst-case latency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DrawSettings {
    pub max_attempts: u32,
}

impl DrawSettings {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Draws one complete giver→receiver assignment for `participants`.
///
/// Every participant gives exactly once and receives exactly once, nobody
/// is assigned to themselves, and no (giver, receiver) pair listed in
/// `exclusions` occurs. Givers absent from `exclusions` have no forbidden
/// receivers.
///
/// The RNG is injected so a fixed seed replays the exact attempt sequence.
pub fn generate<R>(
    participants: &[ParticipantId],
    exclusions: &HashMap<ParticipantId, HashSet<ParticipantId>>,
    settings: DrawSettings,
    rng: &mut R,
) -> Result<BTreeMap<ParticipantId, ParticipantId>>
where
    R: Rng + ?Sized,
{
    // A 0 or 1 person pool has no derangement; never start the search
    if participants.len() < 2 {
        return Err(SantaError::InsufficientParticipants {
            found: participants.len(),
        });
    }

    let mut receivers: Vec<ParticipantId> = participants.to_vec();

    for _ in 0..settings.max_attempts {
        receivers.shuffle(rng);

        if let Some(assignment) = check_candidate(participants, &receivers, exclusions) {
            return Ok(assignment);
        }
    }

    Err(SantaError::GenerationExhausted {
        attempts: settings.max_attempts,
    })
}

/// Walks givers and candidate receivers in lock-step, bailing out on the
/// first fixed point or excluded pair.
fn check_candidate(
    givers: &[ParticipantId],
    receivers: &[ParticipantId],
    exclusions: &HashMap<ParticipantId, HashSet<ParticipantId>>,
) -> Option<BTreeMap<ParticipantId, ParticipantId>> {
    let mut assignment = BTreeMap::new();

    for (giver, receiver) in givers.iter().zip(receivers.iter()) {
        if giver == receiver {
            return None;
        }
        if exclusions
            .get(giver)
            .is_some_and(|forbidden| forbidden.contains(receiver))
        {
            return None;
        }
        assignment.insert(*giver, *receiver);
    }

    Some(assignment)
}
