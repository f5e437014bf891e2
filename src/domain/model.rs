use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Identifier of a participant, unique within a pool. The draw only ever
/// inspects identifiers; names and emails ride along for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Directional rule: `giver` may not be assigned `receiver`. Excluding A→B
/// does not imply B→A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
}

/// One resolved giver→receiver pair, tagged with the (year, pool) it
/// belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub year: i32,
    pub pool: String,
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
    pub drawn_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DrawSummary {
    pub pool: String,
    pub year: i32,
    pub assignment_count: usize,
    pub output_location: String,
}

/// A pool roster as the draw engine consumes it: the participants of one
/// pool and the exclusions scoped to that pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolRoster {
    pub name: String,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub exclusions: Vec<Exclusion>,
}

impl PoolRoster {
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Builds the giver → forbidden receivers lookup the generator expects.
    pub fn exclusion_lookup(&self) -> HashMap<ParticipantId, HashSet<ParticipantId>> {
        let mut lookup: HashMap<ParticipantId, HashSet<ParticipantId>> = HashMap::new();
        for exclusion in &self.exclusions {
            lookup
                .entry(exclusion.giver)
                .or_default()
                .insert(exclusion.receiver);
        }
        lookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> PoolRoster {
        PoolRoster {
            name: "family".to_string(),
            participants: vec![
                Participant {
                    id: ParticipantId(1),
                    name: "Alice".to_string(),
                    email: None,
                },
                Participant {
                    id: ParticipantId(2),
                    name: "Bob".to_string(),
                    email: Some("bob@example.com".to_string()),
                },
            ],
            exclusions: vec![
                Exclusion {
                    giver: ParticipantId(1),
                    receiver: ParticipantId(2),
                },
                Exclusion {
                    giver: ParticipantId(1),
                    receiver: ParticipantId(2),
                },
            ],
        }
    }

    #[test]
    fn test_exclusion_lookup_groups_by_giver() {
        let lookup = roster().exclusion_lookup();

        assert_eq!(lookup.len(), 1);
        let forbidden = lookup.get(&ParticipantId(1)).unwrap();
        // Duplicate exclusion entries collapse into the set
        assert_eq!(forbidden.len(), 1);
        assert!(forbidden.contains(&ParticipantId(2)));
        assert!(!lookup.contains_key(&ParticipantId(2)));
    }

    #[test]
    fn test_participant_lookup_by_id() {
        let roster = roster();
        assert_eq!(roster.participant(ParticipantId(2)).unwrap().name, "Bob");
        assert!(roster.participant(ParticipantId(9)).is_none());
    }
}
