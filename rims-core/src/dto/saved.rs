//! Saved-jobs DTOs

use serde::{Deserialize, Serialize};

use crate::domain::{CandidateId, JobId};

/// Body for the toggle and unsave endpoints: one (candidate, job) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJobKey {
    pub candidate_id: CandidateId,
    pub job_id: JobId,
}

/// Server-reported membership state after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub saved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_serializes_camel_case() {
        let key = SavedJobKey {
            candidate_id: CandidateId::new("c-1"),
            job_id: JobId::new("5"),
        };
        let value = serde_json::to_value(&key).unwrap();
        assert_eq!(value["candidateId"], "c-1");
        assert_eq!(value["jobId"], "5");
    }

    #[test]
    fn test_toggle_outcome_round_trip() {
        let outcome: ToggleOutcome = serde_json::from_str("{\"saved\":true}").unwrap();
        assert!(outcome.saved);
    }
}
