//! Persisted study progress and the rules for merging new results into it.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, PROGRESS_KEY};

/// Stored as camelCase JSON under the `eng7_progress` key, so records
/// written by earlier versions of the app load unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    pub sessions: u32,
    pub best_vocab: u32,
    pub last_vocab_score: String,
}

/// One finished-session result. Built by the quiz view on submit and by the
/// timer on completion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressPatch {
    pub last_vocab_score: Option<String>,
    pub best_candidate: Option<u32>,
    pub session_completed: bool,
}

impl ProgressPatch {
    pub fn quiz_result(score: usize, total: usize) -> Self {
        Self {
            last_vocab_score: Some(format!("{score}/{total}")),
            best_candidate: Some(score as u32),
            session_completed: false,
        }
    }

    pub fn session_completed() -> Self {
        Self {
            session_completed: true,
            ..Self::default()
        }
    }
}

impl ProgressRecord {
    /// Merges a patch: last score overwrites, best score only goes up,
    /// completed sessions only count up.
    pub fn apply(&self, patch: &ProgressPatch) -> ProgressRecord {
        let mut next = self.clone();
        if let Some(last) = &patch.last_vocab_score {
            next.last_vocab_score = last.clone();
        }
        if let Some(candidate) = patch.best_candidate {
            next.best_vocab = next.best_vocab.max(candidate);
        }
        if patch.session_completed {
            next.sessions += 1;
        }
        next
    }

    /// What the progress panel shows for the last score: `0` until a first
    /// quiz has been submitted.
    pub fn last_score_display(&self) -> String {
        if self.last_vocab_score.is_empty() {
            "0".to_string()
        } else {
            self.last_vocab_score.clone()
        }
    }
}

/// Reads the stored record. Missing or unparseable data means a fresh
/// record; startup never fails on bad persisted state.
pub fn load_progress(store: &impl KeyValueStore) -> ProgressRecord {
    let Some(raw) = store.get(PROGRESS_KEY) else {
        return ProgressRecord::default();
    };
    match serde_json::from_str(&raw) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("ignoring corrupt stored progress: {err}");
            ProgressRecord::default()
        }
    }
}

pub fn save_progress(store: &impl KeyValueStore, record: &ProgressRecord) {
    match serde_json::to_string(record) {
        Ok(json) => store.set(PROGRESS_KEY, &json),
        Err(err) => log::warn!("could not serialize progress: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn last_score_overwrites_unconditionally() {
        let record = ProgressRecord {
            last_vocab_score: "7/8".to_string(),
            ..ProgressRecord::default()
        };
        let next = record.apply(&ProgressPatch::quiz_result(2, 8));
        assert_eq!(next.last_vocab_score, "2/8");
    }

    #[test]
    fn best_score_never_decreases() {
        let record = ProgressRecord {
            best_vocab: 5,
            ..ProgressRecord::default()
        };
        let lower = record.apply(&ProgressPatch {
            best_candidate: Some(3),
            ..ProgressPatch::default()
        });
        assert_eq!(lower.best_vocab, 5);
        let higher = record.apply(&ProgressPatch {
            best_candidate: Some(7),
            ..ProgressPatch::default()
        });
        assert_eq!(higher.best_vocab, 7);
    }

    #[test]
    fn session_completion_increments_independently() {
        let record = ProgressRecord::default();
        let next = record.apply(&ProgressPatch::session_completed());
        assert_eq!(next.sessions, 1);
        assert_eq!(next.best_vocab, 0);
        assert_eq!(next.last_vocab_score, "");
        let next = next.apply(&ProgressPatch::session_completed());
        assert_eq!(next.sessions, 2);
    }

    #[test]
    fn last_score_displays_zero_until_a_quiz_was_submitted() {
        let record = ProgressRecord::default();
        assert_eq!(record.last_score_display(), "0");
        let record = record.apply(&ProgressPatch::quiz_result(6, 8));
        assert_eq!(record.last_score_display(), "6/8");
    }

    #[test]
    fn round_trips_through_the_store() {
        let store = MemoryStore::default();
        let record = ProgressRecord {
            sessions: 3,
            best_vocab: 6,
            last_vocab_score: "6/8".to_string(),
        };
        save_progress(&store, &record);
        assert_eq!(load_progress(&store), record);
    }

    #[test]
    fn stored_json_uses_the_legacy_camel_case_shape() {
        let store = MemoryStore::default();
        store.set(
            PROGRESS_KEY,
            r#"{"sessions":2,"bestVocab":4,"lastVocabScore":"4/8"}"#,
        );
        let record = load_progress(&store);
        assert_eq!(record.sessions, 2);
        assert_eq!(record.best_vocab, 4);
        assert_eq!(record.last_vocab_score, "4/8");
    }

    #[test]
    fn missing_or_corrupt_state_falls_back_to_default() {
        let store = MemoryStore::default();
        assert_eq!(load_progress(&store), ProgressRecord::default());
        store.set(PROGRESS_KEY, "{not json");
        assert_eq!(load_progress(&store), ProgressRecord::default());
        // partial objects fill the rest with defaults
        store.set(PROGRESS_KEY, r#"{"sessions":1}"#);
        let record = load_progress(&store);
        assert_eq!(record.sessions, 1);
        assert_eq!(record.best_vocab, 0);
    }
}
