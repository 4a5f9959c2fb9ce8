use std::sync::Mutex;

use quiz_core::aggregate::{
    self, ChallengeMeta, CompletedChallenge, SortOrder,
};
use quiz_core::model::{ChallengeId, ProgressAction, ProgressLedger, QuestionId};

/// The application-wide progress store.
///
/// Owns the single [`ProgressLedger`]; views read derived snapshots and
/// never keep their own copy. Mutations happen synchronously under the
/// lock, so overlapping event handlers only race on ordering, not data —
/// if a slow submission lands after a newer one, last-write-wins by
/// arrival order (accepted at this scale).
#[derive(Debug, Default)]
pub struct ProgressService {
    ledger: Mutex<ProgressLedger>,
}

impl ProgressService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ledger<T>(&self, f: impl FnOnce(&ProgressLedger) -> T) -> T {
        let guard = self
            .ledger
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&guard)
    }

    /// Apply a progress action to the shared ledger.
    pub fn dispatch(&self, action: ProgressAction) {
        let mut guard = self
            .ledger
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.apply(action);
    }

    /// Record the first correct answer to a question; duplicates are no-ops.
    pub fn record_completion(
        &self,
        challenge_id: ChallengeId,
        question_id: QuestionId,
        challenge_title: impl Into<String>,
        total_questions: usize,
    ) {
        self.dispatch(ProgressAction::RecordCompletion {
            challenge_id,
            question_id,
            challenge_title: challenge_title.into(),
            total_questions,
        });
    }

    /// Upsert the seconds spent on a question.
    pub fn record_time(&self, challenge_id: ChallengeId, question_id: QuestionId, seconds: u32) {
        self.dispatch(ProgressAction::RecordTime {
            challenge_id,
            question_id,
            seconds,
        });
    }

    /// Empty the ledger (wired to logout at the composition root).
    pub fn clear(&self) {
        self.dispatch(ProgressAction::Clear);
    }

    // ─── Derived reads ─────────────────────────────────────────────────────

    #[must_use]
    pub fn completed_count(&self, challenge_id: ChallengeId) -> usize {
        self.with_ledger(|ledger| ledger.completed_count(challenge_id))
    }

    #[must_use]
    pub fn time_spent_for(
        &self,
        challenge_id: ChallengeId,
        question_id: QuestionId,
    ) -> Option<u32> {
        self.with_ledger(|ledger| ledger.time_spent_for(challenge_id, question_id))
    }

    #[must_use]
    pub fn is_question_completed(
        &self,
        challenge_id: ChallengeId,
        question_id: QuestionId,
    ) -> bool {
        self.with_ledger(|ledger| ledger.is_question_completed(challenge_id, question_id))
    }

    /// Fully completed challenges against fresh metadata from the API.
    #[must_use]
    pub fn completed_challenges(
        &self,
        metas: &[ChallengeMeta],
        order: SortOrder,
    ) -> Vec<CompletedChallenge> {
        self.with_ledger(|ledger| aggregate::completed_challenges(ledger, metas, order))
    }

    /// Fully completed challenges from ledger-embedded metadata.
    #[must_use]
    pub fn completed_challenges_from_ledger(&self, order: SortOrder) -> Vec<CompletedChallenge> {
        self.with_ledger(|ledger| aggregate::completed_challenges_from_ledger(ledger, order))
    }

    /// Count behind the navbar badge.
    #[must_use]
    pub fn fully_completed_count(&self) -> usize {
        self.with_ledger(aggregate::fully_completed_count)
    }

    /// A point-in-time copy of the ledger for derived views.
    #[must_use]
    pub fn snapshot(&self) -> ProgressLedger {
        self.with_ledger(Clone::clone)
    }
}
