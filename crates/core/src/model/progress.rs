use serde::{Deserialize, Serialize};

use crate::model::ids::{ChallengeId, QuestionId};

//
// ─── LEDGER ENTRIES ────────────────────────────────────────────────────────────
//

/// Record of the first correct answer to a question.
///
/// Carries the challenge title and question count so completion aggregates
/// can be derived without another API round trip. Entries are never
/// mutated; removal only happens through a bulk [`ProgressAction::Clear`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedQuestion {
    pub challenge_id: ChallengeId,
    pub question_id: QuestionId,
    pub challenge_title: String,
    pub total_questions: usize,
}

/// Seconds spent on a question, keyed by (challenge, question).
///
/// Unlike [`CompletedQuestion`], a later record for the same key replaces
/// the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpent {
    pub challenge_id: ChallengeId,
    pub question_id: QuestionId,
    pub seconds: u32,
}

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

/// Every mutation of the progress ledger, as a tagged action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressAction {
    RecordCompletion {
        challenge_id: ChallengeId,
        question_id: QuestionId,
        challenge_title: String,
        total_questions: usize,
    },
    RecordTime {
        challenge_id: ChallengeId,
        question_id: QuestionId,
        seconds: u32,
    },
    Clear,
}

//
// ─── LEDGER ────────────────────────────────────────────────────────────────────
//

/// The combined record of completed questions and time-spent entries.
///
/// Owned exclusively by the application-wide store; views read derived
/// snapshots, never hold their own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressLedger {
    completed_questions: Vec<CompletedQuestion>,
    time_spent: Vec<TimeSpent>,
}

impl ProgressLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action to the ledger. The handler is exhaustive so new
    /// actions cannot silently go unhandled.
    pub fn apply(&mut self, action: ProgressAction) {
        match action {
            ProgressAction::RecordCompletion {
                challenge_id,
                question_id,
                challenge_title,
                total_questions,
            } => {
                // Insert-once: a duplicate key is a silent no-op.
                let exists = self.completed_questions.iter().any(|entry| {
                    entry.challenge_id == challenge_id && entry.question_id == question_id
                });
                if !exists {
                    self.completed_questions.push(CompletedQuestion {
                        challenge_id,
                        question_id,
                        challenge_title,
                        total_questions,
                    });
                }
            }
            ProgressAction::RecordTime {
                challenge_id,
                question_id,
                seconds,
            } => {
                // Upsert: the latest record for a key wins.
                match self.time_spent.iter_mut().find(|entry| {
                    entry.challenge_id == challenge_id && entry.question_id == question_id
                }) {
                    Some(entry) => entry.seconds = seconds,
                    None => self.time_spent.push(TimeSpent {
                        challenge_id,
                        question_id,
                        seconds,
                    }),
                }
            }
            ProgressAction::Clear => {
                self.completed_questions.clear();
                self.time_spent.clear();
            }
        }
    }

    /// Record the first correct answer to a question; duplicates are no-ops.
    pub fn record_completion(
        &mut self,
        challenge_id: ChallengeId,
        question_id: QuestionId,
        challenge_title: impl Into<String>,
        total_questions: usize,
    ) {
        self.apply(ProgressAction::RecordCompletion {
            challenge_id,
            question_id,
            challenge_title: challenge_title.into(),
            total_questions,
        });
    }

    /// Upsert the seconds spent on a question.
    pub fn record_time(&mut self, challenge_id: ChallengeId, question_id: QuestionId, seconds: u32) {
        self.apply(ProgressAction::RecordTime {
            challenge_id,
            question_id,
            seconds,
        });
    }

    /// Empty both collections.
    pub fn clear(&mut self) {
        self.apply(ProgressAction::Clear);
    }

    // ─── Queries ───────────────────────────────────────────────────────────

    /// Completed-question count for a challenge.
    #[must_use]
    pub fn completed_count(&self, challenge_id: ChallengeId) -> usize {
        self.completed_questions
            .iter()
            .filter(|entry| entry.challenge_id == challenge_id)
            .count()
    }

    /// Seconds recorded for a question, if any.
    #[must_use]
    pub fn time_spent_for(
        &self,
        challenge_id: ChallengeId,
        question_id: QuestionId,
    ) -> Option<u32> {
        self.time_spent
            .iter()
            .find(|entry| {
                entry.challenge_id == challenge_id && entry.question_id == question_id
            })
            .map(|entry| entry.seconds)
    }

    #[must_use]
    pub fn is_question_completed(
        &self,
        challenge_id: ChallengeId,
        question_id: QuestionId,
    ) -> bool {
        self.completed_questions.iter().any(|entry| {
            entry.challenge_id == challenge_id && entry.question_id == question_id
        })
    }

    #[must_use]
    pub fn completed_questions(&self) -> &[CompletedQuestion] {
        &self.completed_questions
    }

    #[must_use]
    pub fn time_spent(&self) -> &[TimeSpent] {
        &self.time_spent
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed_questions.is_empty() && self.time_spent.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
