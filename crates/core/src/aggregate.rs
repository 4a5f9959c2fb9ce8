//! Pure derivations over the progress ledger.
//!
//! Nothing here is cached or stored: callers recompute on every read, so
//! these functions must stay deterministic and side-effect-free.

use crate::model::{ChallengeId, ProgressLedger};

/// Challenge metadata needed for completion aggregation, as supplied by
/// the external challenge source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeMeta {
    pub id: ChallengeId,
    pub title: String,
    pub total_questions: usize,
}

/// Read-only projection of a fully completed challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedChallenge {
    pub id: ChallengeId,
    pub title: String,
    pub total_time: u64,
}

/// Sort direction for completed-challenge listings, by total time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Total seconds recorded against a challenge.
fn total_time(ledger: &ProgressLedger, id: ChallengeId) -> u64 {
    ledger
        .time_spent()
        .iter()
        .filter(|entry| entry.challenge_id == id)
        .map(|entry| u64::from(entry.seconds))
        .sum()
}

fn sort_by_total_time(completed: &mut [CompletedChallenge], order: SortOrder) {
    // Stable sort keeps insertion order for equal totals.
    match order {
        SortOrder::Ascending => completed.sort_by_key(|challenge| challenge.total_time),
        SortOrder::Descending => {
            completed.sort_by_key(|challenge| std::cmp::Reverse(challenge.total_time));
        }
    }
}

/// Challenges the ledger fully covers, given fresh metadata from the
/// challenge source.
///
/// A challenge qualifies iff its completed-question count equals
/// `total_questions` and `total_questions > 0`. Ties on total time keep
/// the metadata input order.
#[must_use]
pub fn completed_challenges(
    ledger: &ProgressLedger,
    metas: &[ChallengeMeta],
    order: SortOrder,
) -> Vec<CompletedChallenge> {
    let mut completed: Vec<CompletedChallenge> = metas
        .iter()
        .filter(|meta| {
            meta.total_questions > 0 && ledger.completed_count(meta.id) == meta.total_questions
        })
        .map(|meta| CompletedChallenge {
            id: meta.id,
            title: meta.title.clone(),
            total_time: total_time(ledger, meta.id),
        })
        .collect();

    sort_by_total_time(&mut completed, order);
    completed
}

/// Same projection using the metadata embedded in the ledger's own
/// completion entries, for readers with no fresh API data at hand (the
/// navbar badge and the completed-challenges modal).
///
/// The first entry seen for a challenge supplies its title and question
/// count; output ties keep first-seen order.
#[must_use]
pub fn completed_challenges_from_ledger(
    ledger: &ProgressLedger,
    order: SortOrder,
) -> Vec<CompletedChallenge> {
    let mut metas: Vec<ChallengeMeta> = Vec::new();
    for entry in ledger.completed_questions() {
        if !metas.iter().any(|meta| meta.id == entry.challenge_id) {
            metas.push(ChallengeMeta {
                id: entry.challenge_id,
                title: entry.challenge_title.clone(),
                total_questions: entry.total_questions,
            });
        }
    }

    completed_challenges(ledger, &metas, order)
}

/// Number of fully completed challenges, from embedded metadata.
#[must_use]
pub fn fully_completed_count(ledger: &ProgressLedger) -> usize {
    completed_challenges_from_ledger(ledger, SortOrder::Ascending).len()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
