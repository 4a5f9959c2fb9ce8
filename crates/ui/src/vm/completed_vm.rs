use quiz_core::aggregate::CompletedChallenge;

use crate::vm::time_fmt::format_seconds;

/// Modal-row projection of a fully completed challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedChallengeVm {
    pub id: u64,
    pub title: String,
    pub total_time: String,
}

impl From<&CompletedChallenge> for CompletedChallengeVm {
    fn from(item: &CompletedChallenge) -> Self {
        Self {
            id: item.id.value(),
            title: item.title.clone(),
            total_time: format_seconds(item.total_time),
        }
    }
}

#[must_use]
pub fn map_completed_challenges(items: &[CompletedChallenge]) -> Vec<CompletedChallengeVm> {
    items.iter().map(CompletedChallengeVm::from).collect()
}
