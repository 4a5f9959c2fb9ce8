use quiz_core::model::Challenge;
use services::ProgressService;

/// List-card projection of a challenge, with its completion badge
/// resolved against the progress store.
#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeCardVm {
    pub id: u64,
    pub title: String,
    pub level: String,
    pub completed: bool,
}

#[must_use]
pub fn map_challenge_cards(
    challenges: &[Challenge],
    progress: &ProgressService,
) -> Vec<ChallengeCardVm> {
    challenges
        .iter()
        .map(|challenge| {
            let total = challenge.total_questions();
            let completed = total > 0 && progress.completed_count(challenge.id()) == total;
            ChallengeCardVm {
                id: challenge.id().value(),
                title: challenge.title().to_string(),
                level: challenge.level().to_string(),
                completed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{
        ChallengeId, Language, LanguageId, Level, Question, QuestionId,
    };

    fn build_challenge(id: u64) -> Challenge {
        let questions = vec![
            Question::new(
                QuestionId::new(10),
                "Q1",
                vec!["a".to_string(), "b".to_string()],
                "a",
            )
            .unwrap(),
        ];
        Challenge::new(
            ChallengeId::new(id),
            "Arrays",
            Level::Easy,
            Language::new(LanguageId::new(1), "Rust"),
            questions,
        )
        .unwrap()
    }

    #[test]
    fn badge_follows_progress_store() {
        let progress = ProgressService::new();
        let challenges = vec![build_challenge(1)];

        let cards = map_challenge_cards(&challenges, &progress);
        assert!(!cards[0].completed);

        progress.record_completion(ChallengeId::new(1), QuestionId::new(10), "Arrays", 1);
        let cards = map_challenge_cards(&challenges, &progress);
        assert!(cards[0].completed);
        assert_eq!(cards[0].title, "Arrays");
        assert_eq!(cards[0].level, "EASY");
    }
}
