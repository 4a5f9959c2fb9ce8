mod challenge;
mod ids;
mod progress;

pub use ids::{ChallengeId, LanguageId, ParseIdError, QuestionId};

pub use challenge::{
    Challenge, ChallengeError, Language, Level, ParseLevelError, Question, QuestionError,
};
pub use progress::{CompletedQuestion, ProgressAction, ProgressLedger, TimeSpent};
