use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::{ChallengeId, LanguageId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("answer {answer:?} is not one of the options")]
    AnswerNotAnOption { answer: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("challenge title cannot be empty")]
    EmptyTitle,
}

/// Error returned when parsing a `Level` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    raw: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty level: {}", self.raw)
    }
}

impl std::error::Error for ParseLevelError {}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty level of a challenge.
///
/// Serialized upper-case (`"EASY"`, …) to match the challenge API wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// All levels in ascending difficulty, for filter dropdowns.
    #[must_use]
    pub fn all() -> [Level; 3] {
        [Level::Easy, Level::Medium, Level::Hard]
    }

    /// The wire-format name (`"EASY"`, `"MEDIUM"`, `"HARD"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "EASY",
            Level::Medium => "MEDIUM",
            Level::Hard => "HARD",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EASY" => Ok(Level::Easy),
            "MEDIUM" => Ok(Level::Medium),
            "HARD" => Ok(Level::Hard),
            other => Err(ParseLevelError {
                raw: other.to_string(),
            }),
        }
    }
}

//
// ─── LANGUAGE ──────────────────────────────────────────────────────────────────
//

/// Programming language a challenge is tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: LanguageId,
    pub name: String,
}

impl Language {
    #[must_use]
    pub fn new(id: LanguageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// The correct answer is stored as the full option text, mirroring the
/// upstream API. Construction guarantees it is one of `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` for blank text,
    /// `QuestionError::TooFewOptions` for fewer than two options, and
    /// `QuestionError::AnswerNotAnOption` when the answer does not appear
    /// among the options.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        let answer = answer.into();
        if !options.iter().any(|option| option == &answer) {
            return Err(QuestionError::AnswerNotAnOption { answer });
        }

        Ok(Self {
            id,
            text,
            options,
            answer,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether the given option text is the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

/// A named group of multiple-choice questions tagged with a difficulty
/// level and programming language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    id: ChallengeId,
    title: String,
    level: Level,
    language: Language,
    questions: Vec<Question>,
}

impl Challenge {
    /// Build a validated challenge.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::EmptyTitle` for a blank title. Question
    /// validation happens in `Question::new`; a pre-built list is accepted
    /// as-is here.
    pub fn new(
        id: ChallengeId,
        title: impl Into<String>,
        level: Level,
        language: Language,
        questions: Vec<Question>,
    ) -> Result<Self, ChallengeError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ChallengeError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            level,
            language,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> ChallengeId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Number of questions, the denominator for completion aggregation.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn question_rejects_answer_outside_options() {
        let err = Question::new(QuestionId::new(1), "Pick one", options(), "d").unwrap_err();
        assert!(matches!(err, QuestionError::AnswerNotAnOption { .. }));
    }

    #[test]
    fn question_rejects_blank_text() {
        let err = Question::new(QuestionId::new(1), "   ", options(), "a").unwrap_err();
        assert!(matches!(err, QuestionError::EmptyText));
    }

    #[test]
    fn question_rejects_single_option() {
        let err =
            Question::new(QuestionId::new(1), "Pick one", vec!["a".to_string()], "a").unwrap_err();
        assert!(matches!(err, QuestionError::TooFewOptions { len: 1 }));
    }

    #[test]
    fn question_checks_answers() {
        let question = Question::new(QuestionId::new(1), "Pick one", options(), "b").unwrap();
        assert!(question.is_correct("b"));
        assert!(!question.is_correct("a"));
        assert!(!question.is_correct("B"));
    }

    #[test]
    fn challenge_rejects_empty_title() {
        let err = Challenge::new(
            ChallengeId::new(1),
            "  ",
            Level::Easy,
            Language::new(LanguageId::new(1), "Rust"),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ChallengeError::EmptyTitle));
    }

    #[test]
    fn challenge_counts_questions_and_finds_by_id() {
        let questions = vec![
            Question::new(QuestionId::new(10), "Q1", options(), "a").unwrap(),
            Question::new(QuestionId::new(11), "Q2", options(), "c").unwrap(),
        ];
        let challenge = Challenge::new(
            ChallengeId::new(1),
            "Arrays",
            Level::Medium,
            Language::new(LanguageId::new(1), "Rust"),
            questions,
        )
        .unwrap();

        assert_eq!(challenge.total_questions(), 2);
        assert_eq!(
            challenge.question(QuestionId::new(11)).unwrap().text(),
            "Q2"
        );
        assert!(challenge.question(QuestionId::new(12)).is_none());
    }

    #[test]
    fn level_parses_wire_names() {
        assert_eq!("EASY".parse::<Level>().unwrap(), Level::Easy);
        assert_eq!("HARD".parse::<Level>().unwrap(), Level::Hard);
        assert!("easy".parse::<Level>().is_err());
        assert_eq!(Level::Medium.to_string(), "MEDIUM");
    }
}
