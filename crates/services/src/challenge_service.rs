use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use quiz_core::model::{
    Challenge, ChallengeId, Language, LanguageId, Level, Question, QuestionId,
};

use crate::activity::ActivityTracker;
use crate::error::FetchError;
use crate::sequence::{FetchSequence, FetchTicket};

/// Page size used by the challenge list view.
pub const DEFAULT_PAGE_LIMIT: u32 = 6;

/// Languages offered in the list filter dropdown.
#[must_use]
pub fn filter_languages() -> Vec<Language> {
    [
        (1, "JavaScript"),
        (2, "Python"),
        (3, "Java"),
        (4, "C++"),
        (5, "Go"),
        (6, "Rust"),
    ]
    .into_iter()
    .map(|(id, name)| Language::new(LanguageId::new(id), name))
    .collect()
}

//
// ─── QUERY & PAGE ──────────────────────────────────────────────────────────────
//

/// Parameters for a paginated, filterable challenge listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeQuery {
    pub page: u32,
    pub limit: u32,
    pub language: Option<LanguageId>,
    pub level: Option<Level>,
}

impl ChallengeQuery {
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page,
            limit: DEFAULT_PAGE_LIMIT,
            language: None,
            level: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: Option<LanguageId>) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: Option<Level>) -> Self {
        self.level = level;
        self
    }
}

/// One page of challenges plus the total page count for pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengePage {
    pub challenges: Vec<Challenge>,
    pub pages: u32,
}

//
// ─── CHALLENGE API ─────────────────────────────────────────────────────────────
//

/// Contract for the external challenge endpoint. A trait seam so tests
/// can fake paging, filtering, and failures without a network.
#[async_trait]
pub trait ChallengeApi: Send + Sync {
    /// Fetch one page of challenges.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failures or malformed responses.
    async fn list(&self, query: &ChallengeQuery) -> Result<ChallengePage, FetchError>;

    /// Fetch a single challenge with its questions.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NotFound` if the id is unknown, or other
    /// fetch errors.
    async fn get(&self, id: ChallengeId) -> Result<Challenge, FetchError>;
}

/// `GET {base}?page&limit&language&level` / `GET {base}?id=` against the
/// real challenge API.
#[derive(Clone)]
pub struct HttpChallengeApi {
    client: Client,
    base_url: String,
}

impl HttpChallengeApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ChallengeApi for HttpChallengeApi {
    async fn list(&self, query: &ChallengeQuery) -> Result<ChallengePage, FetchError> {
        let mut params = vec![
            ("page".to_string(), query.page.to_string()),
            ("limit".to_string(), query.limit.to_string()),
        ];
        if let Some(language) = query.language {
            params.push(("language".to_string(), language.to_string()));
        }
        if let Some(level) = query.level {
            params.push(("level".to_string(), level.to_string()));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body: ListResponse = response.json().await?;
        let challenges = body
            .data
            .into_iter()
            .map(ChallengeRow::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        let pages = body.pagination.map_or(1, |pagination| pagination.pages.max(1));

        Ok(ChallengePage { challenges, pages })
    }

    async fn get(&self, id: ChallengeId) -> Result<Challenge, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("id", id.to_string())])
            .send()
            .await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        // The detail endpoint reuses the list envelope with one element.
        let body: ListResponse = response.json().await?;
        body.data
            .into_iter()
            .next()
            .ok_or(FetchError::NotFound)?
            .into_domain()
    }
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Vec<ChallengeRow>,
    pagination: Option<PaginationRow>,
}

#[derive(Debug, Deserialize)]
struct PaginationRow {
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct ChallengeRow {
    id: u64,
    // The upstream API names the title field after the resource.
    #[serde(rename = "challenge")]
    title: String,
    level: String,
    language: LanguageRow,
    #[serde(default)]
    questions: Vec<QuestionRow>,
}

#[derive(Debug, Deserialize)]
struct LanguageRow {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: u64,
    #[serde(rename = "question")]
    text: String,
    options: Vec<String>,
    answer: String,
}

impl ChallengeRow {
    fn into_domain(self) -> Result<Challenge, FetchError> {
        let level: Level = self
            .level
            .parse()
            .map_err(|err: quiz_core::model::ParseLevelError| {
                FetchError::UnexpectedResponse(err.to_string())
            })?;
        let language = Language::new(LanguageId::new(self.language.id), self.language.name);
        let questions = self
            .questions
            .into_iter()
            .map(|row| {
                Question::new(QuestionId::new(row.id), row.text, row.options, row.answer)
                    .map_err(|err| FetchError::UnexpectedResponse(err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Challenge::new(ChallengeId::new(self.id), self.title, level, language, questions)
            .map_err(|err| FetchError::UnexpectedResponse(err.to_string()))
    }
}

//
// ─── CHALLENGE SERVICE ─────────────────────────────────────────────────────────
//

/// Challenge fetching with the request-activity and stale-response
/// guards applied.
///
/// Every call holds an activity guard across the await, so the busy
/// indicator pairs exactly one begin with one end on success and failure
/// alike. List fetches are additionally sequenced: a response that was
/// superseded by a newer list fetch is dropped, not applied.
pub struct ChallengeService {
    api: Arc<dyn ChallengeApi>,
    activity: Arc<ActivityTracker>,
    list_sequence: FetchSequence,
}

impl ChallengeService {
    #[must_use]
    pub fn new(api: Arc<dyn ChallengeApi>, activity: Arc<ActivityTracker>) -> Self {
        Self {
            api,
            activity,
            list_sequence: FetchSequence::new(),
        }
    }

    /// Fetch one page of challenges, dropping the result if a newer list
    /// fetch started in the meantime. `Ok(None)` means "superseded".
    ///
    /// # Errors
    ///
    /// Returns `FetchError` from the underlying API; failures are logged
    /// here and the caller falls back to an empty listing.
    pub async fn list_challenges(
        &self,
        query: &ChallengeQuery,
    ) -> Result<Option<ChallengePage>, FetchError> {
        let ticket = self.list_sequence.issue();
        let _guard = self.activity.begin();

        match self.api.list(query).await {
            Ok(page) => {
                if self.is_current(ticket) {
                    Ok(Some(page))
                } else {
                    Ok(None)
                }
            }
            Err(err) => {
                warn!(page = query.page, error = %err, "challenge list fetch failed");
                Err(err)
            }
        }
    }

    /// Fetch a single challenge with its questions.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NotFound` for unknown ids, or other fetch
    /// errors; failures are logged and the caller shows "not found".
    pub async fn challenge_by_id(&self, id: ChallengeId) -> Result<Challenge, FetchError> {
        let _guard = self.activity.begin();

        match self.api.get(id).await {
            Ok(challenge) => Ok(challenge),
            Err(err) => {
                warn!(challenge_id = id.value(), error = %err, "challenge fetch failed");
                Err(err)
            }
        }
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        self.list_sequence.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_row_maps_into_domain_challenge() {
        let json = r#"
        {
            "data": [{
                "id": 7,
                "challenge": "Arrays",
                "level": "MEDIUM",
                "language": { "id": 2, "name": "Python" },
                "questions": [{
                    "id": 10,
                    "question": "Pick one",
                    "options": ["a", "b"],
                    "answer": "b"
                }]
            }],
            "pagination": { "pages": 3 }
        }"#;

        let body: ListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.pagination.as_ref().unwrap().pages, 3);

        let challenge = body
            .data
            .into_iter()
            .next()
            .unwrap()
            .into_domain()
            .unwrap();
        assert_eq!(challenge.id(), ChallengeId::new(7));
        assert_eq!(challenge.title(), "Arrays");
        assert_eq!(challenge.level(), Level::Medium);
        assert_eq!(challenge.language().name, "Python");
        assert_eq!(challenge.total_questions(), 1);
        assert!(challenge.questions()[0].is_correct("b"));
    }

    #[test]
    fn unknown_level_is_an_unexpected_response() {
        let row = ChallengeRow {
            id: 1,
            title: "Arrays".to_string(),
            level: "BRUTAL".to_string(),
            language: LanguageRow {
                id: 1,
                name: "Rust".to_string(),
            },
            questions: Vec::new(),
        };
        assert!(matches!(
            row.into_domain(),
            Err(FetchError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn query_builder_carries_filters() {
        let query = ChallengeQuery::page(2)
            .with_language(Some(LanguageId::new(3)))
            .with_level(Some(Level::Hard));
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(query.language, Some(LanguageId::new(3)));
        assert_eq!(query.level, Some(Level::Hard));
    }
}
