use crate::errors::FactError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: String,
    pub title: String,
    pub text: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Wire shape of a fact before validation. Every field is optional so a
/// missing one is reported as a load error naming the field.
#[derive(Debug, Deserialize)]
struct RawFact {
    id: Option<String>,
    title: Option<String>,
    text: Option<String>,
    category: Option<String>,
    image: Option<String>,
}

/// Parses and validates a JSON array of facts. One bad record rejects the
/// whole resource.
pub fn parse_facts(resource: &str, bytes: &[u8]) -> Result<Vec<Fact>, FactError> {
    let raw: Vec<RawFact> =
        serde_json::from_slice(bytes).map_err(|err| FactError::load(resource, err))?;

    raw.into_iter()
        .enumerate()
        .map(|(position, record)| record.validate(resource, position))
        .collect()
}

impl RawFact {
    fn validate(self, resource: &str, position: usize) -> Result<Fact, FactError> {
        let required = |value: Option<String>, field: &str| {
            value
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    FactError::load(resource, format!("record {position} is missing `{field}`"))
                })
        };

        Ok(Fact {
            id: required(self.id, "id")?,
            title: required(self.title, "title")?,
            text: required(self.text, "text")?,
            category: required(self.category, "category")?,
            image: self.image.filter(|url| !url.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResponse {
    pub last_seen: Option<chrono::NaiveDate>,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct DailyFactResponse {
    pub date: String,
    pub index: usize,
    pub fact: Fact,
    pub streak: StreakResponse,
}

#[derive(Debug, Deserialize)]
pub struct FactsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    pub n: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct BookmarkRequest {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub added: bool,
    pub message: String,
    pub bookmarks: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub q: String,
    pub correct: String,
    pub options: Vec<String>,
}
