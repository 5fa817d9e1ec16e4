use crate::daily::StreakState;
use crate::errors::AppError;
use crate::models::{
    BookmarkRequest, BookmarkResponse, DailyFactResponse, Fact, FactsQuery, QuizQuery,
    QuizQuestion, StreakResponse,
};
use crate::quiz::{generate_quiz, DEFAULT_QUESTIONS, MAX_QUESTIONS};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::ui::{render_bookmarks, render_fact, render_index, render_load_error, render_quiz};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let facts = match state.facts() {
        Ok(facts) => facts,
        Err(err) => return Ok(Html(render_load_error(&err.message))),
    };

    let today = today();
    let daily = facts.daily(today).ok().map(|(_, fact)| fact);
    let streak = match daily {
        Some(_) => advance_streak(&state, today).await?,
        None => state.store.lock().await.streak(),
    };

    Ok(Html(render_index(
        daily,
        &streak,
        &facts.categories(),
        facts.recent(),
    )))
}

pub async fn fact_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let facts = match state.facts() {
        Ok(facts) => facts,
        Err(err) => return Ok((err.status, Html(render_load_error(&err.message)))),
    };
    let fact = facts
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("unknown fact `{id}`")))?;
    Ok((StatusCode::OK, Html(render_fact(fact))))
}

pub async fn bookmarks_page(State(state): State<AppState>) -> Html<String> {
    let facts = match state.facts() {
        Ok(facts) => facts,
        Err(err) => return Html(render_load_error(&err.message)),
    };
    let bookmarks = state.store.lock().await.bookmarks();
    let saved: Vec<&Fact> = bookmarks
        .ids()
        .iter()
        .filter_map(|id| facts.get(id))
        .collect();
    Html(render_bookmarks(&saved))
}

pub async fn quiz_page() -> Html<String> {
    Html(render_quiz())
}

pub async fn get_daily(State(state): State<AppState>) -> Result<Json<DailyFactResponse>, AppError> {
    let facts = state.facts()?;
    let today = today();
    let (index, fact) = facts.daily(today)?;
    let streak = advance_streak(&state, today).await?;

    Ok(Json(DailyFactResponse {
        date: today.to_string(),
        index,
        fact: fact.clone(),
        streak: streak.into(),
    }))
}

/// `all` (or no category) answers from the loaded store; a named category
/// goes through the catalog cache.
pub async fn list_facts(
    State(state): State<AppState>,
    Query(query): Query<FactsQuery>,
) -> Result<Json<Vec<Fact>>, AppError> {
    match query.category.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(Json(state.facts()?.facts().to_vec())),
        Some(category) => {
            let facts = state.catalog.fetch_category(category).await?;
            Ok(Json((*facts).clone()))
        }
    }
}

pub async fn get_fact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Fact>, AppError> {
    state
        .facts()?
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("unknown fact `{id}`")))
}

pub async fn random_fact(State(state): State<AppState>) -> Result<Json<Fact>, AppError> {
    let facts = state.facts()?;
    let fact = facts.random(&mut rand::rng())?;
    Ok(Json(fact.clone()))
}

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let facts = state.facts()?;
    let categories = std::iter::once("all")
        .chain(facts.categories())
        .map(str::to_string)
        .collect();
    Ok(Json(categories))
}

pub async fn list_bookmarks(State(state): State<AppState>) -> Json<Vec<String>> {
    let bookmarks = state.store.lock().await.bookmarks();
    Json(bookmarks.ids().to_vec())
}

pub async fn add_bookmark(
    State(state): State<AppState>,
    Json(payload): Json<BookmarkRequest>,
) -> Result<Json<BookmarkResponse>, AppError> {
    let id = payload.id.trim();
    if id.is_empty() {
        return Err(AppError::bad_request("id must not be empty"));
    }
    if state.facts()?.get(id).is_none() {
        return Err(AppError::bad_request(format!("unknown fact `{id}`")));
    }

    let mut store = state.store.lock().await;
    let mut bookmarks = store.bookmarks();
    let added = bookmarks.insert(id);
    if added {
        let mut updated = store.clone();
        updated.set_bookmarks(&bookmarks);
        persist_store(&state.store_path, &updated).await?;
        *store = updated;
        info!(id, "bookmarked fact");
    }

    Ok(Json(BookmarkResponse {
        added,
        message: if added { "Bookmarked" } else { "Already bookmarked" }.to_string(),
        bookmarks: bookmarks.ids().to_vec(),
    }))
}

pub async fn get_streak(State(state): State<AppState>) -> Json<StreakResponse> {
    let streak = state.store.lock().await.streak();
    Json(streak.into())
}

pub async fn get_quiz(
    State(state): State<AppState>,
    Query(query): Query<QuizQuery>,
) -> Result<Json<Vec<QuizQuestion>>, AppError> {
    let facts = state.facts()?;
    let count = query.n.unwrap_or(DEFAULT_QUESTIONS).min(MAX_QUESTIONS);
    Ok(Json(generate_quiz(facts.facts(), count, &mut rand::rng())))
}

/// Records a daily-fact view. The in-memory store only changes once the
/// new streak is on disk.
async fn advance_streak(state: &AppState, today: NaiveDate) -> Result<StreakState, AppError> {
    let mut store = state.store.lock().await;
    let current = store.streak();
    let next = current.advance(today);
    if next != current {
        let mut updated = store.clone();
        updated.set_streak(next);
        persist_store(&state.store_path, &updated).await?;
        *store = updated;
        info!(count = next.count, "streak updated");
    }
    Ok(next)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryCatalog;
    use crate::source::DirSource;
    use crate::storage::{load_store, LocalStore};
    use crate::store::FactStore;
    use axum::http::StatusCode;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn unique_dir(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("handlers_{label}_{}_{}", std::process::id(), nanos));
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    fn fact(id: &str) -> Fact {
        Fact {
            id: id.to_string(),
            title: format!("Title {id}"),
            text: format!("Text {id}"),
            category: "nature".to_string(),
            image: None,
        }
    }

    fn state_with(facts: Vec<Fact>, store_path: PathBuf) -> AppState {
        let catalog =
            CategoryCatalog::with_default_categories(Arc::new(DirSource::new(unique_dir("data"))));
        AppState::new(
            catalog,
            FactStore::new(facts),
            store_path,
            LocalStore::default(),
        )
    }

    fn bookmark(id: &str) -> Json<BookmarkRequest> {
        Json(BookmarkRequest { id: id.to_string() })
    }

    #[tokio::test]
    async fn failed_bookmark_write_leaves_store_unchanged() {
        // A directory cannot be written as a file.
        let state = state_with(vec![fact("a")], unique_dir("unwritable"));

        let first = add_bookmark(State(state.clone()), bookmark("a")).await.unwrap_err();
        assert_eq!(first.status, StatusCode::INTERNAL_SERVER_ERROR);
        let second = add_bookmark(State(state.clone()), bookmark("a")).await.unwrap_err();
        assert_eq!(second.status, StatusCode::INTERNAL_SERVER_ERROR);

        assert!(state.store.lock().await.bookmarks().is_empty());
    }

    #[tokio::test]
    async fn failed_streak_write_is_retried_on_next_view() {
        let state = state_with(vec![fact("a")], unique_dir("unwritable"));

        assert!(get_daily(State(state.clone())).await.is_err());
        assert!(get_daily(State(state.clone())).await.is_err());

        let Json(streak) = get_streak(State(state)).await;
        assert_eq!(streak.count, 0);
        assert_eq!(streak.last_seen, None);
    }

    #[tokio::test]
    async fn bookmark_and_streak_reach_disk() {
        let path = unique_dir("state").join("state.json");
        let state = state_with(vec![fact("a"), fact("b")], path.clone());

        let Json(added) = add_bookmark(State(state.clone()), bookmark("b")).await.unwrap();
        assert!(added.added);
        let Json(daily) = get_daily(State(state.clone())).await.unwrap();
        assert_eq!(daily.streak.count, 1);

        let on_disk = load_store(&path).await;
        assert_eq!(on_disk.bookmarks().ids(), ["b"]);
        assert_eq!(on_disk.streak().count, 1);
        assert_eq!(on_disk, *state.store.lock().await);
    }

    #[tokio::test]
    async fn index_on_empty_store_does_not_advance_streak() {
        let path = unique_dir("state").join("state.json");
        let state = state_with(Vec::new(), path.clone());

        let Html(page) = index(State(state.clone())).await.unwrap();
        assert!(page.contains("No facts available yet."));

        let Json(streak) = get_streak(State(state)).await;
        assert_eq!(streak.count, 0);
        assert_eq!(streak.last_seen, None);
        assert!(!path.exists());
    }
}
