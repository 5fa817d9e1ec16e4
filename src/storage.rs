use crate::bookmarks::BookmarkSet;
use crate::daily::StreakState;
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

pub const BOOKMARKS_KEY: &str = "til_bookmarks";
pub const LAST_SEEN_KEY: &str = "til_last_seen";
pub const STREAK_KEY: &str = "til_streak";

/// String key/value state that survives restarts, persisted as one JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct LocalStore {
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn bookmarks(&self) -> BookmarkSet {
        self.get(BOOKMARKS_KEY)
            .map(BookmarkSet::decode)
            .unwrap_or_default()
    }

    pub fn set_bookmarks(&mut self, bookmarks: &BookmarkSet) {
        self.set(BOOKMARKS_KEY, bookmarks.encode());
    }

    pub fn streak(&self) -> StreakState {
        let last_seen = self
            .get(LAST_SEEN_KEY)
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());
        let count = self
            .get(STREAK_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);
        StreakState { last_seen, count }
    }

    pub fn set_streak(&mut self, streak: StreakState) {
        match streak.last_seen {
            Some(date) => self.set(LAST_SEEN_KEY, date.format("%Y-%m-%d").to_string()),
            None => {
                self.remove(LAST_SEEN_KEY);
            }
        }
        self.set(STREAK_KEY, streak.count.to_string());
    }
}

pub async fn load_store(path: &Path) -> LocalStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse local store: {err}");
                LocalStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LocalStore::default(),
        Err(err) => {
            error!("failed to read local store: {err}");
            LocalStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &LocalStore) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if let Err(err) = fs::create_dir_all(parent).await {
            warn!("failed to create {}: {err}", parent.display());
        }
    }
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
