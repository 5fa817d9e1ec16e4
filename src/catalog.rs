use crate::errors::FactError;
use crate::models::{parse_facts, Fact};
use crate::source::FactSource;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("nature", "nature.json"),
    ("science", "science.json"),
    ("society", "society.json"),
    ("history", "history.json"),
];

/// Declared categories plus a per-session cache of their loaded facts.
/// Entries are never evicted; `reset` drops them all.
pub struct CategoryCatalog {
    categories: Vec<(String, String)>,
    source: Arc<dyn FactSource>,
    cache: Mutex<HashMap<String, Arc<Vec<Fact>>>>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<(String, String)>, source: Arc<dyn FactSource>) -> Self {
        Self {
            categories,
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_categories(source: Arc<dyn FactSource>) -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, resource)| (name.to_string(), resource.to_string()))
            .collect();
        Self::new(categories, source)
    }

    pub fn category_keys(&self) -> Vec<String> {
        self.categories.iter().map(|(name, _)| name.clone()).collect()
    }

    fn resource_for(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(category, _)| category == name)
            .map(|(_, resource)| resource.as_str())
    }

    /// Cached facts for `name`, retrieving them on first use. Unknown
    /// categories yield an empty list without touching the source.
    pub async fn fetch_category(&self, name: &str) -> Result<Arc<Vec<Fact>>, FactError> {
        let Some(resource) = self.resource_for(name) else {
            debug!(category = name, "unknown category");
            return Ok(Arc::new(Vec::new()));
        };

        if let Some(facts) = self.cache.lock().await.get(name) {
            debug!(category = name, "category cache hit");
            return Ok(Arc::clone(facts));
        }

        let described = self.source.describe(resource);
        let bytes = self.source.retrieve(resource).await?;
        let facts = Arc::new(parse_facts(&described, &bytes)?);
        info!(category = name, count = facts.len(), "loaded category");

        self.cache
            .lock()
            .await
            .insert(name.to_string(), Arc::clone(&facts));
        Ok(facts)
    }

    /// Every declared category, concatenated in declaration order. Fetches run
    /// concurrently; any failure fails the whole merge.
    pub async fn fetch_all_mixed(&self) -> Result<Vec<Fact>, FactError> {
        let fetches = self
            .categories
            .iter()
            .map(|(name, _)| self.fetch_category(name));
        let lists = join_all(fetches).await;

        let mut merged = Vec::new();
        for list in lists {
            merged.extend(list?.iter().cloned());
        }
        Ok(merged)
    }

    pub async fn reset(&self) {
        self.cache.lock().await.clear();
    }
}
