use crate::catalog::CategoryCatalog;
use crate::source::{DirSource, FactSource, HttpSource};
use std::{env, path::PathBuf, sync::Arc};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub base_url: Option<String>,
    pub state_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);
        let data_dir = env::var("FACTS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let base_url = env::var("FACTS_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let state_path = env::var("APP_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/state.json"));

        Self {
            port,
            data_dir,
            base_url,
            state_path,
        }
    }

    /// HTTP when a base URL is configured, otherwise the data directory.
    pub fn source(&self) -> Arc<dyn FactSource> {
        match &self.base_url {
            Some(url) => Arc::new(HttpSource::new(url.as_str())),
            None => Arc::new(DirSource::new(&self.data_dir)),
        }
    }

    pub fn catalog(&self) -> CategoryCatalog {
        CategoryCatalog::with_default_categories(self.source())
    }
}
