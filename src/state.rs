use crate::catalog::CategoryCatalog;
use crate::errors::{AppError, FactError};
use crate::storage::LocalStore;
use crate::store::FactStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CategoryCatalog>,
    /// Outcome of the startup load. A failure is kept so every page can
    /// show it instead of rendering partial data.
    pub facts: Arc<Result<FactStore, FactError>>,
    pub store_path: PathBuf,
    pub store: Arc<Mutex<LocalStore>>,
}

impl AppState {
    pub fn new(
        catalog: CategoryCatalog,
        facts: Result<FactStore, FactError>,
        store_path: PathBuf,
        store: LocalStore,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            facts: Arc::new(facts),
            store_path,
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn facts(&self) -> Result<&FactStore, AppError> {
        match &*self.facts {
            Ok(store) => Ok(store),
            Err(err) => Err(AppError::from(err.clone())),
        }
    }
}
