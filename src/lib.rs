pub mod app;
pub mod bookmarks;
pub mod catalog;
pub mod config;
pub mod daily;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod quiz;
pub mod source;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use catalog::CategoryCatalog;
pub use config::Config;
pub use daily::{daily_index, StreakState};
pub use errors::{AppError, FactError};
pub use models::Fact;
pub use state::AppState;
pub use storage::{load_store, LocalStore};
pub use store::FactStore;
