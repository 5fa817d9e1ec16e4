use crate::errors::FactError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Where fact resources come from. `resource` is the configured file name of
/// a category, e.g. `nature.json`.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn retrieve(&self, resource: &str) -> Result<Vec<u8>, FactError>;

    fn describe(&self, resource: &str) -> String {
        resource.to_string()
    }
}

pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FactSource for DirSource {
    async fn retrieve(&self, resource: &str) -> Result<Vec<u8>, FactError> {
        let path = self.root.join(resource);
        fs::read(&path)
            .await
            .map_err(|err| FactError::load(path.display().to_string(), err))
    }

    fn describe(&self, resource: &str) -> String {
        self.root.join(resource).display().to_string()
    }
}

pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }
}

#[async_trait]
impl FactSource for HttpSource {
    async fn retrieve(&self, resource: &str) -> Result<Vec<u8>, FactError> {
        let url = self.url(resource);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| FactError::load(url.as_str(), err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::load(url, format!("status {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| FactError::load(url.as_str(), err))?;
        Ok(bytes.to_vec())
    }

    fn describe(&self, resource: &str) -> String {
        self.url(resource)
    }
}
