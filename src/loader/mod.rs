//! Candidate loaders
//!
//! The widget fetches its option set once, through the [`CandidateLoader`]
//! trait. Loaders simulate a network fetch: they wait for a fixed delay and
//! then resolve with the whole collection.
//!
//! - [`StaticLoader`]: serves an in-memory list (the built-in country list by default)
//! - [`FileLoader`]: reads a JSON array of `{ "name", "code" }` objects

mod countries;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::candidate::{self, Candidate};
use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};

pub use countries::{COUNTRIES, countries};

/// Trait for fetching the candidate set
#[async_trait]
pub trait CandidateLoader: Send + Sync {
    /// Fetch the full candidate collection
    ///
    /// # Returns
    /// * `Result<Vec<Candidate>>` - All candidates in display order
    async fn load(&self) -> Result<Vec<Candidate>>;
}

/// Loader serving an in-memory list after a fixed delay
#[derive(Debug, Clone)]
pub struct StaticLoader {
    candidates: Vec<Candidate>,
    delay: Duration,
}

impl StaticLoader {
    /// Create a loader for the given candidates
    ///
    /// # Arguments
    /// * `candidates` - Candidates to serve
    /// * `delay` - Simulated fetch latency
    pub fn new(candidates: Vec<Candidate>, delay: Duration) -> Self {
        Self { candidates, delay }
    }

    /// Loader for the built-in country list
    pub fn countries(delay: Duration) -> Self {
        Self::new(countries(), delay)
    }
}

#[async_trait]
impl CandidateLoader for StaticLoader {
    async fn load(&self) -> Result<Vec<Candidate>> {
        debug!("Serving {} static candidates after {:?}", self.candidates.len(), self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(self.candidates.clone())
    }
}

/// Loader reading candidates from a JSON file after a fixed delay
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
    delay: Duration,
}

impl FileLoader {
    /// Create a loader for a JSON candidate file
    ///
    /// # Arguments
    /// * `path` - File holding a JSON array of `{ "name", "code" }` objects
    /// * `delay` - Simulated fetch latency
    pub fn new(path: impl Into<PathBuf>, delay: Duration) -> Self {
        Self {
            path: path.into(),
            delay,
        }
    }

    /// Path of the candidate file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CandidateLoader for FileLoader {
    async fn load(&self) -> Result<Vec<Candidate>> {
        tokio::time::sleep(self.delay).await;

        let shown = self.path.display().to_string();
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::FileNotFound(shown.clone())
            } else {
                LoadError::ReadFailed(format!("{shown}: {e}"))
            }
        })?;

        let candidates = parse_candidates(&content)?;
        info!("Read {} candidates from {}", candidates.len(), shown);
        Ok(candidates)
    }
}

/// Parse a JSON array of candidates
pub fn parse_candidates(content: &str) -> Result<Vec<Candidate>> {
    let candidates: Vec<Candidate> =
        serde_json::from_str(content).map_err(|e| LoadError::InvalidFormat(e.to_string()))?;
    Ok(candidates)
}

/// Load through `loader` and validate the resulting set.
///
/// A set with an empty name or a duplicated code is a failed load.
pub async fn load_validated(loader: &dyn CandidateLoader) -> Result<Vec<Candidate>> {
    let candidates = loader.load().await?;
    candidate::validate(&candidates)?;
    Ok(candidates)
}

/// Build the loader described by the configuration
pub fn from_config(config: &LoaderConfig) -> Arc<dyn CandidateLoader> {
    let delay = config.delay();
    match &config.candidates_file {
        Some(path) => {
            debug!("Using candidate file {}", path.display());
            Arc::new(FileLoader::new(path.clone(), delay))
        }
        None => {
            debug!("Using built-in country list");
            Arc::new(StaticLoader::countries(delay))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeaheadError;

    fn temp_file(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("typeahead-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test(start_paused = true)]
    async fn test_static_loader_waits_for_delay() {
        let loader = StaticLoader::new(
            vec![Candidate::new("Albania", "AL")],
            Duration::from_millis(1000),
        );

        let start = tokio::time::Instant::now();
        let candidates = loader.load().await.unwrap();
        assert_eq!(candidates, vec![Candidate::new("Albania", "AL")]);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn test_builtin_countries_are_valid() {
        let loader = StaticLoader::countries(Duration::ZERO);
        let candidates = tokio_test::block_on(load_validated(&loader)).unwrap();
        assert_eq!(candidates.len(), COUNTRIES.len());
        assert!(candidates.iter().any(|c| c.name == "Albania" && c.code == "AL"));
    }

    #[tokio::test]
    async fn test_file_loader_reads_json() {
        let path = temp_file(
            r#"[{"name":"Afghanistan","code":"AF"},{"name":"Albania","code":"AL"}]"#,
        );
        let loader = FileLoader::new(&path, Duration::ZERO);
        let candidates = loader.load().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1], Candidate::new("Albania", "AL"));
    }

    #[tokio::test]
    async fn test_file_loader_missing_file() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        let loader = FileLoader::new(&path, Duration::ZERO);
        match loader.load().await {
            Err(TypeaheadError::Load(LoadError::FileNotFound(p))) => {
                assert_eq!(p, path.display().to_string())
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_loader_invalid_json() {
        let path = temp_file(r#"{"name":"Albania"}"#);
        let loader = FileLoader::new(&path, Duration::ZERO);
        let result = loader.load().await;
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(TypeaheadError::Load(LoadError::InvalidFormat(_)))
        ));
    }

    #[tokio::test]
    async fn test_load_validated_rejects_duplicates() {
        let loader = StaticLoader::new(
            vec![Candidate::new("Albania", "AL"), Candidate::new("Algeria", "AL")],
            Duration::ZERO,
        );
        let result = load_validated(&loader).await;
        assert!(matches!(
            result,
            Err(TypeaheadError::Load(LoadError::DuplicateCode(code))) if code == "AL"
        ));
    }
}
