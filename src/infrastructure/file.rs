use crate::domain::model::ModelArtifact;
use crate::domain::ports::ModelRepository;
use crate::error::{EstimatorError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Reads a JSON model artifact from local disk.
#[derive(Debug, Clone)]
pub struct FileModelRepository {
    path: PathBuf,
}

impl FileModelRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ModelRepository for FileModelRepository {
    async fn load(&self) -> Result<ModelArtifact> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| EstimatorError::ArtifactLoad {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read model artifact");
        ModelArtifact::from_json(&self.path, &bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::tests::sample_artifact;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&serde_json::to_vec(&sample_artifact()).unwrap())
            .unwrap();

        let repo = FileModelRepository::new(file.path());
        assert_eq!(repo.load().await.unwrap(), sample_artifact());
    }

    #[tokio::test]
    async fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let repo = FileModelRepository::new(&path);

        match repo.load().await {
            Err(EstimatorError::ArtifactLoad { path: reported, .. }) => {
                assert_eq!(reported, path)
            }
            other => panic!("expected ArtifactLoad, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_corrupt_file_is_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"format_version\": 1,").unwrap();

        let repo = FileModelRepository::new(file.path());
        assert!(matches!(
            repo.load().await,
            Err(EstimatorError::ArtifactLoad { .. })
        ));
    }
}
