use crate::domain::model::ModelArtifact;
use crate::domain::ports::ModelRepositoryBox;
use crate::error::{EstimatorError, Result};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

/// Loads the model artifact at most once per process.
///
/// The first caller performs the load; callers arriving while it is in
/// flight wait for it and share the result. A failed load is returned to
/// its caller and not stored; the next caller attempts the load again.
pub struct ModelCache {
    repository: ModelRepositoryBox,
    artifact: OnceCell<Arc<ModelArtifact>>,
}

impl ModelCache {
    pub fn new(repository: ModelRepositoryBox) -> Self {
        Self {
            repository,
            artifact: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<Arc<ModelArtifact>> {
        self.artifact
            .get_or_try_init(|| async {
                let artifact = self.repository.load().await?;
                info!(
                    source = %self.repository.describe(),
                    intercept = artifact.intercept,
                    "model artifact loaded"
                );
                Ok::<_, EstimatorError>(Arc::new(artifact))
            })
            .await
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.artifact.initialized()
    }
}
