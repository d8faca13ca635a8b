use crate::domain::model::ModelArtifact;
use crate::domain::ports::ModelRepository;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves an artifact held in memory.
///
/// Counts loads, which makes it useful for checking that callers load the
/// model only once. `Clone` shares the counter.
#[derive(Debug, Clone)]
pub struct InMemoryModelRepository {
    artifact: ModelArtifact,
    loads: Arc<AtomicUsize>,
}

impl InMemoryModelRepository {
    pub fn new(artifact: ModelArtifact) -> Self {
        Self {
            artifact,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelRepository for InMemoryModelRepository {
    async fn load(&self) -> Result<ModelArtifact> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        // Give concurrent callers a chance to pile up behind the first load.
        tokio::task::yield_now().await;
        Ok(self.artifact.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
