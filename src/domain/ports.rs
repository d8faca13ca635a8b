use super::features::FeatureVector;
use super::model::ModelArtifact;
use crate::error::Result;
use async_trait::async_trait;

/// Anything that turns a feature vector into a salary figure.
pub trait SalaryModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// Source of the serialized model.
#[async_trait]
pub trait ModelRepository: Send + Sync {
    async fn load(&self) -> Result<ModelArtifact>;
    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

pub type SalaryModelBox = Box<dyn SalaryModel>;
pub type ModelRepositoryBox = Box<dyn ModelRepository>;
