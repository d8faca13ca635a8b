use super::pipeline::{PredictionPipeline, PredictionResult};
use crate::domain::features::FeatureSelection;
use crate::error::Result;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    AwaitingInput,
    ResultReady(PredictionResult),
}

/// Interactive form state around a pipeline.
///
/// A successful submit moves to `ResultReady`. A failed submit returns to
/// `AwaitingInput` and hands the error back so the form can be shown again.
pub struct FormSession<'a> {
    pipeline: &'a PredictionPipeline,
    state: SessionState,
}

impl<'a> FormSession<'a> {
    pub fn new(pipeline: &'a PredictionPipeline) -> Self {
        Self {
            pipeline,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn submit(&mut self, selection: &FeatureSelection) -> Result<PredictionResult> {
        self.state = SessionState::AwaitingInput;
        let result = self
            .pipeline
            .submit(selection)
            .inspect_err(|e| warn!(error = %e, "prediction request rejected"))?;
        self.state = SessionState::ResultReady(result.clone());
        Ok(result)
    }

    pub fn reset(&mut self) {
        self.state = SessionState::AwaitingInput;
    }
}
