//! Application layer: the prediction pipeline and the form session that
//! drives it.
//!
//! `PredictionPipeline` is built once from an explicitly loaded model and
//! then serves any number of selections without further I/O.

pub mod pipeline;
pub mod session;
