use super::pipeline::RoastPipeline;
use crate::config::UpstreamConfig;
use std::sync::Arc;

/// Shared application state for relay handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RoastPipeline>,
}

impl AppState {
    pub fn new(pipeline: RoastPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Production wiring: hosted collaborators, credential from the
    /// process environment.
    pub fn from_config(cfg: &UpstreamConfig) -> Self {
        Self::new(RoastPipeline::from_config(cfg))
    }
}
