//! Zero-shot entity recognition.
//!
//! The rest of the crate only sees [`EntityModel`]; [`GlinerClient`] is the
//! production implementation talking to a GLiNER inference server.

pub mod errors;
pub mod gliner;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::Config;

pub use errors::{ModelError, ModelLoadError};
pub use gliner::GlinerClient;

/// Minimum confidence for an entity to be returned by the model.
pub const ENTITY_THRESHOLD: f32 = 0.3;

/// One labelled span produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub score: f32,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>, score: f32) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            score,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityModel: Send + Sync {
    /// Spans of `text` labelled with one of `labels`, scored at or above
    /// `threshold`.
    async fn predict_entities(
        &self,
        text: &str,
        labels: &[String],
        threshold: f32,
    ) -> Result<Vec<Entity>, ModelError>;
}

/// Connect to the configured model. A failure is logged and turned into
/// `None` so the server can start without it.
pub async fn load_model(config: &Config) -> Option<Arc<dyn EntityModel>> {
    match GlinerClient::load(config.model_endpoint(), config.model_name()).await {
        Ok(client) => {
            info!(
                model = config.model_name(),
                endpoint = %config.model_endpoint(),
                "GLiNER model loaded successfully"
            );
            Some(Arc::new(client))
        }
        Err(e) => {
            error!(
                endpoint = %config.model_endpoint(),
                "Failed to load GLiNER model: {}", e
            );
            None
        }
    }
}
