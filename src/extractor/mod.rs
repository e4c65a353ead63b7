pub mod filter;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::dictionary::Dictionaries;
use crate::model::{ENTITY_THRESHOLD, Entity, EntityModel, ModelError};

pub use filter::{Rejection, accept, is_valid_furniture_term, rejection};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Model not loaded")]
    ModelNotLoaded,

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Turns page text into furniture item names using the entity model and the
/// word lists. Holds no per-request state.
#[derive(Clone)]
pub struct FurnitureExtractor {
    model: Option<Arc<dyn EntityModel>>,
    dictionaries: Arc<Dictionaries>,
}

impl FurnitureExtractor {
    /// `model` is `None` when it failed to load; extraction then always fails
    /// with [`ExtractError::ModelNotLoaded`].
    pub fn new(model: Option<Arc<dyn EntityModel>>, dictionaries: Arc<Dictionaries>) -> Self {
        Self {
            model,
            dictionaries,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    /// Sorted, deduplicated furniture items mentioned in `text`.
    #[instrument(skip_all, fields(text_chars = text.chars().count()))]
    pub async fn extract_furniture(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let Some(model) = self.model.as_deref() else {
            return Err(ExtractError::ModelNotLoaded);
        };

        let entities = model
            .predict_entities(text, &self.dictionaries.furniture_labels, ENTITY_THRESHOLD)
            .await?;

        Ok(select_items(entities, &self.dictionaries))
    }
}

/// Trim, filter and deduplicate entity texts. Deduplication is case-sensitive
/// and the result is in byte-wise lexicographic order.
pub fn select_items(
    entities: impl IntoIterator<Item = Entity>,
    dictionaries: &Dictionaries,
) -> Vec<String> {
    let mut items = BTreeSet::new();

    for entity in entities {
        let item = entity.text.trim();
        match rejection(item, dictionaries) {
            None => {
                items.insert(item.to_string());
            }
            Some(reason) => {
                debug!(item, label = %entity.label, score = entity.score, ?reason, "Rejected candidate");
            }
        }
    }

    items.into_iter().collect()
}
