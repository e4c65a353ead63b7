use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::model::{
    Entity, EntityModel,
    errors::{ModelError, ModelLoadError},
};

const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for a GLiNER inference server.
///
/// The server exposes `GET /health` returning `{"status": "ok", "model": ...}`
/// and `POST /predict` taking `{"text", "labels", "threshold"}` and returning
/// a JSON array of `{"text", "label", "score"}` records.
#[derive(Debug, Clone)]
pub struct GlinerClient {
    client: Client,
    predict_url: Url,
    model_name: String,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
    labels: &'a [String],
    threshold: f32,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    #[serde(default)]
    model: Option<String>,
}

/// Entity as it appears on the wire. Every field is optional so a bad record
/// is reported as such instead of as an opaque decode failure.
#[derive(Debug, Deserialize)]
struct RawEntity {
    text: Option<String>,
    label: Option<String>,
    score: Option<f32>,
}

impl TryFrom<RawEntity> for Entity {
    type Error = ModelError;

    fn try_from(raw: RawEntity) -> Result<Self, Self::Error> {
        let text = raw
            .text
            .ok_or_else(|| ModelError::InvalidEntity("missing 'text'".to_string()))?;
        let label = raw
            .label
            .ok_or_else(|| ModelError::InvalidEntity(format!("missing 'label' for '{}'", text)))?;
        let score = raw
            .score
            .ok_or_else(|| ModelError::InvalidEntity(format!("missing 'score' for '{}'", text)))?;

        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ModelError::InvalidEntity(format!(
                "score {} out of range for '{}'",
                score, text
            )));
        }

        Ok(Entity { text, label, score })
    }
}

impl GlinerClient {
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Probe the server and check it serves `model_name`.
    #[instrument(skip_all, fields(endpoint = %endpoint, model = model_name))]
    pub async fn load(endpoint: &Url, model_name: &str) -> Result<Self, ModelLoadError> {
        let client = ClientBuilder::new()
            .build()
            .map_err(|e| ModelLoadError::Client(e.to_string()))?;

        let health_url = endpoint_path(endpoint, "health")?;
        let response = client
            .get(health_url)
            .timeout(HEALTH_PROBE_TIMEOUT)
            .send()
            .await
            .map_err(|e| ModelLoadError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ModelLoadError::Unhealthy(format!(
                "health check returned {}",
                response.status()
            )));
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| ModelLoadError::Unhealthy(e.to_string()))?;

        if !health.status.eq_ignore_ascii_case("ok") {
            return Err(ModelLoadError::Unhealthy(format!(
                "status is '{}'",
                health.status
            )));
        }

        if let Some(actual) = health.model
            && actual != model_name
        {
            return Err(ModelLoadError::WrongModel {
                expected: model_name.to_string(),
                actual,
            });
        }

        Ok(Self {
            client,
            predict_url: endpoint_path(endpoint, "predict")?,
            model_name: model_name.to_string(),
        })
    }
}

#[async_trait]
impl EntityModel for GlinerClient {
    #[instrument(skip_all, fields(model = %self.model_name, labels = labels.len()))]
    async fn predict_entities(
        &self,
        text: &str,
        labels: &[String],
        threshold: f32,
    ) -> Result<Vec<Entity>, ModelError> {
        let response = self
            .client
            .post(self.predict_url.clone())
            .json(&PredictRequest {
                text,
                labels,
                threshold,
            })
            .send()
            .await
            .map_err(|e| ModelError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status { status, body });
        }

        let raw: Vec<RawEntity> = response
            .json()
            .await
            .map_err(|e| ModelError::Decode(e.to_string()))?;

        let entities = raw
            .into_iter()
            .map(Entity::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = entities.len(), "Model returned entities");
        Ok(entities)
    }
}

/// Resolve `path` under `endpoint`, treating the endpoint as a directory even
/// without a trailing slash.
fn endpoint_path(endpoint: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut base = endpoint.clone();
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    base.join(path)
}
