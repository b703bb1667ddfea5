// Client for the hosted inference API running the pretrained
// financial-sentiment model. Classification is fully delegated; this side
// only shapes the request and picks the top-scoring candidate.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::models::Sentiment;

use crate::config::SentimentSettings;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone)]
pub struct SentimentClient {
    client: Client,
    base_url: String,
    model: String,
    api_token: Option<String>,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

// Single inputs answer `[[{label, score}, ..]]`; some deployments flatten
// the outer list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl SentimentClient {
    pub fn new(settings: &SentimentSettings) -> Self {
        SentimentClient {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_token: SentimentSettings::api_token(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    /// Points the client at a different host. Test hook.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Classifies `text`, returning the model's top label and its score.
    pub async fn classify(&self, text: &str) -> Result<Sentiment> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        tracing::info!(model = %self.model, chars = text.len(), "classifying text");

        let mut request = self.client.post(&url).timeout(self.timeout).json(&InferenceRequest {
            inputs: text,
            // First call may hit a cold model; wait instead of erroring.
            options: InferenceOptions {
                wait_for_model: true,
            },
        });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Model(format!(
                "inference API returned {status}: {body}"
            )));
        }

        let sentiment = top_candidate(response.json().await?)?;
        tracing::debug!(label = %sentiment.label, score = sentiment.score, "classified text");
        Ok(sentiment)
    }
}

fn top_candidate(response: InferenceResponse) -> Result<Sentiment> {
    let candidates = match response {
        InferenceResponse::Nested(mut nested) => {
            if nested.is_empty() {
                Vec::new()
            } else {
                nested.remove(0)
            }
        }
        InferenceResponse::Flat(flat) => flat,
    };

    let best = candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| EngineError::Model("empty classifier response".to_string()))?;

    let label = best
        .label
        .parse()
        .map_err(|_| EngineError::Model(format!("unknown label '{}'", best.label)))?;

    Ok(Sentiment {
        label,
        score: best.score,
    })
}
