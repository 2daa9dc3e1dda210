use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use canvas_insight_application::{
    credential::ApiCredential,
    error::{AppError, AppResult},
    infrastructure_config::OpenAiConfig,
    ports::outgoing::vision_client::{VisionClientPort, VisionRequest},
};
use domain::analysis::Analysis;

use super::chat_completions::{ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

pub struct OpenAiVisionClient {
    http_client: Client,
    endpoint: String,
}

impl OpenAiVisionClient {
    pub fn new(config: &OpenAiConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| AppError::ConfigError {
            message: format!("Failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            http_client,
            endpoint: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                CHAT_COMPLETIONS_PATH
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn describe_status(status: StatusCode, detail: &str) -> String {
    let reason = match status {
        StatusCode::UNAUTHORIZED => "authentication rejected",
        StatusCode::FORBIDDEN => "access denied",
        StatusCode::TOO_MANY_REQUESTS => "rate limit or quota exceeded",
        s if s.is_server_error() => "service error",
        _ => "request rejected",
    };

    format!("{reason} ({status}): {detail}")
}

fn error_detail(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body).map_or_else(
        |_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no details provided".to_string()
            } else {
                trimmed.to_string()
            }
        },
        |envelope| envelope.error.message,
    )
}

fn analysis_failed(message: String) -> AppError {
    AppError::AnalysisFailed { message }
}

#[async_trait::async_trait]
impl VisionClientPort for OpenAiVisionClient {
    #[instrument(skip_all, fields(model = %request.model, endpoint = %self.endpoint))]
    async fn describe_image(
        &self,
        request: &VisionRequest,
        credential: &ApiCredential,
    ) -> AppResult<Analysis> {
        let body = ChatCompletionRequest::from_vision_request(request);

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Chat completion request could not be sent: {}", e);
                let kind = if e.is_timeout() {
                    "request timed out"
                } else if e.is_connect() {
                    "could not connect to the analysis service"
                } else {
                    "request failed"
                };
                analysis_failed(format!("{kind}: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = describe_status(status, &error_detail(&body));
            warn!(%status, "Chat completion rejected");
            return Err(analysis_failed(message));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| analysis_failed(format!("unreadable response: {}", e.without_url())))?;

        let text = completion
            .first_text()
            .ok_or_else(|| analysis_failed("response contained no choices".to_string()))?;

        debug!(chars = text.chars().count(), "Chat completion received");
        Ok(Analysis::new(text))
    }
}
