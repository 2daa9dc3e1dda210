use std::sync::Arc;

use crate::credential::ApiCredential;
use crate::error::AppResult;
use domain::{analysis::Analysis, encoded_image::EncodedImage};

#[derive(Debug, Clone)]
pub struct VisionRequest {
    pub model: String,
    pub instruction: String,
    pub image: EncodedImage,
    pub max_output_tokens: u32,
}

#[async_trait::async_trait]
pub trait VisionClientPort: Send + Sync {
    /// Sends one chat-completion request. Failures come back as `AppError::AnalysisFailed`.
    async fn describe_image(
        &self,
        request: &VisionRequest,
        credential: &ApiCredential,
    ) -> AppResult<Analysis>;
}

pub type DynVisionClientPort = Arc<dyn VisionClientPort>;
