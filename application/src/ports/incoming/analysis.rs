use crate::credential::ApiCredential;
use crate::error::AppResult;
use domain::{analysis::Analysis, pixel_buffer::PixelBuffer};

#[async_trait::async_trait]
pub trait AnalyzeDrawingUseCase: Send + Sync {
    async fn analyze_drawing(
        &self,
        drawing: Option<PixelBuffer>,
        credential: ApiCredential,
    ) -> AppResult<Analysis>;

    fn is_running(&self) -> bool;
}
