use serde::Serialize;

use crate::error::AppResult;
use domain::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedDrawing {
    pub location: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

#[async_trait::async_trait]
pub trait SaveDrawingUseCase: Send + Sync {
    /// Saves `drawing`, or the most recent capture when `None`.
    async fn save_drawing(&self, drawing: Option<PixelBuffer>) -> AppResult<SavedDrawing>;
}
