use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;
use std::fmt;
use validator::Validate;

use canvas_insight_application::error::{AppError, AppResult};
use domain::pixel_buffer::PixelBuffer;

/// Raw canvas capture: `rgba` is base64 of `width * height * 4` bytes, row-major.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DrawingPayload {
    #[validate(range(min = 1, max = 8192))]
    pub width: u32,
    #[validate(range(min = 1, max = 8192))]
    pub height: u32,
    #[validate(length(min = 1, message = "rgba data cannot be empty"))]
    pub rgba: String,
}

impl DrawingPayload {
    pub fn into_pixel_buffer(self) -> AppResult<PixelBuffer> {
        let rgba = BASE64
            .decode(self.rgba.as_bytes())
            .map_err(|e| AppError::ValidationError {
                message: format!("rgba is not valid base64: {e}"),
            })?;

        Ok(PixelBuffer::new(self.width, self.height, rgba)?)
    }
}

#[derive(Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub drawing: Option<DrawingPayload>,
}

impl fmt::Debug for AnalyzeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzeRequest")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("drawing", &self.drawing)
            .finish()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaveDrawingRequest {
    #[serde(default)]
    #[validate(nested)]
    pub drawing: Option<DrawingPayload>,
}

pub fn decode_drawing(drawing: Option<DrawingPayload>) -> AppResult<Option<PixelBuffer>> {
    drawing.map(DrawingPayload::into_pixel_buffer).transpose()
}
