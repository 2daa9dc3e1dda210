use crate::error::AppResult;
use domain::pixel_buffer::PixelBuffer;
use std::sync::Arc;

pub trait ImageCodecPort: Send + Sync {
    fn encode_png(&self, buffer: &PixelBuffer) -> AppResult<Vec<u8>>;
    fn decode_dimensions(&self, png_data: &[u8]) -> AppResult<(u32, u32)>;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
