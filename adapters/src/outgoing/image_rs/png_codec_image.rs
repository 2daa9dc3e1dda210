use canvas_insight_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_codec::ImageCodecPort,
};
use domain::pixel_buffer::PixelBuffer;
use image::{ImageBuffer, ImageFormat, ImageReader, Rgba};
use std::io::Cursor;
use tracing::{debug, instrument};

#[derive(Clone, Copy, Default)]
pub struct ImagePngAdapter;

impl ImagePngAdapter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
    fn encode_png_impl(buffer: &PixelBuffer) -> AppResult<Vec<u8>> {
        let img_buffer = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            buffer.width(),
            buffer.height(),
            buffer.as_rgba().to_vec(),
        )
        .ok_or_else(|| AppError::CodecError {
            message: "Failed to create image buffer from RGBA data".to_string(),
        })?;

        let mut png_bytes = Vec::new();
        let mut cursor = Cursor::new(&mut png_bytes);

        img_buffer
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| AppError::CodecError {
                message: format!("Failed to encode PNG: {}", e),
            })?;

        if png_bytes.is_empty() {
            return Err(AppError::CodecError {
                message: "PNG encoding produced empty output".to_string(),
            });
        }

        debug!("Encoded PNG: {} bytes", png_bytes.len());
        Ok(png_bytes)
    }

    #[instrument(skip_all, fields(bytes = png_data.len()))]
    fn decode_dimensions_impl(png_data: &[u8]) -> AppResult<(u32, u32)> {
        ImageReader::with_format(Cursor::new(png_data), ImageFormat::Png)
            .into_dimensions()
            .map_err(|e| AppError::CodecError {
                message: format!("Failed to read PNG header: {}", e),
            })
    }
}

impl ImageCodecPort for ImagePngAdapter {
    fn encode_png(&self, buffer: &PixelBuffer) -> AppResult<Vec<u8>> {
        Self::encode_png_impl(buffer)
    }

    fn decode_dimensions(&self, png_data: &[u8]) -> AppResult<(u32, u32)> {
        Self::decode_dimensions_impl(png_data)
    }
}
