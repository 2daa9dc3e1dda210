use tracing::{debug, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::ports::outgoing::{image_codec::DynImageCodecPort, image_store::DynImageStorePort};
use domain::{encoded_image::EncodedImage, pixel_buffer::PixelBuffer};

/// PNG-encodes a capture, round-trips it through the intermediate file and
/// returns the file content as base64.
pub struct ImageEncoder {
    codec: DynImageCodecPort,
    store: DynImageStorePort,
}

impl ImageEncoder {
    pub fn new(codec: DynImageCodecPort, store: DynImageStorePort) -> Self {
        Self { codec, store }
    }

    #[instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
    pub async fn encode(&self, buffer: &PixelBuffer) -> AppResult<EncodedImage> {
        let png_data = self
            .codec
            .encode_png(buffer)
            .map_err(|e| encoding_failed(format!("could not encode PNG: {e}")))?;

        let location = self.store.location();

        self.store.write_image(&png_data).await.map_err(|e| {
            warn!(%location, "Intermediate image write failed: {}", e);
            encoding_failed("could not write the intermediate image file".to_string())
        })?;

        let stored = self.store.read_image().await.map_err(|e| {
            warn!(%location, "Intermediate image read-back failed: {}", e);
            encoding_failed("could not read back the intermediate image file".to_string())
        })?;

        let stored_dimensions = self.codec.decode_dimensions(&stored).map_err(|e| {
            warn!(%location, "Intermediate image is not a readable PNG: {}", e);
            encoding_failed("the intermediate image file is not a readable PNG".to_string())
        })?;

        if stored_dimensions != buffer.dimensions() {
            warn!(%location, "Intermediate image dimensions changed on disk");
            return Err(encoding_failed(format!(
                "the intermediate image holds a {}x{} image, expected {}x{}",
                stored_dimensions.0,
                stored_dimensions.1,
                buffer.width(),
                buffer.height()
            )));
        }

        debug!(bytes = stored.len(), %location, "Drawing stored and encoded");

        Ok(EncodedImage::from_png_bytes(&stored))
    }
}

/// Messages stay free of filesystem paths; they are shown to the user as-is.
fn encoding_failed(message: String) -> AppError {
    AppError::EncodingFailed { message }
}
