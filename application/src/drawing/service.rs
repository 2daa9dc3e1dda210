use std::sync::Arc;
use tracing::{info, instrument};

use crate::analysis::capture::CaptureSlot;
use crate::error::{AppError, AppResult};
use crate::ports::incoming::drawing::{SaveDrawingUseCase, SavedDrawing};
use crate::ports::outgoing::{image_codec::DynImageCodecPort, image_store::DynImageStorePort};
use domain::pixel_buffer::PixelBuffer;

pub struct SaveDrawingService {
    codec: DynImageCodecPort,
    store: DynImageStorePort,
    capture_slot: Arc<CaptureSlot>,
}

impl SaveDrawingService {
    pub fn new(
        codec: DynImageCodecPort,
        store: DynImageStorePort,
        capture_slot: Arc<CaptureSlot>,
    ) -> Self {
        Self {
            codec,
            store,
            capture_slot,
        }
    }
}

#[async_trait::async_trait]
impl SaveDrawingUseCase for SaveDrawingService {
    #[instrument(skip(self))]
    async fn save_drawing(&self, drawing: Option<PixelBuffer>) -> AppResult<SavedDrawing> {
        let drawing = match drawing {
            Some(drawing) => {
                self.capture_slot.record(drawing.clone());
                drawing
            }
            None => self
                .capture_slot
                .latest()
                .ok_or(AppError::MissingDrawing)?,
        };

        let png_data = self.codec.encode_png(&drawing)?;
        self.store.write_image(&png_data).await?;

        let saved = SavedDrawing {
            location: self.store.location(),
            width: drawing.width(),
            height: drawing.height(),
            size_bytes: png_data.len(),
        };

        info!(
            location = %saved.location,
            width = saved.width,
            height = saved.height,
            "Drawing saved"
        );

        Ok(saved)
    }
}
