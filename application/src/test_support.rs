use std::io;
use std::ops::Range;
use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

use crate::credential::ApiCredential;
use crate::error::{AppError, AppResult};
use crate::ports::outgoing::{
    image_codec::ImageCodecPort,
    image_store::ImageStorePort,
    vision_client::{VisionClientPort, VisionRequest},
};
use domain::{analysis::Analysis, pixel_buffer::PixelBuffer};

/// Stand-in codec: 8 bytes of little-endian width/height followed by raw RGBA.
pub struct FakePngCodec;

impl ImageCodecPort for FakePngCodec {
    fn encode_png(&self, buffer: &PixelBuffer) -> AppResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(8 + buffer.as_rgba().len());
        bytes.extend_from_slice(&buffer.width().to_le_bytes());
        bytes.extend_from_slice(&buffer.height().to_le_bytes());
        bytes.extend_from_slice(buffer.as_rgba());
        Ok(bytes)
    }

    fn decode_dimensions(&self, png_data: &[u8]) -> AppResult<(u32, u32)> {
        let header = |range: Range<usize>| -> AppResult<u32> {
            png_data
                .get(range)
                .and_then(|bytes| bytes.try_into().ok())
                .map(u32::from_le_bytes)
                .ok_or_else(|| AppError::CodecError {
                    message: "truncated header".to_string(),
                })
        };
        Ok((header(0..4)?, header(4..8)?))
    }
}

pub struct InMemoryImageStore {
    location: String,
    content: Mutex<Option<Vec<u8>>>,
    writes: AtomicUsize,
    lose_writes: bool,
}

impl InMemoryImageStore {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            content: Mutex::new(None),
            writes: AtomicUsize::new(0),
            lose_writes: false,
        }
    }

    /// Accepts writes but never keeps them, so every read finds no file.
    pub fn losing_writes(mut self) -> Self {
        self.lose_writes = true;
        self
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn content(&self) -> Option<Vec<u8>> {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait::async_trait]
impl ImageStorePort for InMemoryImageStore {
    async fn write_image(&self, png_data: &[u8]) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if !self.lose_writes {
            *self.content.lock().unwrap_or_else(PoisonError::into_inner) = Some(png_data.to_vec());
        }
        Ok(())
    }

    async fn read_image(&self) -> AppResult<Vec<u8>> {
        self.content().ok_or_else(|| {
            AppError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", self.location),
            ))
        })
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}

pub struct RecordingVisionClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<VisionRequest>>,
}

impl RecordingVisionClient {
    pub fn answering(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<VisionRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait::async_trait]
impl VisionClientPort for RecordingVisionClient {
    async fn describe_image(
        &self,
        request: &VisionRequest,
        _credential: &ApiCredential,
    ) -> AppResult<Analysis> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(request.clone());

        match &self.reply {
            Ok(text) => Ok(Analysis::new(text.clone())),
            Err(message) => Err(AppError::AnalysisFailed {
                message: message.clone(),
            }),
        }
    }
}
