use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{info, instrument, warn};

use crate::analysis::{
    capture::{CaptureSlot, RunGuard},
    encoder::ImageEncoder,
};
use crate::config::AnalysisSettings;
use crate::credential::ApiCredential;
use crate::error::{AppError, AppResult};
use crate::ports::incoming::analysis::AnalyzeDrawingUseCase;
use crate::ports::outgoing::vision_client::{DynVisionClientPort, VisionRequest};
use domain::{analysis::Analysis, encoded_image::EncodedImage, pixel_buffer::PixelBuffer};

pub struct AnalysisServiceDeps {
    pub encoder: ImageEncoder,
    pub vision_client: DynVisionClientPort,
    pub capture_slot: Arc<CaptureSlot>,
}

/// Capture → encode → request pipeline, one run at a time.
pub struct AnalysisService {
    settings: Arc<AnalysisSettings>,
    encoder: ImageEncoder,
    vision_client: DynVisionClientPort,
    capture_slot: Arc<CaptureSlot>,
    running: AtomicBool,
}

impl AnalysisService {
    pub fn new(settings: &Arc<AnalysisSettings>, deps: AnalysisServiceDeps) -> Self {
        Self {
            settings: Arc::clone(settings),
            encoder: deps.encoder,
            vision_client: deps.vision_client,
            capture_slot: deps.capture_slot,
            running: AtomicBool::new(false),
        }
    }

    fn build_request(&self, image: EncodedImage) -> VisionRequest {
        VisionRequest {
            model: self.settings.model.clone(),
            instruction: self.settings.instruction.clone(),
            image,
            max_output_tokens: self.settings.max_output_tokens,
        }
    }
}

#[async_trait::async_trait]
impl AnalyzeDrawingUseCase for AnalysisService {
    #[instrument(skip(self, credential))]
    async fn analyze_drawing(
        &self,
        drawing: Option<PixelBuffer>,
        credential: ApiCredential,
    ) -> AppResult<Analysis> {
        if let Some(drawing) = &drawing {
            self.capture_slot.record(drawing.clone());
        }

        let Some(_run) = RunGuard::acquire(&self.running) else {
            warn!("Rejected analyze trigger while another analysis is running");
            return Err(AppError::AnalysisInProgress);
        };

        if credential.is_empty() {
            warn!("Analysis skipped: no API key supplied");
            return Err(AppError::MissingCredential);
        }

        let drawing = drawing
            .filter(|drawing| !drawing.is_blank(self.settings.background))
            .ok_or_else(|| {
                warn!("Analysis skipped: canvas has no content");
                AppError::MissingDrawing
            })?;

        let image = self.encoder.encode(&drawing).await?;
        let request = self.build_request(image);

        let analysis = self
            .vision_client
            .describe_image(&request, &credential)
            .await?;

        info!(
            model = %request.model,
            answer_chars = analysis.text.chars().count(),
            "Drawing analysis completed"
        );

        Ok(analysis)
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outgoing::image_codec::ImageCodecPort;
    use crate::drawing::service::SaveDrawingService;
    use crate::ports::incoming::drawing::SaveDrawingUseCase;
    use crate::test_support::{FakePngCodec, InMemoryImageStore, RecordingVisionClient};

    const BACKGROUND: [u8; 4] = [255, 248, 220, 255];

    struct Harness {
        service: AnalysisService,
        store: Arc<InMemoryImageStore>,
        client: Arc<RecordingVisionClient>,
        slot: Arc<CaptureSlot>,
    }

    fn harness(client: RecordingVisionClient) -> Harness {
        let store = Arc::new(InMemoryImageStore::new("img.png"));
        let client = Arc::new(client);
        let slot = Arc::new(CaptureSlot::new());
        let settings = Arc::new(AnalysisSettings {
            model: "gpt-4o-mini".to_string(),
            instruction: "Describe de forma breve y en español esta imagen.".to_string(),
            max_output_tokens: 500,
            background: BACKGROUND,
        });

        let service = AnalysisService::new(
            &settings,
            AnalysisServiceDeps {
                encoder: ImageEncoder::new(Arc::new(FakePngCodec), Arc::clone(&store) as _),
                vision_client: Arc::clone(&client) as _,
                capture_slot: Arc::clone(&slot),
            },
        );

        Harness {
            service,
            store,
            client,
            slot,
        }
    }

    fn sketch(width: u32, height: u32) -> PixelBuffer {
        let mut rgba = PixelBuffer::filled(width, height, BACKGROUND)
            .unwrap()
            .into_rgba();
        rgba[0..4].copy_from_slice(&[255, 0, 0, 255]);
        PixelBuffer::new(width, height, rgba).unwrap()
    }

    #[tokio::test]
    async fn empty_credential_makes_no_request() {
        let h = harness(RecordingVisionClient::answering("unused"));

        let result = h
            .service
            .analyze_drawing(Some(sketch(4, 4)), ApiCredential::empty())
            .await;

        assert!(matches!(result, Err(AppError::MissingCredential)));
        assert_eq!(h.client.calls(), 0);
        assert_eq!(h.store.writes(), 0);
    }

    #[tokio::test]
    async fn missing_drawing_touches_neither_encoder_nor_requester() {
        let h = harness(RecordingVisionClient::answering("unused"));

        let result = h
            .service
            .analyze_drawing(None, ApiCredential::new("sk-test"))
            .await;

        assert!(matches!(result, Err(AppError::MissingDrawing)));
        assert_eq!(h.store.writes(), 0);
        assert_eq!(h.client.calls(), 0);
    }

    #[tokio::test]
    async fn blank_canvas_counts_as_missing_drawing() {
        let h = harness(RecordingVisionClient::answering("unused"));
        let blank = PixelBuffer::filled(4, 4, BACKGROUND).unwrap();

        let result = h
            .service
            .analyze_drawing(Some(blank), ApiCredential::new("sk-test"))
            .await;

        assert!(matches!(result, Err(AppError::MissingDrawing)));
        assert_eq!(h.store.writes(), 0);
        assert!(h.slot.latest().is_some());
    }

    #[tokio::test]
    async fn successful_run_returns_model_text_and_sends_prompt() {
        let h = harness(RecordingVisionClient::answering("a red circle"));

        let analysis = h
            .service
            .analyze_drawing(Some(sketch(6, 5)), ApiCredential::new("sk-test"))
            .await
            .unwrap();

        assert_eq!(analysis.text, "a red circle");
        assert_eq!(h.client.calls(), 1);

        let request = h.client.last_request().unwrap();
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_output_tokens, 500);
        assert!(request.image.data_uri().starts_with("data:image/png;base64,"));
        assert_eq!(h.slot.latest().unwrap().dimensions(), (6, 5));
        assert!(!h.service.is_running());
    }

    #[tokio::test]
    async fn remote_failure_is_reported_and_not_retried() {
        let h = harness(RecordingVisionClient::failing("quota exceeded"));

        let result = h
            .service
            .analyze_drawing(Some(sketch(3, 3)), ApiCredential::new("sk-test"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::AnalysisFailed { ref message }) if message == "quota exceeded"
        ));
        assert_eq!(h.client.calls(), 1);
        assert!(!h.service.is_running());
    }

    #[tokio::test]
    async fn consecutive_runs_each_overwrite_the_intermediate_file() {
        let h = harness(RecordingVisionClient::answering("ok"));
        let first = sketch(8, 8);
        let second = sketch(2, 9);

        h.service
            .analyze_drawing(Some(first), ApiCredential::new("sk-test"))
            .await
            .unwrap();
        h.service
            .analyze_drawing(Some(second.clone()), ApiCredential::new("sk-test"))
            .await
            .unwrap();

        assert_eq!(h.store.writes(), 2);
        let expected = FakePngCodec.encode_png(&second).unwrap();
        assert_eq!(h.store.content().unwrap(), expected);

        let sent = h.client.last_request().unwrap().image.decode_bytes().unwrap();
        assert_eq!(sent, expected);
    }

    #[tokio::test]
    async fn overlapping_trigger_is_rejected() {
        let h = harness(RecordingVisionClient::answering("ok"));
        let _held = RunGuard::acquire(&h.service.running).unwrap();

        assert!(h.service.is_running());
        let result = h
            .service
            .analyze_drawing(Some(sketch(2, 2)), ApiCredential::new("sk-test"))
            .await;

        assert!(matches!(result, Err(AppError::AnalysisInProgress)));
        assert_eq!(h.client.calls(), 0);
    }

    #[tokio::test]
    async fn canvas_filled_with_one_stroke_color_is_analyzed() {
        let h = harness(RecordingVisionClient::answering("a red square"));

        let analysis = h
            .service
            .analyze_drawing(
                Some(PixelBuffer::filled(10, 10, [255, 0, 0, 255]).unwrap()),
                ApiCredential::new("sk-test"),
            )
            .await
            .unwrap();

        assert_eq!(analysis.text, "a red square");
        assert_eq!(h.client.calls(), 1);
    }

    #[tokio::test]
    async fn single_pixel_capture_is_analyzed() {
        let h = harness(RecordingVisionClient::answering("a dot"));

        let result = h
            .service
            .analyze_drawing(
                Some(PixelBuffer::filled(1, 1, [0, 0, 0, 255]).unwrap()),
                ApiCredential::new("sk-test"),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejected_trigger_still_records_the_new_drawing_for_save() {
        let h = harness(RecordingVisionClient::answering("ok"));
        let save_store = Arc::new(InMemoryImageStore::new("drawing.png"));
        let save = SaveDrawingService::new(
            Arc::new(FakePngCodec),
            Arc::clone(&save_store) as _,
            Arc::clone(&h.slot),
        );

        h.service
            .analyze_drawing(Some(sketch(2, 2)), ApiCredential::new("sk-test"))
            .await
            .unwrap();
        let result = h
            .service
            .analyze_drawing(Some(sketch(5, 5)), ApiCredential::empty())
            .await;
        assert!(matches!(result, Err(AppError::MissingCredential)));

        let saved = save.save_drawing(None).await.unwrap();

        assert_eq!((saved.width, saved.height), (5, 5));
        assert_eq!(
            save_store.content().unwrap(),
            FakePngCodec.encode_png(&sketch(5, 5)).unwrap()
        );
    }

    #[tokio::test]
    async fn drawing_sent_during_a_running_analysis_is_still_captured() {
        let h = harness(RecordingVisionClient::answering("ok"));
        let _held = RunGuard::acquire(&h.service.running).unwrap();

        let result = h
            .service
            .analyze_drawing(Some(sketch(7, 3)), ApiCredential::new("sk-test"))
            .await;

        assert!(matches!(result, Err(AppError::AnalysisInProgress)));
        assert_eq!(h.slot.latest().unwrap().dimensions(), (7, 3));
    }
}
