use std::sync::Arc;

use canvas_insight_adapters::outgoing::{
    filesystem::image_file_store::FileImageStore, image_rs::png_codec_image::ImagePngAdapter,
    openai_reqwest::vision_client_openai::OpenAiVisionClient,
};
use canvas_insight_adapters::shared::app_state::AppState as AdaptersAppState;
use canvas_insight_application::error::AppError;
use canvas_insight_application::infrastructure_config::Config;
use canvas_insight_application::ports::incoming::{
    analysis::AnalyzeDrawingUseCase, drawing::SaveDrawingUseCase,
};
use canvas_insight_application::ports::outgoing::{
    image_codec::ImageCodecPort, image_store::ImageStorePort, vision_client::VisionClientPort,
};
use canvas_insight_application::{
    analysis::{
        capture::CaptureSlot,
        encoder::ImageEncoder,
        service::{AnalysisService, AnalysisServiceDeps},
    },
    config::AnalysisSettings,
    drawing::service::SaveDrawingService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analysis_service: Arc<dyn AnalyzeDrawingUseCase + Send + Sync>,
    pub save_drawing_service: Arc<dyn SaveDrawingUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let codec_port: Arc<dyn ImageCodecPort> = Arc::new(ImagePngAdapter::new());
        let capture_slot = Arc::new(CaptureSlot::new());

        let analysis_service =
            Self::create_analysis_service(&config, &codec_port, &capture_slot)?;
        let save_drawing_service =
            Self::create_save_drawing_service(&config, &codec_port, &capture_slot);

        Ok(Self {
            config,
            analysis_service,
            save_drawing_service,
        })
    }

    fn create_analysis_service(
        config: &Config,
        codec_port: &Arc<dyn ImageCodecPort>,
        capture_slot: &Arc<CaptureSlot>,
    ) -> Result<Arc<dyn AnalyzeDrawingUseCase + Send + Sync>, AppError> {
        let capture_store: Arc<dyn ImageStorePort> =
            Arc::new(FileImageStore::new(&config.storage.capture_path));
        let vision_client: Arc<dyn VisionClientPort> =
            Arc::new(OpenAiVisionClient::new(&config.openai)?);

        let settings = Arc::new(AnalysisSettings::new(&config.analysis, &config.canvas));

        Ok(Arc::new(AnalysisService::new(
            &settings,
            AnalysisServiceDeps {
                encoder: ImageEncoder::new(Arc::clone(codec_port), capture_store),
                vision_client,
                capture_slot: Arc::clone(capture_slot),
            },
        )))
    }

    fn create_save_drawing_service(
        config: &Config,
        codec_port: &Arc<dyn ImageCodecPort>,
        capture_slot: &Arc<CaptureSlot>,
    ) -> Arc<dyn SaveDrawingUseCase + Send + Sync> {
        let save_store: Arc<dyn ImageStorePort> =
            Arc::new(FileImageStore::new(&config.storage.save_path));

        Arc::new(SaveDrawingService::new(
            Arc::clone(codec_port),
            save_store,
            Arc::clone(capture_slot),
        ))
    }

    pub fn to_adapters_state(self) -> AdaptersAppState {
        AdaptersAppState::new(
            self.config,
            self.analysis_service,
            self.save_drawing_service,
        )
    }
}
