use std::sync::Arc;

use canvas_insight_application::{
    infrastructure_config::Config,
    ports::incoming::{analysis::AnalyzeDrawingUseCase, drawing::SaveDrawingUseCase},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analyze_use_case: Arc<dyn AnalyzeDrawingUseCase + Send + Sync>,
    pub save_drawing_use_case: Arc<dyn SaveDrawingUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        analyze_use_case: Arc<dyn AnalyzeDrawingUseCase + Send + Sync>,
        save_drawing_use_case: Arc<dyn SaveDrawingUseCase + Send + Sync>,
    ) -> Self {
        Self {
            config,
            analyze_use_case,
            save_drawing_use_case,
        }
    }

    pub fn is_analysis_running(&self) -> bool {
        self.analyze_use_case.is_running()
    }
}
