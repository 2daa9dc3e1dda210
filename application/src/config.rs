use crate::infrastructure_config::AnalysisConfig;
use domain::canvas_config::CanvasConfig;

/// Prompt parameters shared by every analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub model: String,
    pub instruction: String,
    pub max_output_tokens: u32,
    /// RGBA of an untouched canvas; a capture made only of this color has nothing drawn.
    pub background: [u8; 4],
}

impl AnalysisSettings {
    pub fn new(analysis: &AnalysisConfig, canvas: &CanvasConfig) -> Self {
        Self {
            model: analysis.model.clone(),
            instruction: analysis.instruction.clone(),
            max_output_tokens: analysis.max_output_tokens,
            background: canvas.background_color.to_rgb().to_rgba(),
        }
    }
}
