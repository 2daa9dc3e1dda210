use canvas_insight_application::infrastructure_config::{AnalysisConfig, Config};
use tracing::info;

pub fn print_api_info(config: &Config) {
    print_endpoints(config);
    print_analysis_configuration(&config.analysis);
    print_storage_configuration(config);
}

fn print_endpoints(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📋 Endpoints:");
    info!("  💓 Health: GET {}/health", base_url);
    info!("  🎨 Canvas settings: GET {}/canvas/config", base_url);
    info!("  🔍 Analyze drawing: POST {}/analyze", base_url);
    info!("  💾 Save drawing: POST {}/drawing/save", base_url);
}

fn print_analysis_configuration(analysis: &AnalysisConfig) {
    info!("⚙️  Configuration:");
    info!(
        "  🤖 Model: {} (max {} output tokens)",
        analysis.model, analysis.max_output_tokens
    );
}

fn print_storage_configuration(config: &Config) {
    info!(
        "  🗂️  Capture file: {}, saved drawings: {}",
        config.storage.capture_path.display(),
        config.storage.save_path.display()
    );
    info!(
        "  🖌️  Canvas: {}x{}, background {}",
        config.canvas.width, config.canvas.height, config.canvas.background_color
    );
}
