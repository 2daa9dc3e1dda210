use serde::{Deserialize, Serialize};

use crate::color::{HexColor, RgbColor};
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    Freedraw,
    Line,
    Rect,
    Circle,
    Transform,
}

impl DrawingMode {
    pub const ALL: [DrawingMode; 5] = [
        DrawingMode::Freedraw,
        DrawingMode::Line,
        DrawingMode::Rect,
        DrawingMode::Circle,
        DrawingMode::Transform,
    ];
}

/// Drawing surface parameters. Served to the surface, never interpreted by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: HexColor,
    pub stroke_color: HexColor,
    pub stroke_width: u32,
    pub max_stroke_width: u32,
    pub drawing_modes: Vec<DrawingMode>,
}

impl CanvasConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DomainError::ConfigError {
                message: format!(
                    "canvas dimensions must be non-zero, got {}x{}",
                    self.width, self.height
                ),
            });
        }

        if self.max_stroke_width == 0 {
            return Err(DomainError::ConfigError {
                message: "max_stroke_width must be greater than 0".to_string(),
            });
        }

        if !(1..=self.max_stroke_width).contains(&self.stroke_width) {
            return Err(DomainError::ConfigError {
                message: format!(
                    "stroke_width must be between 1 and {}",
                    self.max_stroke_width
                ),
            });
        }

        if self.drawing_modes.is_empty() {
            return Err(DomainError::ConfigError {
                message: "at least one drawing mode must be enabled".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn default_drawing_mode(&self) -> Option<DrawingMode> {
        self.drawing_modes.first().copied()
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 700,
            background_color: HexColor::from_rgb(RgbColor::new(0xFF, 0xF8, 0xDC)),
            stroke_color: HexColor::from_rgb(RgbColor::new(0xFF, 0x57, 0x33)),
            stroke_width: 8,
            max_stroke_width: 50,
            drawing_modes: DrawingMode::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_drawing_surface() {
        let config = CanvasConfig::default();
        assert_eq!((config.width, config.height), (1200, 700));
        assert_eq!(config.background_color.as_str(), "#FFF8DC");
        assert_eq!(config.stroke_color.as_str(), "#FF5733");
        assert_eq!(config.default_drawing_mode(), Some(DrawingMode::Freedraw));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_stroke_width_out_of_range() {
        let config = CanvasConfig {
            stroke_width: 51,
            ..CanvasConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CanvasConfig {
            stroke_width: 0,
            ..CanvasConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_canvas_and_modes() {
        let config = CanvasConfig {
            height: 0,
            ..CanvasConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CanvasConfig {
            drawing_modes: Vec::new(),
            ..CanvasConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn serializes_modes_in_lowercase() {
        let json = serde_json::to_string(&DrawingMode::Freedraw).unwrap();
        assert_eq!(json, "\"freedraw\"");
    }
}
