use serde::Deserialize;
use serde::Serialize;

use super::paint::StrokePaint;
use crate::config::StyleConfig;

/// Alternating dash/gap lengths in the engine's logical units; an empty
/// sequence draws a solid line.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DashPattern {
    pub dashes: Vec<f64>,
}

impl DashPattern {
    pub fn solid() -> Self {
        Self::default()
    }

    pub fn is_solid(&self) -> bool {
        self.dashes.is_empty()
    }
}

impl From<Vec<f64>> for DashPattern {
    fn from(dashes: Vec<f64>) -> Self {
        Self { dashes }
    }
}

/// Full stroke description. Width and dash pattern apply uniformly across
/// all spans regardless of the paint mode.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub paint: StrokePaint,
    pub width: f64,
    pub dash_pattern: DashPattern,
}

impl StrokeStyle {
    pub fn from_config(config: &StyleConfig) -> Self {
        Self {
            paint: StrokePaint::Uniform(config.stroke_color),
            width: config.stroke_width,
            dash_pattern: DashPattern::solid(),
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}
