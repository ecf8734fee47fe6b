use crate::palette::BLACK;

/// Engine defaults applied when the declarative source supplies no styling
/// of its own.
#[derive(Clone, Copy, Debug)]
pub struct StyleConfig {
    pub stroke_color: palette::Srgba<u8>,
    pub stroke_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: BLACK.into(),
            stroke_width: 1.0,
        }
    }
}
