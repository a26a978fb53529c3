use crate::error::ConfigError;
use crate::vector::Vec2;

/// Rectangular arena `[0, width] x [0, height]` with an inner margin
/// agents are kept inside of
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, margin: f32) -> Result<Self, ConfigError> {
        ConfigError::require_positive("width", width)?;
        ConfigError::require_positive("height", height)?;
        ConfigError::require_non_negative("margin", margin)?;
        let max_margin = width.min(height) / 2.0;
        if margin >= max_margin {
            return Err(ConfigError::OutOfRange {
                name: "margin",
                value: margin,
                min: 0.0,
                max: max_margin,
            });
        }
        Ok(Self { width, height, margin })
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.margin, self.margin)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width - self.margin, self.height - self.margin)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `position` is inside the margin on both axes
    #[inline]
    pub fn contains(&self, position: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x).contains(&position.x) && (min.y..=max.y).contains(&position.y)
    }
}
