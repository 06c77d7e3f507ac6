use crate::error::{SkillGraphError, SkillGraphResult};

pub use kurbo::{Point, QuadBez, Vec2};

/// Logical authoring space for skill positions (e.g. 800x400 or 600x500 units).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> SkillGraphResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(self) -> SkillGraphResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(SkillGraphError::validation(
                "canvas width/height must be finite",
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SkillGraphError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(())
    }

    /// Fraction of the canvas a logical point sits at, in [0,1] for in-bounds points.
    pub fn fraction_of(self, p: Point) -> Point {
        Point::new(p.x / self.width, p.y / self.height)
    }
}

/// Rendered target dimensions. Markers land at `fraction * viewport`, which makes
/// layout resolution-independent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> SkillGraphResult<Self> {
        let v = Self { width, height };
        v.validate()?;
        Ok(v)
    }

    pub fn validate(self) -> SkillGraphResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(SkillGraphError::layout(
                "viewport width/height must be finite",
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SkillGraphError::layout("viewport width/height must be > 0"));
        }
        Ok(())
    }

    pub fn project(self, fraction: Point) -> Point {
        Point::new(fraction.x * self.width, fraction.y * self.height)
    }
}
