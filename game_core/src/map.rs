use glam::DVec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn from_top_left(pos: DVec2, size: DVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The rectangular play field. Origin is the top-left corner, y grows down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f64,
    pub height: f64,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn center(&self) -> DVec2 {
        self.size() * 0.5
    }

    /// Clamp the top edge of something `extent` tall so it stays on the field
    pub fn clamp_top(&self, y: f64, extent: f64) -> f64 {
        y.clamp(0.0, (self.height - extent).max(0.0))
    }
}

impl From<&crate::Config> for Field {
    fn from(config: &crate::Config) -> Self {
        Self::new(config.field_width, config.field_height)
    }
}
