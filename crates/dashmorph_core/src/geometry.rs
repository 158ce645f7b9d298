//! Points on the editing canvas
//!
//! All coordinates live in the 0–100 logical square that the editor and the
//! generated SVG share as their `viewBox`. No unit conversion happens anywhere
//! else in the pipeline.

use serde::{Deserialize, Serialize};

/// Side length of the logical canvas
pub const CANVAS_SIZE: f64 = 100.0;

/// A 2D point in canvas units
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Clamp both coordinates into the canvas square
    pub fn clamp_to_canvas(self) -> Self {
        Self::new(self.x.clamp(0.0, CANVAS_SIZE), self.y.clamp(0.0, CANVAS_SIZE))
    }

    /// Round both coordinates to the nearest multiple of `step`
    pub fn snap(self, step: f64) -> Self {
        if step <= 0.0 || !step.is_finite() {
            return self;
        }
        Self::new(
            (self.x / step).round() * step,
            (self.y / step).round() * step,
        )
    }

    /// Constrain movement from `origin` to a single axis.
    ///
    /// The dominant axis of the drag wins; the other coordinate stays at the
    /// origin's value.
    pub fn lock_axis(self, origin: Point) -> Self {
        let dx = (self.x - origin.x).abs();
        let dy = (self.y - origin.y).abs();
        if dx > dy {
            Self::new(self.x, origin.y)
        } else {
            Self::new(origin.x, self.y)
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Role of a point inside a line state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// A vertex of the drawn path
    #[default]
    Anchor,
    /// Reserved for curve authoring; kept in storage, skipped by path building
    Control,
}

/// A point tagged with its kind
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: PointKind,
}

impl PathPoint {
    pub const fn anchor(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::Anchor,
        }
    }

    pub const fn control(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::Control,
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == PointKind::Anchor
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same kind, new position
    pub fn with_position(self, p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            kind: self.kind,
        }
    }
}

impl From<PathPoint> for Point {
    fn from(p: PathPoint) -> Self {
        p.position()
    }
}
