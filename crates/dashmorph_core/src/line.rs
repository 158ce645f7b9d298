//! Two-state lines and their anchor views

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::geometry::{PathPoint, Point};

/// Minimum anchors a state needs to produce a drawable path
pub const MIN_ANCHORS: usize = 2;

/// Which of a line's two point lists is addressed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineState {
    /// Resting hamburger shape
    #[default]
    Menu,
    /// Active (close) shape
    Close,
}

impl LineState {
    /// The state shown as a ghost while this one is edited
    pub fn other(self) -> Self {
        match self {
            LineState::Menu => LineState::Close,
            LineState::Close => LineState::Menu,
        }
    }
}

impl fmt::Display for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineState::Menu => f.write_str("menu"),
            LineState::Close => f.write_str("close"),
        }
    }
}

impl FromStr for LineState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(LineState::Menu),
            "close" => Ok(LineState::Close),
            other => Err(ConfigError::UnknownState(other.to_string())),
        }
    }
}

/// One stroke of the icon, existing in both states
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub menu: Vec<PathPoint>,
    pub close: Vec<PathPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Line {
    pub fn new(menu: Vec<PathPoint>, close: Vec<PathPoint>) -> Self {
        Self {
            menu,
            close,
            color: None,
        }
    }

    /// Two-anchor line from menu `(m0, m1)` to close `(c0, c1)`
    pub fn straight(m0: (f64, f64), m1: (f64, f64), c0: (f64, f64), c1: (f64, f64)) -> Self {
        Self::new(
            vec![PathPoint::anchor(m0.0, m0.1), PathPoint::anchor(m1.0, m1.1)],
            vec![PathPoint::anchor(c0.0, c0.1), PathPoint::anchor(c1.0, c1.1)],
        )
    }

    /// A new line as the editor adds it: horizontal in menu state,
    /// collapsed to the canvas center in close state
    pub fn default_line() -> Self {
        Self::straight((20.0, 50.0), (80.0, 50.0), (50.0, 50.0), (50.0, 50.0))
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn points(&self, state: LineState) -> &[PathPoint] {
        match state {
            LineState::Menu => &self.menu,
            LineState::Close => &self.close,
        }
    }

    pub fn points_mut(&mut self, state: LineState) -> &mut Vec<PathPoint> {
        match state {
            LineState::Menu => &mut self.menu,
            LineState::Close => &mut self.close,
        }
    }

    /// Anchor-only view of one state
    pub fn anchors(&self, state: LineState) -> AnchorView<'_> {
        AnchorView::new(self.points(state))
    }
}

/// Read-only view over the anchor points of a point list.
///
/// Holds the source indices of the anchors so that positions in the view are
/// never confused with positions in the tagged list.
#[derive(Clone, Debug)]
pub struct AnchorView<'a> {
    points: &'a [PathPoint],
    indices: SmallVec<[usize; 8]>,
}

impl<'a> AnchorView<'a> {
    pub fn new(points: &'a [PathPoint]) -> Self {
        let indices = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_anchor())
            .map(|(i, _)| i)
            .collect();
        Self { points, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether the anchors can form a path
    pub fn is_drawable(&self) -> bool {
        self.len() >= MIN_ANCHORS
    }

    pub fn get(&self, i: usize) -> Option<Point> {
        self.indices.get(i).map(|&src| self.points[src].position())
    }

    pub fn first(&self) -> Option<Point> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Point> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Index in the underlying point list of the `i`-th anchor
    pub fn source_index(&self, i: usize) -> Option<usize> {
        self.indices.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.indices.iter().map(|&src| self.points[src].position())
    }
}
