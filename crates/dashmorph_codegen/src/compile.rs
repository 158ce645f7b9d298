//! Transition path compiler
//!
//! Each line becomes one continuous path: the menu polyline, a cubic bridge
//! from the last menu anchor to the first close anchor, then the close
//! polyline. A dash pattern as long as one state's shape, shifted along that
//! path, shows exactly that shape; animating the dash values between the two
//! states makes the stroke slide from one shape into the other.

use dashmorph_core::{Line, LineState, Point};
use dashmorph_path::{format_fixed2, format_number, LyonMeasure, Path, PathCommand, PathMeasure};
use serde::Serialize;
use tracing::{debug, trace};

/// Close shapes shorter than this are hidden instead of drawn as a sliver
pub const COLLAPSED_LENGTH: f64 = 0.1;

/// Active dash array used for collapsed close shapes
pub const HIDDEN_DASH_ARRAY: &str = "0 9999";

/// Fraction of the horizontal distance used for the bridge's control arms
pub const BRIDGE_TENSION: f64 = 0.5;

/// Compiled geometry and dash parameters for one line
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PathData {
    /// Combined `menu → bridge → close` path data
    pub d: String,
    pub total_length: f64,
    pub menu_length: f64,
    pub close_length: f64,
    pub offset_menu: f64,
    pub offset_close: f64,
}

impl PathData {
    /// Result for a line that has no drawable path
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// Whether the close shape is too short to draw
    pub fn close_collapsed(&self) -> bool {
        self.close_length < COLLAPSED_LENGTH
    }

    /// `stroke-dasharray` at rest
    pub fn rest_dash_array(&self) -> String {
        format!(
            "{} {}",
            format_fixed2(self.menu_length),
            format_fixed2(self.total_length)
        )
    }

    /// `stroke-dashoffset` at rest
    pub fn rest_dash_offset(&self) -> String {
        format_number(self.offset_menu)
    }

    /// `stroke-dasharray` in the active state
    pub fn active_dash_array(&self) -> String {
        if self.close_collapsed() {
            HIDDEN_DASH_ARRAY.to_string()
        } else {
            format!(
                "{} {}",
                format_fixed2(self.close_length),
                format_fixed2(self.total_length)
            )
        }
    }

    /// `stroke-dashoffset` in the active state
    pub fn active_dash_offset(&self) -> String {
        format_fixed2(self.offset_close)
    }
}

/// Cubic curve joining the menu shape to the close shape.
///
/// Both control points sit level with their end point, so the curve leaves and
/// enters horizontally whatever the vertical offset between the shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bridge {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl Bridge {
    pub fn between(menu_last: Point, close_first: Point) -> Self {
        let dx = close_first.x - menu_last.x;
        Self {
            from: menu_last,
            ctrl1: Point::new(menu_last.x + dx * BRIDGE_TENSION, menu_last.y),
            ctrl2: Point::new(close_first.x - dx * BRIDGE_TENSION, close_first.y),
            to: close_first,
        }
    }

    /// The curve as a path command continuing from `from`
    pub fn command(&self) -> PathCommand {
        PathCommand::CubicTo {
            control1: self.ctrl1,
            control2: self.ctrl2,
            end: self.to,
        }
    }

    /// The bridge as a standalone path
    pub fn to_path(&self) -> Path {
        Path::from_commands(vec![PathCommand::MoveTo(self.from), self.command()])
    }

    /// Arc length of the bridge
    pub fn length(&self, measure: &dyn PathMeasure) -> f64 {
        measure.cubic_length(self.from, self.ctrl1, self.ctrl2, self.to)
    }
}

/// The combined path of a line and its bridge, before measuring
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionPath {
    pub menu: Path,
    pub bridge: Bridge,
    pub close: Path,
    pub combined: Path,
}

impl TransitionPath {
    /// Build the combined path, or `None` when either state has fewer than
    /// two anchors
    pub fn build(line: &Line) -> Option<Self> {
        let menu_anchors = line.anchors(LineState::Menu);
        let close_anchors = line.anchors(LineState::Close);
        if !menu_anchors.is_drawable() || !close_anchors.is_drawable() {
            return None;
        }

        let bridge = Bridge::between(menu_anchors.last()?, close_anchors.first()?);
        let menu = Path::from_anchor_view(&menu_anchors);
        let close = Path::from_anchor_view(&close_anchors);
        let mut combined = menu.clone();
        combined.push(bridge.command());
        let combined = combined.join(&close);

        Some(Self {
            menu,
            bridge,
            close,
            combined,
        })
    }
}

/// Compiles lines into [`PathData`] using a length measurer
#[derive(Clone, Debug)]
pub struct Compiler<M: PathMeasure = LyonMeasure> {
    measure: M,
}

impl Default for Compiler<LyonMeasure> {
    fn default() -> Self {
        Self::new(LyonMeasure::default())
    }
}

impl<M: PathMeasure> Compiler<M> {
    pub fn new(measure: M) -> Self {
        Self { measure }
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    pub fn compile_line(&self, line: &Line) -> PathData {
        compile_line(line, &self.measure)
    }

    pub fn compile_lines<'a>(&self, lines: impl IntoIterator<Item = &'a Line>) -> Vec<PathData> {
        lines
            .into_iter()
            .map(|line| self.compile_line(line))
            .collect()
    }
}

/// Compile one line.
///
/// A state with fewer than two anchors yields [`PathData::empty`].
pub fn compile_line(line: &Line, measure: &dyn PathMeasure) -> PathData {
    let Some(transition) = TransitionPath::build(line) else {
        debug!("Line has an undrawable state, emitting an empty path");
        return PathData::empty();
    };

    let total_length = measure.measure_path(&transition.combined);
    let menu_length = measure.measure_path(&transition.menu);
    let close_length = measure.measure_path(&transition.close);
    let bridge_length = transition.bridge.length(measure);

    let data = PathData {
        d: transition.combined.to_svg_data(),
        total_length,
        menu_length,
        close_length,
        offset_menu: 0.0,
        offset_close: -(menu_length + bridge_length),
    };

    trace!(
        d = %data.d,
        total = data.total_length,
        menu = data.menu_length,
        close = data.close_length,
        bridge = bridge_length,
        "Compiled line"
    );

    data
}
