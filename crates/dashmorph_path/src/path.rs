//! Path representation and construction
//!
//! [`Path`] is a flat list of absolute commands. [`PathBuilder`] provides a
//! fluent API that tracks the cursor, and [`Path::to_svg_data`] renders the
//! commands as an SVG `d` attribute.

use dashmorph_core::{AnchorView, PathPoint, Point};

use crate::format::format_number;

/// A single absolute path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// End point of the command, if it moves the cursor explicitly
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CubicTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        }
    }

    fn write_svg(&self, out: &mut String) {
        match self {
            PathCommand::MoveTo(p) => {
                out.push_str("M ");
                push_point(out, *p);
            }
            PathCommand::LineTo(p) => {
                out.push_str("L ");
                push_point(out, *p);
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                out.push_str("C ");
                push_point(out, *control1);
                out.push(' ');
                push_point(out, *control2);
                out.push(' ');
                push_point(out, *end);
            }
            PathCommand::Close => out.push('Z'),
        }
    }
}

fn push_point(out: &mut String, p: Point) {
    out.push_str(&format_number(p.x));
    out.push(' ');
    out.push_str(&format_number(p.y));
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Straight polyline through the anchor points of `points`.
    ///
    /// Control points are skipped. Fewer than two anchors give an empty path.
    pub fn from_anchors(points: &[PathPoint]) -> Self {
        Self::from_anchor_view(&AnchorView::new(points))
    }

    /// Straight polyline through the anchors of a view
    pub fn from_anchor_view(anchors: &AnchorView<'_>) -> Self {
        if !anchors.is_drawable() {
            return Self::new();
        }
        let mut builder = PathBuilder::new();
        for (i, p) in anchors.iter().enumerate() {
            builder = if i == 0 {
                builder.move_to(p.x, p.y)
            } else {
                builder.line_to(p.x, p.y)
            };
        }
        builder.build()
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First point of the path
    pub fn start(&self) -> Option<Point> {
        self.commands.first().and_then(PathCommand::end_point)
    }

    /// Last explicit point of the path
    pub fn end(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// Append `other`, dropping its leading move-to so the two join
    /// into one continuous subpath
    pub fn join(mut self, other: &Path) -> Self {
        let rest = match other.commands.first() {
            Some(PathCommand::MoveTo(_)) => &other.commands[1..],
            _ => &other.commands[..],
        };
        self.commands.extend_from_slice(rest);
        self
    }

    /// Push a single command
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Render as SVG path data (`M x y L x y C ...`)
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            cmd.write_svg(&mut out);
        }
        out
    }
}

/// SVG path data for the anchors of `points`; empty when not drawable
pub fn build_path_string(points: &[PathPoint]) -> String {
    Path::from_anchors(points).to_svg_data()
}

/// Builder for constructing paths with fluent API
///
/// Maintains the cursor so callers can read back where the path ends.
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.current = Point::new(x, y);
        self.path.push(PathCommand::MoveTo(self.current));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.current = Point::new(x, y);
        self.path.push(PathCommand::LineTo(self.current));
        self
    }

    pub fn cubic_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.current = Point::new(x, y);
        self.path.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end: self.current,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.path.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }

    /// Get the current cursor position
    pub fn current_position(&self) -> Point {
        self.current
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
