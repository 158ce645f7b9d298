//! SVG path data parsing
//!
//! Uses `svgtypes`' simplifying parser, which already resolves relative
//! coordinates, shorthand curves, horizontal/vertical lines and arcs into
//! absolute move/line/curve segments. Quadratic curves are degree-elevated to
//! cubics so the rest of the crate deals with a single curve type.

use dashmorph_core::Point;
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use crate::error::PathError;
use crate::path::{Path, PathCommand};

/// Parse an SVG `d` attribute into a [`Path`]
pub fn parse_path_data(data: &str) -> Result<Path, PathError> {
    let mut path = Path::new();
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for segment in SimplifyingPathParser::from(data) {
        match segment? {
            SimplePathSegment::MoveTo { x, y } => {
                current = Point::new(x, y);
                subpath_start = current;
                path.push(PathCommand::MoveTo(current));
            }
            SimplePathSegment::LineTo { x, y } => {
                current = Point::new(x, y);
                path.push(PathCommand::LineTo(current));
            }
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                let ctrl = Point::new(x1, y1);
                let end = Point::new(x, y);
                path.push(PathCommand::CubicTo {
                    control1: lerp(current, ctrl, 2.0 / 3.0),
                    control2: lerp(end, ctrl, 2.0 / 3.0),
                    end,
                });
                current = end;
            }
            SimplePathSegment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                current = Point::new(x, y);
                path.push(PathCommand::CubicTo {
                    control1: Point::new(x1, y1),
                    control2: Point::new(x2, y2),
                    end: current,
                });
            }
            SimplePathSegment::ClosePath => {
                path.push(PathCommand::Close);
                current = subpath_start;
            }
        }
    }

    Ok(path)
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}
