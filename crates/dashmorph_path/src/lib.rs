//! Dashmorph path geometry
//!
//! Building, formatting, parsing and measuring SVG path data:
//!
//! - [`Path`] / [`PathBuilder`]: absolute move/line/cubic commands
//! - [`build_path_string`]: straight polyline through a state's anchors
//! - [`parse_path_data`]: SVG `d` attribute → [`Path`] (via `svgtypes`)
//! - [`PathMeasure`]: arc length of paths and path data strings
//!
//! # Example
//!
//! ```rust
//! use dashmorph_core::PathPoint;
//! use dashmorph_path::{build_path_string, LyonMeasure, PathMeasure};
//!
//! let d = build_path_string(&[PathPoint::anchor(20.0, 30.0), PathPoint::anchor(80.0, 30.0)]);
//! assert_eq!(d, "M 20 30 L 80 30");
//!
//! let len = LyonMeasure::default().measure_length(&d)?;
//! assert!((len - 60.0).abs() < 0.01);
//! # Ok::<(), dashmorph_path::PathError>(())
//! ```

mod error;
mod format;
mod measure;
mod parse;
mod path;

pub use error::PathError;
pub use format::{format_fixed2, format_number};
pub use measure::{LyonMeasure, PathMeasure, SubdivisionMeasure, DEFAULT_STEPS, DEFAULT_TOLERANCE};
pub use parse::parse_path_data;
pub use path::{build_path_string, Path, PathBuilder, PathCommand};
