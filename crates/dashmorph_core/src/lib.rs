//! Dashmorph Core
//!
//! Data model for two-state line icons:
//!
//! - **Points**: anchor and control points on the 0–100 canvas
//! - **Lines**: one stroke with independent `menu` and `close` point lists
//! - **Line collections**: 1–10 lines with value-returning edit operations
//! - **Output configuration**: toggle method, class names and size
//!
//! # Example
//!
//! ```rust
//! use dashmorph_core::{LineCollection, LineState};
//!
//! let lines = LineCollection::seeded();
//! let close = lines.get(1).unwrap().anchors(LineState::Close);
//!
//! // The middle line collapses to a single spot in the close state
//! assert_eq!(close.first(), close.last());
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod line;
pub mod palette;
pub mod store;

pub use config::{validate_class_name, ClassNameConfig, Method, SizeConfig};
pub use error::{ConfigError, EditError};
pub use geometry::{PathPoint, Point, PointKind, CANVAS_SIZE};
pub use line::{AnchorView, Line, LineState, MIN_ANCHORS};
pub use palette::{line_color, DEFAULT_LINE_COLORS};
pub use store::{DragOptions, LineCollection, DEFAULT_SNAP_STEP, MAX_LINES, MIN_LINES};
