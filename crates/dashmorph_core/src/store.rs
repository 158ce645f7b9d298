//! Line collection - the editable state of an icon
//!
//! A [`LineCollection`] is a value, not a shared cell. Every edit takes the
//! current collection by reference and returns a new one, so a snapshot handed
//! to the compiler (or kept as the reset value) can never be changed behind its
//! back.
//!
//! # Example
//!
//! ```rust
//! use dashmorph_core::{LineCollection, LineState, Point, DragOptions};
//!
//! let lines = LineCollection::seeded();
//! let edited = lines
//!     .add_line()?
//!     .move_point(3, LineState::Close, 1, Point::new(71.0, 33.0), DragOptions::snapped(5.0))?;
//!
//! assert_eq!(lines.len(), 3);
//! assert_eq!(edited.len(), 4);
//! # Ok::<(), dashmorph_core::EditError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EditError;
use crate::geometry::{PathPoint, Point};
use crate::line::{AnchorView, Line, LineState, MIN_ANCHORS};
use crate::palette::line_color;

/// Most lines an icon may have
pub const MAX_LINES: usize = 10;
/// Fewest lines an icon may have
pub const MIN_LINES: usize = 1;
/// Grid step used by the editor when snapping dragged points
pub const DEFAULT_SNAP_STEP: f64 = 5.0;

/// How a dragged point is constrained
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragOptions {
    /// Round to multiples of this step
    pub snap: Option<f64>,
    /// Keep the drag on one axis relative to this origin
    pub axis_lock_origin: Option<Point>,
}

impl DragOptions {
    pub fn snapped(step: f64) -> Self {
        Self {
            snap: Some(step),
            axis_lock_origin: None,
        }
    }

    pub fn with_axis_lock(mut self, origin: Point) -> Self {
        self.axis_lock_origin = Some(origin);
        self
    }

    /// Final position for a drag that reached `target`
    pub fn apply(&self, target: Point) -> Point {
        let mut p = target;
        if let Some(origin) = self.axis_lock_origin {
            p = p.lock_axis(origin);
        }
        if let Some(step) = self.snap {
            p = p.snap(step);
        }
        p.clamp_to_canvas()
    }
}

/// Ordered lines of an icon, between [`MIN_LINES`] and [`MAX_LINES`] long
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Line>", into = "Vec<Line>")]
pub struct LineCollection {
    lines: Vec<Line>,
}

impl LineCollection {
    /// The canonical hamburger → cross icon
    pub fn seeded() -> Self {
        Self {
            lines: vec![
                Line::straight((20.0, 30.0), (80.0, 30.0), (20.0, 20.0), (80.0, 80.0)),
                // Collapses to the center when active
                Line::straight((20.0, 50.0), (80.0, 50.0), (50.0, 50.0), (50.0, 50.0)),
                Line::straight((20.0, 70.0), (80.0, 70.0), (20.0, 80.0), (80.0, 20.0)),
            ],
        }
    }

    pub fn from_lines(lines: Vec<Line>) -> Result<Self, EditError> {
        if lines.len() < MIN_LINES {
            return Err(EditError::MinimumReached { min: MIN_LINES });
        }
        if lines.len() > MAX_LINES {
            return Err(EditError::LimitReached { max: MAX_LINES });
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Whether another line may be added
    pub fn can_add(&self) -> bool {
        self.lines.len() < MAX_LINES
    }

    /// Whether a line may be removed
    pub fn can_remove(&self) -> bool {
        self.lines.len() > MIN_LINES
    }

    /// Display color of the line at `index`
    pub fn color_of(&self, index: usize) -> Option<&str> {
        self.lines
            .get(index)
            .map(|line| line_color(index, line.color.as_deref()))
    }

    /// Back to the seeded icon
    pub fn reset(&self) -> Self {
        debug!("Resetting line collection");
        Self::seeded()
    }

    /// Append a default line
    pub fn add_line(&self) -> Result<Self, EditError> {
        if !self.can_add() {
            return Err(EditError::LimitReached { max: MAX_LINES });
        }
        let mut next = self.clone();
        next.lines.push(Line::default_line());
        debug!("Added line {}", next.lines.len());
        Ok(next)
    }

    pub fn remove_line(&self, index: usize) -> Result<Self, EditError> {
        self.check_line(index)?;
        if !self.can_remove() {
            return Err(EditError::MinimumReached { min: MIN_LINES });
        }
        let mut next = self.clone();
        next.lines.remove(index);
        debug!("Removed line {}", index + 1);
        Ok(next)
    }

    /// Move the line at `from` so it ends up at position `to`
    pub fn move_line(&self, from: usize, to: usize) -> Result<Self, EditError> {
        self.check_line(from)?;
        self.check_line(to)?;
        let mut next = self.clone();
        let line = next.lines.remove(from);
        next.lines.insert(to, line);
        debug!("Moved line {} to position {}", from + 1, to + 1);
        Ok(next)
    }

    /// Reverse the drawing direction of one state
    pub fn reverse_line(&self, index: usize, state: LineState) -> Result<Self, EditError> {
        self.edit_line(index, |line| line.points_mut(state).reverse())
    }

    /// Exchange the menu and close shapes of a line
    pub fn swap_states(&self, index: usize) -> Result<Self, EditError> {
        self.edit_line(index, |line| std::mem::swap(&mut line.menu, &mut line.close))
    }

    pub fn set_color(&self, index: usize, color: Option<String>) -> Result<Self, EditError> {
        self.edit_line(index, |line| line.color = color)
    }

    /// Drag a point to `target`, applying snapping and axis lock
    pub fn move_point(
        &self,
        index: usize,
        state: LineState,
        point: usize,
        target: Point,
        options: DragOptions,
    ) -> Result<Self, EditError> {
        self.check_point(index, state, point)?;
        let to = options.apply(target);
        debug!(
            "Moving line {} {} point {} to ({}, {})",
            index + 1,
            state,
            point,
            to.x,
            to.y
        );
        self.edit_line(index, |line| {
            let p = &mut line.points_mut(state)[point];
            *p = p.with_position(to);
        })
    }

    /// Insert an anchor after the point at `after`
    pub fn insert_point(
        &self,
        index: usize,
        state: LineState,
        after: usize,
        at: Point,
    ) -> Result<Self, EditError> {
        self.check_point(index, state, after)?;
        let at = at.clamp_to_canvas();
        self.edit_line(index, |line| {
            line.points_mut(state)
                .insert(after + 1, PathPoint::anchor(at.x, at.y));
        })
    }

    /// Remove a point; anchors are kept at two or more per state
    pub fn remove_point(
        &self,
        index: usize,
        state: LineState,
        point: usize,
    ) -> Result<Self, EditError> {
        self.check_point(index, state, point)?;
        let points = self.lines[index].points(state);
        if points[point].is_anchor() && AnchorView::new(points).len() <= MIN_ANCHORS {
            return Err(EditError::TooFewAnchors { min: MIN_ANCHORS });
        }
        self.edit_line(index, |line| {
            line.points_mut(state).remove(point);
        })
    }

    fn edit_line(&self, index: usize, f: impl FnOnce(&mut Line)) -> Result<Self, EditError> {
        self.check_line(index)?;
        let mut next = self.clone();
        f(&mut next.lines[index]);
        Ok(next)
    }

    fn check_line(&self, index: usize) -> Result<(), EditError> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(EditError::LineOutOfRange {
                index,
                len: self.lines.len(),
            })
        }
    }

    fn check_point(&self, index: usize, state: LineState, point: usize) -> Result<(), EditError> {
        self.check_line(index)?;
        let len = self.lines[index].points(state).len();
        if point < len {
            Ok(())
        } else {
            Err(EditError::PointOutOfRange { index: point, len })
        }
    }
}

impl Default for LineCollection {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TryFrom<Vec<Line>> for LineCollection {
    type Error = EditError;

    fn try_from(lines: Vec<Line>) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}

impl From<LineCollection> for Vec<Line> {
    fn from(c: LineCollection) -> Self {
        c.lines
    }
}

impl<'a> IntoIterator for &'a LineCollection {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_has_three_lines() {
        let lines = LineCollection::seeded();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines, LineCollection::default());
        assert_eq!(lines.color_of(1), Some("#4ecdc4"));
    }

    #[test]
    fn test_add_line_stops_at_limit() {
        let mut lines = LineCollection::seeded();
        while lines.can_add() {
            lines = lines.add_line().unwrap();
        }
        assert_eq!(lines.len(), MAX_LINES);
        assert_eq!(
            lines.add_line(),
            Err(EditError::LimitReached { max: MAX_LINES })
        );
    }

    #[test]
    fn test_remove_line_keeps_minimum() {
        let lines = LineCollection::from_lines(vec![Line::default_line()]).unwrap();
        assert_eq!(
            lines.remove_line(0),
            Err(EditError::MinimumReached { min: MIN_LINES })
        );

        let seeded = LineCollection::seeded();
        let fewer = seeded.remove_line(1).unwrap();
        assert_eq!(fewer.len(), 2);
        assert_eq!(fewer.get(1), seeded.get(2));
    }

    #[test]
    fn test_edits_do_not_mutate_receiver() {
        let lines = LineCollection::seeded();
        let before = lines.clone();

        let _ = lines.add_line().unwrap();
        let _ = lines.swap_states(0).unwrap();
        let _ = lines
            .move_point(0, LineState::Menu, 0, Point::new(0.0, 0.0), DragOptions::default())
            .unwrap();
        let _ = lines.set_color(2, Some("#000".into())).unwrap();

        assert_eq!(lines, before);
    }

    #[test]
    fn test_move_point_snaps_and_locks() {
        let lines = LineCollection::seeded();
        let options = DragOptions::snapped(5.0).with_axis_lock(Point::new(20.0, 30.0));
        let moved = lines
            .move_point(0, LineState::Menu, 0, Point::new(41.0, 33.0), options)
            .unwrap();

        let p = moved.get(0).unwrap().menu[0];
        assert_eq!((p.x, p.y), (40.0, 30.0));
        assert!(p.is_anchor());
    }

    #[test]
    fn test_move_point_out_of_range() {
        let lines = LineCollection::seeded();
        let err = lines
            .move_point(0, LineState::Close, 5, Point::ZERO, DragOptions::default())
            .unwrap_err();
        assert_eq!(err, EditError::PointOutOfRange { index: 5, len: 2 });

        let err = lines.reverse_line(7, LineState::Menu).unwrap_err();
        assert_eq!(err, EditError::LineOutOfRange { index: 7, len: 3 });
    }

    #[test]
    fn test_insert_and_remove_point() {
        let lines = LineCollection::seeded();
        let added = lines
            .insert_point(0, LineState::Menu, 0, Point::new(50.0, 40.0))
            .unwrap();
        let menu = &added.get(0).unwrap().menu;
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[1].position(), Point::new(50.0, 40.0));

        let removed = added.remove_point(0, LineState::Menu, 1).unwrap();
        assert_eq!(removed, lines);

        assert_eq!(
            lines.remove_point(0, LineState::Menu, 0),
            Err(EditError::TooFewAnchors { min: MIN_ANCHORS })
        );
    }

    #[test]
    fn test_control_points_can_always_be_removed() {
        let mut line = Line::default_line();
        line.menu.insert(1, PathPoint::control(50.0, 40.0));
        let lines = LineCollection::from_lines(vec![line]).unwrap();

        let trimmed = lines.remove_point(0, LineState::Menu, 1).unwrap();
        assert_eq!(trimmed.get(0).unwrap().menu.len(), 2);
    }

    #[test]
    fn test_reverse_and_swap() {
        let lines = LineCollection::seeded();
        let reversed = lines.reverse_line(0, LineState::Close).unwrap();
        let close = &reversed.get(0).unwrap().close;
        assert_eq!(close[0].position(), Point::new(80.0, 80.0));

        let swapped = lines.swap_states(0).unwrap();
        assert_eq!(swapped.get(0).unwrap().menu, lines.get(0).unwrap().close);
    }

    #[test]
    fn test_move_line_reorders() {
        let lines = LineCollection::seeded();
        let moved = lines.move_line(0, 2).unwrap();
        assert_eq!(moved.get(2), lines.get(0));
        assert_eq!(moved.get(0), lines.get(1));
    }

    #[test]
    fn test_deserialize_enforces_bounds() {
        let empty: Result<LineCollection, _> = serde_json::from_str("[]");
        assert!(empty.is_err());

        let one: LineCollection = serde_json::from_str(
            r#"[{"menu": [{"x": 20, "y": 50}, {"x": 80, "y": 50}],
                 "close": [{"x": 50, "y": 50}, {"x": 50, "y": 50}]}]"#,
        )
        .unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one.get(0), Some(&Line::default_line()));
    }

    #[test]
    fn test_toml_round_trip_keeps_controls_and_colors() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Icon {
            lines: LineCollection,
        }

        let lines = LineCollection::seeded()
            .set_color(1, Some("#3a86ff".to_string()))
            .unwrap()
            .insert_point(2, LineState::Menu, 0, Point::new(50.0, 65.0))
            .unwrap();
        let mut edited = lines.into_lines();
        edited[0].close.insert(1, PathPoint::control(40.0, 60.0));
        let icon = Icon {
            lines: LineCollection::from_lines(edited).unwrap(),
        };

        let text = toml::to_string_pretty(&icon).unwrap();
        let loaded: Icon = toml::from_str(&text).unwrap();
        assert_eq!(loaded, icon);
        assert_eq!(loaded.lines.color_of(1), Some("#3a86ff"));
    }

    #[test]
    fn test_toml_points_default_to_anchors() {
        #[derive(Deserialize)]
        struct Icon {
            lines: LineCollection,
        }

        let icon: Icon = toml::from_str(
            r#"
[[lines]]
menu = [{ x = 20, y = 50 }, { x = 80, y = 50 }]
close = [{ x = 50, y = 50 }, { x = 50, y = 50 }]
"#,
        )
        .unwrap();
        assert_eq!(icon.lines.get(0), Some(&Line::default_line()));
    }

    #[test]
    fn test_reset_returns_seed() {
        let lines = LineCollection::seeded().add_line().unwrap().swap_states(0).unwrap();
        assert_eq!(lines.reset(), LineCollection::seeded());
    }
}
