//! Axis-aligned collision primitives
//!
//! Movement is resolved one axis at a time, so the candidate offsets fed to
//! the overlap queries are `AxisStep` values rather than free vectors: a step
//! with both components non-zero is unrepresentable by construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A displacement along exactly one axis
///
/// The resolver tests and commits horizontal and vertical movement in
/// sequence; this type is what makes "one axis at a time" a compile-time
/// guarantee instead of an assertion at the query site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisStep {
    /// Horizontal displacement in pixels
    X(f32),
    /// Vertical displacement in pixels
    Y(f32),
}

impl AxisStep {
    /// The step as a free vector (the off-axis component is zero)
    #[inline]
    pub fn as_vec(self) -> Vec2 {
        match self {
            AxisStep::X(dx) => Vec2::new(dx, 0.0),
            AxisStep::Y(dy) => Vec2::new(0.0, dy),
        }
    }

    /// Signed magnitude along the step's own axis
    #[inline]
    pub fn delta(self) -> f32 {
        match self {
            AxisStep::X(dx) => dx,
            AxisStep::Y(dy) => dy,
        }
    }
}

/// A float axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// This rectangle displaced by a single-axis step
    #[inline]
    pub fn translated(self, step: AxisStep) -> Self {
        Self {
            pos: self.pos + step.as_vec(),
            size: self.size,
        }
    }

    /// Positive-area intersection test
    ///
    /// Touching edges do not count as overlap; both axes must overlap with
    /// strictly positive extent.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_positive_area() {
        let a = Rect::new(0.0, 0.0, 64.0, 64.0);
        let b = Rect::new(32.0, 32.0, 64.0, 64.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 64.0, 64.0);
        // Shares the x=64 edge only
        let right = Rect::new(64.0, 0.0, 64.0, 64.0);
        assert!(!a.overlaps(&right));
        // Shares the y=64 edge only
        let below = Rect::new(0.0, 64.0, 64.0, 64.0);
        assert!(!a.overlaps(&below));
        // Corner contact
        let corner = Rect::new(64.0, 64.0, 64.0, 64.0);
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_one_axis_overlap_is_not_enough() {
        let a = Rect::new(0.0, 0.0, 64.0, 64.0);
        // Overlaps on x, disjoint on y
        let b = Rect::new(10.0, 200.0, 64.0, 64.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_translated_moves_one_axis() {
        let r = Rect::new(10.0, 20.0, 36.0, 44.0);

        let rx = r.translated(AxisStep::X(5.0));
        assert_eq!(rx.pos, Vec2::new(15.0, 20.0));
        assert_eq!(rx.size, r.size);

        let ry = r.translated(AxisStep::Y(-3.0));
        assert_eq!(ry.pos, Vec2::new(10.0, 17.0));
    }

    #[test]
    fn test_axis_step_vector() {
        assert_eq!(AxisStep::X(4.0).as_vec(), Vec2::new(4.0, 0.0));
        assert_eq!(AxisStep::Y(-4.0).as_vec(), Vec2::new(0.0, -4.0));
        assert_eq!(AxisStep::Y(-4.0).delta(), -4.0);
    }
}
