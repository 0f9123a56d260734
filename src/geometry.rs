//! 2D points, vectors, and supporting lines for the wavefront engine.
//!
//! Contour edges are represented by their *supporting lines* in inward
//! normal form: the line `n · p = c` with `n` the unit normal pointing
//! into the polygon. Translating the edge inward at unit speed moves the
//! line to `n · p = c + t`, which is the form every event computation
//! works in.

use num_traits::Float;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the length of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit-length copy, or `None` if the vector is too small
    /// to normalize reliably.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::epsilon() {
            Some(Self {
                x: self.x / mag,
                y: self.y / mag,
            })
        } else {
            None
        }
    }

    /// Returns this vector rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 2D position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the position vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2<F>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

/// The supporting line of a contour edge, in inward normal form.
///
/// Stores the unit normal `n` pointing into the polygon and the scalar
/// `c` such that the line is `n · p = c`. The wavefront of the edge at
/// time `t` is the translated line `n · p = c + t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    normal: Vec2<F>,
    offset: F,
}

impl<F: Float> Line2<F> {
    /// Builds the supporting line of the directed edge `p -> q`.
    ///
    /// The inward side is to the left of the direction of travel, so
    /// counter-clockwise outer rings and clockwise hole rings both
    /// propagate into the polygon interior. Returns `None` for a
    /// degenerate (zero-length) edge.
    pub fn from_edge(p: Point2<F>, q: Point2<F>) -> Option<Self> {
        let dir = (q - p).normalize()?;
        let normal = dir.perpendicular();
        Some(Self {
            normal,
            offset: normal.dot(p.to_vec()),
        })
    }

    /// The unit inward normal.
    #[inline]
    pub fn normal(self) -> Vec2<F> {
        self.normal
    }

    /// The line constant `c` in `n · p = c`.
    #[inline]
    pub fn constant(self) -> F {
        self.offset
    }

    /// The direction of travel along the edge.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        -self.normal.perpendicular()
    }

    /// Signed offset distance of a point from the line.
    ///
    /// Zero on the line, positive on the inward side; a point swept over
    /// by the wavefront at time `t` has offset distance exactly `t`.
    #[inline]
    pub fn offset_distance(self, p: Point2<F>) -> F {
        self.normal.dot(p.to_vec()) - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec2_cross() {
        let a: Vec2<f64> = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_vec2_normalize_zero() {
        let v: Vec2<f64> = Vec2::new(0.0, 0.0);
        assert!(v.normalize().is_none());
    }

    #[test]
    fn test_vec2_perpendicular() {
        let v: Vec2<f64> = Vec2::new(1.0, 0.0);
        let p = v.perpendicular();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 1.0);
        assert_eq!(v.dot(p), 0.0);
    }

    #[test]
    fn test_point_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_line_inward_normal_ccw() {
        // Bottom edge of a CCW square: interior is above.
        let line: Line2<f64> =
            Line2::from_edge(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)).unwrap();
        assert_relative_eq!(line.normal().x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(line.normal().y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(line.offset_distance(Point2::new(1.0, 0.5)), 0.5, epsilon = 1e-12);
        assert!(line.offset_distance(Point2::new(1.0, -0.5)) < 0.0);
    }

    #[test]
    fn test_line_inward_normal_cw_hole() {
        // Left edge of a CW hole ring: polygon interior is to its left,
        // at x < 1.
        let line: Line2<f64> =
            Line2::from_edge(Point2::new(1.0, 1.0), Point2::new(1.0, 3.0)).unwrap();
        assert_relative_eq!(line.normal().x, -1.0, epsilon = 1e-12);
        assert!(line.offset_distance(Point2::new(0.5, 2.0)) > 0.0);
    }

    #[test]
    fn test_line_degenerate_edge() {
        let p: Point2<f64> = Point2::new(1.0, 1.0);
        assert!(Line2::from_edge(p, p).is_none());
    }

    #[test]
    fn test_line_direction_roundtrip() {
        let line: Line2<f64> =
            Line2::from_edge(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).unwrap();
        let d = line.direction();
        assert_relative_eq!(d.x, d.y, epsilon = 1e-12);
        assert_relative_eq!(d.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(line.normal().dot(d), 0.0, epsilon = 1e-12);
    }
}
