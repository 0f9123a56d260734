//! Geometric predicates and event computations.
//!
//! Every geometric decision the engine makes goes through this oracle, so
//! tolerance handling lives in exactly one place. The oracle holds a
//! single explicit epsilon; nothing else in the crate compares floats.
//!
//! The central computation is [`Oracle::offset_meeting`]: given three
//! supporting lines moving inward at unit speed, find the unique time and
//! point at which all three translated lines pass through one point. Each
//! line contributes the equation `nᵢ · p − t = cᵢ`, which makes a 3×3
//! linear system in `(x, y, t)` solved by Cramer's rule. A singular
//! system means two of the lines are parallel and never meet at a common
//! offset.

use crate::geometry::{Line2, Point2};
use num_traits::Float;
use std::cmp::Ordering;

/// Tolerance-holding predicate oracle.
#[derive(Debug, Clone, Copy)]
pub struct Oracle<F> {
    eps: F,
}

impl<F: Float> Default for Oracle<F> {
    fn default() -> Self {
        Self::new(F::from(1e-9).unwrap())
    }
}

impl<F: Float> Oracle<F> {
    /// Creates an oracle with an explicit tolerance.
    ///
    /// The tolerance is compared against cross products of unit vectors,
    /// offset times, and squared point distances; `1e-9` is a good
    /// default for `f64` inputs of roughly unit scale.
    pub fn new(eps: F) -> Self {
        Self { eps }
    }

    /// The tolerance this oracle applies.
    #[inline]
    pub fn tolerance(&self) -> F {
        self.eps
    }

    /// Tests whether three points are collinear within tolerance.
    #[inline]
    pub fn collinear(&self, p: Point2<F>, q: Point2<F>, r: Point2<F>) -> bool {
        (q - p).cross(r - p).abs() <= self.eps
    }

    /// Tests whether `p`, `q`, `r` make a strict left turn.
    #[inline]
    pub fn left_turn(&self, p: Point2<F>, q: Point2<F>, r: Point2<F>) -> bool {
        (q - p).cross(r - p) > self.eps
    }

    /// Tests whether two points coincide within tolerance.
    #[inline]
    pub fn points_equal(&self, p: Point2<F>, q: Point2<F>) -> bool {
        p.distance_squared(q) <= self.eps * self.eps
    }

    /// The common offset of three supporting lines, if one exists.
    ///
    /// Returns the time `t` and point `p` with `p` at signed offset
    /// distance `t` from all three lines, or `None` when the system is
    /// singular. The time may be negative or zero; event existence is
    /// decided by [`Oracle::event_exists`].
    pub fn offset_meeting(&self, a: Line2<F>, b: Line2<F>, c: Line2<F>) -> Option<(F, Point2<F>)> {
        let (na, nb, nc) = (a.normal(), b.normal(), c.normal());
        let (ca, cb, cc) = (a.constant(), b.constant(), c.constant());

        let neg = -F::one();
        let det = det3(na.x, na.y, neg, nb.x, nb.y, neg, nc.x, nc.y, neg);
        if det.abs() <= self.eps {
            return None;
        }

        let x = det3(ca, na.y, neg, cb, nb.y, neg, cc, nc.y, neg) / det;
        let y = det3(na.x, ca, neg, nb.x, cb, neg, nc.x, cc, neg) / det;
        let t = det3(na.x, na.y, ca, nb.x, nb.y, cb, nc.x, nc.y, cc) / det;

        Some((t, Point2::new(x, y)))
    }

    /// True iff the three lines admit a common offset at strictly
    /// positive time.
    pub fn event_exists(&self, a: Line2<F>, b: Line2<F>, c: Line2<F>) -> bool {
        matches!(self.offset_meeting(a, b, c), Some((t, _)) if t > self.eps)
    }

    /// The time and point of an existing event.
    ///
    /// Returns `None` when no event exists, so callers that already
    /// checked [`Oracle::event_exists`] can still propagate instead of
    /// panicking.
    pub fn event_time_and_point(
        &self,
        a: Line2<F>,
        b: Line2<F>,
        c: Line2<F>,
    ) -> Option<(F, Point2<F>)> {
        self.offset_meeting(a, b, c).filter(|&(t, _)| t > self.eps)
    }

    /// Orders two event times, treating times within tolerance as equal.
    pub fn compare_times(&self, t1: F, t2: F) -> Ordering {
        if (t1 - t2).abs() <= self.eps {
            Ordering::Equal
        } else {
            t1.partial_cmp(&t2).unwrap_or(Ordering::Equal)
        }
    }

    /// Orders two event points by squared distance from a seed point.
    pub fn compare_distance_to_seed(
        &self,
        seed: Point2<F>,
        p1: Point2<F>,
        p2: Point2<F>,
    ) -> Ordering {
        let d1 = seed.distance_squared(p1);
        let d2 = seed.distance_squared(p2);
        if (d1 - d2).abs() <= self.eps {
            Ordering::Equal
        } else {
            d1.partial_cmp(&d2).unwrap_or(Ordering::Equal)
        }
    }

    /// True iff two events happen at the same time and the same point.
    pub fn events_simultaneous(&self, t1: F, p1: Point2<F>, t2: F, p2: Point2<F>) -> bool {
        self.compare_times(t1, t2) == Ordering::Equal && self.points_equal(p1, p2)
    }

    /// True iff an event time is strictly earlier than a seed's time.
    ///
    /// A wavefront born at time `s` cannot take part in an event before
    /// `s`; such candidates are physically impossible and are rejected.
    pub fn event_in_past(&self, t: F, seed_time: F) -> bool {
        t < seed_time - self.eps
    }

    /// Tests whether the event of `(a, b, opp)` falls on the shrunk
    /// extent of the opposite edge `opp`.
    ///
    /// The shrunk extent at the event time is the wedge of the offset
    /// polygon bounded by the supporting lines of `opp`'s current LAV
    /// neighbours `opp_prev` and `opp_next`. At a convex junction the
    /// event point must be at offset distance at least `t` from the
    /// neighbour line; at a reflex junction, at most `t`. The junction
    /// kind is read off the turn between the two edge directions, which
    /// does not change as the lines translate.
    pub fn inside_offset_zone(
        &self,
        a: Line2<F>,
        b: Line2<F>,
        opp: Line2<F>,
        opp_prev: Line2<F>,
        opp_next: Line2<F>,
    ) -> bool {
        let Some((t, p)) = self.event_time_and_point(a, b, opp) else {
            return false;
        };

        let before = opp_prev.offset_distance(p);
        let after = opp_next.offset_distance(p);

        let prev_convex = opp_prev.direction().cross(opp.direction()) >= -self.eps;
        let next_convex = opp.direction().cross(opp_next.direction()) >= -self.eps;

        let prev_ok = if prev_convex {
            before >= t - self.eps
        } else {
            before <= t + self.eps
        };
        let next_ok = if next_convex {
            after >= t - self.eps
        } else {
            after <= t + self.eps
        };

        prev_ok && next_ok
    }
}

/// 3×3 determinant, row major.
#[inline]
fn det3<F: Float>(a: F, b: F, c: F, d: F, e: F, f: F, g: F, h: F, i: F) -> F {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn edge(px: f64, py: f64, qx: f64, qy: f64) -> Line2<f64> {
        Line2::from_edge(Point2::new(px, py), Point2::new(qx, qy)).unwrap()
    }

    #[test]
    fn test_left_turn_and_collinear() {
        let o: Oracle<f64> = Oracle::default();
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert!(o.left_turn(a, b, Point2::new(0.5, 1.0)));
        assert!(!o.left_turn(a, b, Point2::new(0.5, -1.0)));
        assert!(o.collinear(a, b, Point2::new(2.0, 0.0)));
        assert!(!o.collinear(a, b, Point2::new(2.0, 0.1)));
    }

    #[test]
    fn test_offset_meeting_square_corner() {
        // Left, bottom, and right edges of the unit square meet at the
        // center when each has moved 0.5 inward.
        let o: Oracle<f64> = Oracle::default();
        let left = edge(0.0, 1.0, 0.0, 0.0);
        let bottom = edge(0.0, 0.0, 1.0, 0.0);
        let right = edge(1.0, 0.0, 1.0, 1.0);

        let (t, p) = o.event_time_and_point(left, bottom, right).unwrap();
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.5, epsilon = 1e-12);
        assert!(o.event_exists(left, bottom, right));
    }

    #[test]
    fn test_offset_meeting_opposite_parallel() {
        // Bottom and top of a 4x1 rectangle approach each other; with a
        // side edge they meet at the mid height.
        let o: Oracle<f64> = Oracle::default();
        let bottom = edge(0.0, 0.0, 4.0, 0.0);
        let top = edge(4.0, 1.0, 0.0, 1.0);
        let left = edge(0.0, 1.0, 0.0, 0.0);

        let (t, p) = o.event_time_and_point(bottom, top, left).unwrap();
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_event_not_exists_for_diverging_parallels() {
        // Two collinear-direction edges with the same inward side never
        // meet at a common offset.
        let o: Oracle<f64> = Oracle::default();
        let low = edge(0.0, 0.0, 1.0, 0.0);
        let high = edge(0.0, 1.0, 1.0, 1.0);
        let side = edge(0.0, 1.0, 0.0, 0.0);
        assert!(!o.event_exists(low, high, side));
    }

    #[test]
    fn test_event_in_past() {
        let o: Oracle<f64> = Oracle::default();
        assert!(o.event_in_past(0.4, 0.5));
        assert!(!o.event_in_past(0.5, 0.5));
        assert!(!o.event_in_past(0.6, 0.5));
    }

    #[test]
    fn test_compare_distance_to_seed() {
        let o: Oracle<f64> = Oracle::default();
        let seed = Point2::new(0.0, 0.0);
        assert_eq!(
            o.compare_distance_to_seed(seed, Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)),
            Ordering::Less
        );
        assert_eq!(
            o.compare_distance_to_seed(seed, Point2::new(0.0, 2.0), Point2::new(2.0, 0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_inside_offset_zone_accepts_interior_hit() {
        // L-shaped contour: the reflex corner at (1,1) crashes into the
        // bottom edge at (0.5, 0.5).
        let o: Oracle<f64> = Oracle::default();
        let a = edge(2.0, 1.0, 1.0, 1.0);
        let b = edge(1.0, 1.0, 1.0, 2.0);
        let opp = edge(0.0, 0.0, 2.0, 0.0);
        let opp_prev = edge(0.0, 2.0, 0.0, 0.0);
        let opp_next = edge(2.0, 0.0, 2.0, 1.0);
        assert!(o.inside_offset_zone(a, b, opp, opp_prev, opp_next));
    }

    #[test]
    fn test_inside_offset_zone_rejects_slid_off_hit() {
        // Same event, but the opposite edge's zone is bounded by a far
        // neighbour whose offset line has already passed the hit point.
        let o: Oracle<f64> = Oracle::default();
        let a = edge(2.0, 1.0, 1.0, 1.0);
        let b = edge(1.0, 1.0, 1.0, 2.0);
        let opp = edge(0.0, 0.0, 2.0, 0.0);
        // A neighbour line at x = 0.9 (inward pointing +x) sweeps past
        // x = 0.5 well before t = 0.5.
        let opp_prev = edge(0.9, 2.0, 0.9, 0.0);
        let opp_next = edge(2.0, 0.0, 2.0, 1.0);
        assert!(!o.inside_offset_zone(a, b, opp, opp_prev, opp_next));
    }

    #[test]
    fn test_events_simultaneous() {
        let o: Oracle<f64> = Oracle::default();
        let p = Point2::new(1.5, 1.5);
        assert!(o.events_simultaneous(0.5, p, 0.5, Point2::new(1.5, 1.5)));
        assert!(!o.events_simultaneous(0.5, p, 0.6, p));
        assert!(!o.events_simultaneous(0.5, p, 0.5, Point2::new(1.5, 1.6)));
    }

    #[test]
    fn test_oracle_f32() {
        let o: Oracle<f32> = Oracle::new(1e-5);
        let left = edge32(0.0, 1.0, 0.0, 0.0);
        let bottom = edge32(0.0, 0.0, 1.0, 0.0);
        let right = edge32(1.0, 0.0, 1.0, 1.0);
        let (t, _) = o.event_time_and_point(left, bottom, right).unwrap();
        assert!((t - 0.5).abs() < 1e-5);
    }

    fn edge32(px: f32, py: f32, qx: f32, qy: f32) -> Line2<f32> {
        Line2::from_edge(Point2::new(px, py), Point2::new(qx, qy)).unwrap()
    }
}
