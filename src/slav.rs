//! The set of lists of active vertices (SLAV).
//!
//! Each vertex of the graph gets a wrapper carrying its propagation
//! state: its neighbours in the current active ring (LAV), the reflex
//! and processed flags, the defining contour borders of its trajectory,
//! and the reflex-split back-index used by vertex-event detection. One
//! shared list of active vertices supports the linear scan of the
//! split-event opposite-edge lookup; the per-wrapper links give O(1)
//! neighbour access.
//!
//! Processed vertices keep their last LAV links: handlers read the
//! neighbours of a seed immediately after processing it, and membership
//! is decided by the active list alone.

use crate::event::EventId;
use crate::halfedge::{HalfedgeId, VertexId};

/// Propagation state of one vertex.
#[derive(Debug, Clone, Default)]
pub struct VertexWrapper {
    prev_in_lav: Option<VertexId>,
    next_in_lav: Option<VertexId>,
    is_reflex: bool,
    is_processed: bool,
    is_excluded: bool,
    border_a: Option<HalfedgeId>,
    border_b: Option<HalfedgeId>,
    border_c: Option<HalfedgeId>,
    reflex_splits: Vec<EventId>,
}

/// Registry of vertex wrappers plus the shared active list.
#[derive(Debug, Clone, Default)]
pub struct Slav {
    wrappers: Vec<VertexWrapper>,
    active: Vec<VertexId>,
}

impl Slav {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the registry to cover vertex ids up to and including `v`.
    pub fn ensure(&mut self, v: VertexId) {
        if self.wrappers.len() <= v.index() {
            self.wrappers.resize_with(v.index() + 1, VertexWrapper::default);
        }
    }

    #[inline]
    fn wrapper(&self, v: VertexId) -> &VertexWrapper {
        &self.wrappers[v.index()]
    }

    #[inline]
    fn wrapper_mut(&mut self, v: VertexId) -> &mut VertexWrapper {
        &mut self.wrappers[v.index()]
    }

    /// Adds `v` to the shared active list.
    pub fn push_active(&mut self, v: VertexId) {
        self.ensure(v);
        self.active.push(v);
    }

    /// Removes `v` from the shared active list.
    pub fn remove_active(&mut self, v: VertexId) {
        if let Some(pos) = self.active.iter().position(|&a| a == v) {
            self.active.swap_remove(pos);
        }
    }

    /// The current active vertices, in no particular order.
    pub fn active(&self) -> &[VertexId] {
        &self.active
    }

    /// Previous neighbour in the LAV ring.
    #[inline]
    pub fn prev_in_lav(&self, v: VertexId) -> Option<VertexId> {
        self.wrapper(v).prev_in_lav
    }

    /// Next neighbour in the LAV ring.
    #[inline]
    pub fn next_in_lav(&self, v: VertexId) -> Option<VertexId> {
        self.wrapper(v).next_in_lav
    }

    /// Sets the previous neighbour in the LAV ring.
    #[inline]
    pub fn set_prev_in_lav(&mut self, v: VertexId, prev: VertexId) {
        self.wrapper_mut(v).prev_in_lav = Some(prev);
    }

    /// Sets the next neighbour in the LAV ring.
    #[inline]
    pub fn set_next_in_lav(&mut self, v: VertexId, next: VertexId) {
        self.wrapper_mut(v).next_in_lav = Some(next);
    }

    /// Whether the interior angle at `v` is 180 degrees or more.
    #[inline]
    pub fn is_reflex(&self, v: VertexId) -> bool {
        self.wrapper(v).is_reflex
    }

    /// Flags `v` as reflex.
    #[inline]
    pub fn set_reflex(&mut self, v: VertexId) {
        self.wrapper_mut(v).is_reflex = true;
    }

    /// Whether `v` has been consumed by an event.
    #[inline]
    pub fn is_processed(&self, v: VertexId) -> bool {
        self.wrapper(v).is_processed
    }

    /// Marks `v` processed and prunes its reflex-split back-index, so
    /// stale entries die with the vertex.
    pub fn mark_processed(&mut self, v: VertexId) {
        let w = self.wrapper_mut(v);
        w.is_processed = true;
        w.reflex_splits.clear();
    }

    /// Whether finalization dropped `v`.
    #[inline]
    pub fn is_excluded(&self, v: VertexId) -> bool {
        self.wrapper(v).is_excluded
    }

    /// Flags `v` as dropped by finalization.
    #[inline]
    pub fn set_excluded(&mut self, v: VertexId) {
        self.wrapper_mut(v).is_excluded = true;
    }

    /// First defining border (the contour edge arriving at `v` in the
    /// offset polygon).
    #[inline]
    pub fn border_a(&self, v: VertexId) -> Option<HalfedgeId> {
        self.wrapper(v).border_a
    }

    /// Second defining border (the contour edge leaving `v`).
    #[inline]
    pub fn border_b(&self, v: VertexId) -> Option<HalfedgeId> {
        self.wrapper(v).border_b
    }

    /// Third defining border, present on skeleton vertices.
    #[inline]
    pub fn border_c(&self, v: VertexId) -> Option<HalfedgeId> {
        self.wrapper(v).border_c
    }

    /// Sets the first defining border.
    #[inline]
    pub fn set_border_a(&mut self, v: VertexId, h: HalfedgeId) {
        self.wrapper_mut(v).border_a = Some(h);
    }

    /// Sets the second defining border.
    #[inline]
    pub fn set_border_b(&mut self, v: VertexId, h: HalfedgeId) {
        self.wrapper_mut(v).border_b = Some(h);
    }

    /// Sets the third defining border.
    #[inline]
    pub fn set_border_c(&mut self, v: VertexId, h: HalfedgeId) {
        self.wrapper_mut(v).border_c = Some(h);
    }

    /// Records a split event seeded at `v` whose opposite border ends at
    /// a reflex contour vertex.
    pub fn add_reflex_split(&mut self, v: VertexId, event: EventId) {
        self.wrapper_mut(v).reflex_splits.push(event);
    }

    /// The recorded reflex splits seeded at `v`.
    pub fn reflex_splits(&self, v: VertexId) -> &[EventId] {
        &self.wrapper(v).reflex_splits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_links() {
        let mut slav = Slav::new();
        let (a, b, c) = (VertexId(0), VertexId(1), VertexId(2));
        for v in [a, b, c] {
            slav.push_active(v);
        }
        slav.set_next_in_lav(a, b);
        slav.set_prev_in_lav(b, a);
        slav.set_next_in_lav(b, c);
        slav.set_prev_in_lav(c, b);

        assert_eq!(slav.next_in_lav(a), Some(b));
        assert_eq!(slav.prev_in_lav(c), Some(b));
        assert_eq!(slav.active().len(), 3);

        slav.remove_active(b);
        assert_eq!(slav.active().len(), 2);
        assert!(!slav.active().contains(&b));
        // Links survive removal from the active list.
        assert_eq!(slav.next_in_lav(b), Some(c));
    }

    #[test]
    fn test_mark_processed_prunes_reflex_splits() {
        let mut slav = Slav::new();
        let v = VertexId(4);
        slav.ensure(v);
        slav.set_reflex(v);
        slav.add_reflex_split(v, EventId(7));
        assert_eq!(slav.reflex_splits(v), &[EventId(7)]);

        slav.mark_processed(v);
        assert!(slav.is_processed(v));
        assert!(slav.reflex_splits(v).is_empty());
        // The reflex flag itself persists.
        assert!(slav.is_reflex(v));
    }
}
