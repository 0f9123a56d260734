//! The event-driven skeleton construction engine.
//!
//! Construction runs in three phases. *Init* wires a bisector pair into
//! the contour at every vertex and seeds the priority queue. *Propagate*
//! drains the queue: each popped event rewires the half-edge graph and
//! the active rings, creates at most two skeleton vertices, and predicts
//! the follow-up events of the emerging wavefronts. *Finalize* merges the
//! twin nodes left behind by splits, erases bisectors discarded by
//! simultaneous-collapse splices, and merges coincident skeleton nodes.
//!
//! Recovery is all or nothing: any engine error or a failed validity
//! check makes [`SkeletonBuilder::construct_skeleton`] return `None`.
//!
//! # Example
//!
//! ```
//! use grassfire::{Point2, SkeletonBuilder};
//!
//! let mut builder = SkeletonBuilder::new();
//! builder
//!     .enter_contour(&[
//!         Point2::new(0.0, 0.0),
//!         Point2::new(1.0, 0.0),
//!         Point2::new(1.0, 1.0),
//!         Point2::new(0.0, 1.0),
//!     ])
//!     .unwrap();
//!
//! let skeleton = builder.construct_skeleton().unwrap();
//! assert_eq!(skeleton.skeleton_vertices().count(), 1);
//! ```

use crate::error::SkeletonError;
use crate::event::{Event, EventId, EventKind, EventQueue};
use crate::geometry::{Line2, Point2};
use crate::halfedge::{FaceKind, HalfedgeId, HalfedgeStore, VertexId, VertexKind};
use crate::oracle::Oracle;
use crate::skeleton::StraightSkeleton;
use crate::slav::Slav;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::HashMap;

type Build<T> = Result<T, SkeletonError>;

/// Builds the straight skeleton of a simple polygon with holes.
pub struct SkeletonBuilder<F: Float> {
    oracle: Oracle<F>,
    store: HalfedgeStore<F>,
    slav: Slav,
    queue: EventQueue<F>,
    contour_halfedges: Vec<HalfedgeId>,
    contour_vertices: Vec<VertexId>,
    lines: HashMap<HalfedgeId, Line2<F>>,
    split_nodes: Vec<(VertexId, VertexId)>,
    dangling_bisectors: Vec<HalfedgeId>,
    steps: usize,
}

impl<F: Float> Default for SkeletonBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> SkeletonBuilder<F> {
    /// Creates a builder with the default oracle tolerance.
    pub fn new() -> Self {
        Self::with_oracle(Oracle::default())
    }

    /// Creates a builder with an explicit oracle.
    pub fn with_oracle(oracle: Oracle<F>) -> Self {
        Self {
            oracle,
            store: HalfedgeStore::new(),
            slav: Slav::new(),
            queue: EventQueue::new(),
            contour_halfedges: Vec::new(),
            contour_vertices: Vec::new(),
            lines: HashMap::new(),
            split_nodes: Vec::new(),
            dangling_bisectors: Vec::new(),
            steps: 0,
        }
    }

    /// Enters one contour ring.
    ///
    /// The outer boundary must be counter-clockwise and each hole
    /// clockwise; call once per ring before construction. Rings with
    /// fewer than three points or with coincident consecutive points are
    /// rejected.
    pub fn enter_contour(&mut self, points: &[Point2<F>]) -> Build<()> {
        let n = points.len();
        if n < 3 {
            return Err(SkeletonError::ContourTooSmall);
        }
        for i in 0..n {
            if self.oracle.points_equal(points[i], points[(i + 1) % n]) {
                return Err(SkeletonError::DegenerateContour);
            }
        }

        let vertices: Vec<VertexId> = points
            .iter()
            .map(|&p| self.store.add_vertex(p, F::zero(), VertexKind::Contour))
            .collect();

        let mut inner = Vec::with_capacity(n);
        let mut outer = Vec::with_capacity(n);
        for i in 0..n {
            let line = Line2::from_edge(points[i], points[(i + 1) % n])
                .ok_or(SkeletonError::DegenerateContour)?;
            let (e, et) = self.store.add_edge_pair(false);
            let face = self.store.add_face(e, FaceKind::Interior);
            self.store.set_face(e, face);
            self.lines.insert(e, line);
            self.contour_halfedges.push(e);
            inner.push(e);
            outer.push(et);
        }
        let outer_face = self.store.add_face(outer[0], FaceKind::Outer);

        for &v in &vertices {
            self.slav.ensure(v);
        }

        for i in 0..n {
            let next = (i + 1) % n;
            let prev = (i + n - 1) % n;
            self.store.set_vertex(inner[i], vertices[next]);
            self.store.set_vertex(outer[i], vertices[i]);
            self.store.set_next(inner[i], inner[next]);
            self.store.set_prev(inner[i], inner[prev]);
            self.store.set_next(outer[i], outer[prev]);
            self.store.set_prev(outer[i], outer[next]);
            self.store.set_face(outer[i], outer_face);
            self.store.set_vertex_halfedge(vertices[next], inner[i]);

            // LAV ring and the two defining borders of each vertex.
            self.slav.set_prev_in_lav(vertices[next], vertices[i]);
            self.slav.set_next_in_lav(vertices[i], vertices[next]);
            self.slav.set_border_a(vertices[next], inner[i]);
            self.slav.set_border_b(vertices[i], inner[i]);
        }

        self.contour_vertices.extend(vertices);
        Ok(())
    }

    /// Runs init, propagate, and finalize, and returns the finished
    /// skeleton, or `None` on any failure.
    pub fn construct_skeleton(mut self) -> Option<StraightSkeleton<F>> {
        if self.run().is_err() {
            return None;
        }
        if !self.store.validate() {
            return None;
        }

        let mut borders = Vec::new();
        for v in self.store.vertex_ids() {
            if borders.len() <= v.index() {
                borders.resize(v.index() + 1, None);
            }
            if self.store.vertex(v).is_skeleton() {
                if let (Some(a), Some(b), Some(c)) = (
                    self.slav.border_a(v),
                    self.slav.border_b(v),
                    self.slav.border_c(v),
                ) {
                    borders[v.index()] = Some([a, b, c]);
                }
            }
        }
        Some(StraightSkeleton::new(self.store, borders))
    }

    /// Number of events processed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn run(&mut self) -> Build<()> {
        if self.contour_vertices.is_empty() {
            return Err(SkeletonError::NoContour);
        }
        self.init()?;
        self.propagate()?;
        self.finalize()
    }

    // ------------------------------------------------------------------
    // small link helpers

    fn next_of(&self, h: HalfedgeId) -> Build<HalfedgeId> {
        self.store.halfedge(h).next.ok_or(SkeletonError::BrokenTopology)
    }

    fn prev_of(&self, h: HalfedgeId) -> Build<HalfedgeId> {
        self.store.halfedge(h).prev.ok_or(SkeletonError::BrokenTopology)
    }

    fn target_of(&self, h: HalfedgeId) -> Build<VertexId> {
        self.store.halfedge(h).vertex.ok_or(SkeletonError::BrokenTopology)
    }

    fn line_of(&self, h: HalfedgeId) -> Build<Line2<F>> {
        self.lines.get(&h).copied().ok_or(SkeletonError::BrokenTopology)
    }

    /// The contour edge whose offset region lies on the left of `h`.
    fn defining_contour_edge(&self, h: HalfedgeId) -> Build<HalfedgeId> {
        let face = self.store.halfedge(h).face.ok_or(SkeletonError::BrokenTopology)?;
        Ok(self.store.face(face).halfedge)
    }

    /// The outgoing bisector on which the wavefront of `v` advances.
    fn primary_bisector(&self, v: VertexId) -> Build<HalfedgeId> {
        let incoming = self.store.vertex(v).halfedge.ok_or(SkeletonError::BrokenTopology)?;
        self.next_of(incoming)
    }

    /// Contour-ring predecessor of a contour halfedge, via the twin
    /// ring, which keeps the original contour order throughout.
    fn contour_prev(&self, e: HalfedgeId) -> Build<HalfedgeId> {
        Ok(self.next_of(e.twin())?.twin())
    }

    /// Contour-ring successor of a contour halfedge.
    fn contour_next(&self, e: HalfedgeId) -> Build<HalfedgeId> {
        Ok(self.prev_of(e.twin())?.twin())
    }

    fn border_a(&self, v: VertexId) -> Build<HalfedgeId> {
        self.slav.border_a(v).ok_or(SkeletonError::BrokenTopology)
    }

    fn border_b(&self, v: VertexId) -> Build<HalfedgeId> {
        self.slav.border_b(v).ok_or(SkeletonError::BrokenTopology)
    }

    // ------------------------------------------------------------------
    // init

    fn init(&mut self) -> Build<()> {
        self.create_contour_bisectors()?;
        let vertices = self.contour_vertices.clone();
        for v in vertices {
            if !self.slav.is_processed(v) {
                self.update_pq(v)?;
            }
        }
        Ok(())
    }

    fn create_contour_bisectors(&mut self) -> Build<()> {
        let vertices = self.contour_vertices.clone();
        for v in vertices {
            self.slav.push_active(v);

            let prev = self.slav.prev_in_lav(v).ok_or(SkeletonError::BrokenTopology)?;
            let next = self.slav.next_in_lav(v).ok_or(SkeletonError::BrokenTopology)?;
            let p = self.store.vertex(prev).point;
            let q = self.store.vertex(v).point;
            let r = self.store.vertex(next).point;
            if self.oracle.collinear(p, q, r) || !self.oracle.left_turn(p, q, r) {
                self.slav.set_reflex(v);
            }

            let e_in = self.border_a(v)?;
            let e_out = self.border_b(v)?;
            let (ob, ib) = self.store.add_edge_pair(true);
            let f_in = self.store.halfedge(e_in).face.ok_or(SkeletonError::BrokenTopology)?;
            let f_out = self.store.halfedge(e_out).face.ok_or(SkeletonError::BrokenTopology)?;
            self.store.set_face(ob, f_in);
            self.store.set_face(ib, f_out);
            self.store.set_vertex(ib, v);

            self.store.set_next(e_in, ob);
            self.store.set_prev(ob, e_in);
            self.store.set_prev(e_out, ib);
            self.store.set_next(ib, e_out);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // event detection

    /// The edge event of two LAV-adjacent vertices, if one exists.
    ///
    /// The three defining contour edges are the left vertex's pair plus
    /// whichever of the right vertex's pair is not shared. Candidates in
    /// the past of a skeleton seed are physically impossible and are
    /// rejected.
    fn find_edge_event(&self, l: VertexId, r: VertexId) -> Build<Option<Event<F>>> {
        let al = self.border_a(l)?;
        let ar = self.border_b(l)?;
        let bl = self.border_a(r)?;
        let br = self.border_b(r)?;
        let c = if bl == al || bl == ar { br } else { bl };
        if al == ar || ar == c || al == c {
            return Ok(None);
        }

        let (la, lb, lc) = (self.line_of(al)?, self.line_of(ar)?, self.line_of(c)?);
        let Some((time, point)) = self.oracle.event_time_and_point(la, lb, lc) else {
            return Ok(None);
        };
        if self.store.vertex(l).is_skeleton()
            && self.oracle.event_in_past(time, self.store.vertex(l).time)
        {
            return Ok(None);
        }
        if self.store.vertex(r).is_skeleton()
            && self.oracle.event_in_past(time, self.store.vertex(r).time)
        {
            return Ok(None);
        }

        Ok(Some(Event {
            kind: EventKind::Edge {
                borders: [al, ar, c],
                seeds: (l, r),
            },
            time,
            point,
            excluded: false,
        }))
    }

    /// Tests the reflex wavefront of `n` against every contour edge.
    ///
    /// The wavefront cannot split its own borders or their contour
    /// neighbours; those must be excluded from the search, not merely
    /// for speed. Split events against an opposite edge ending at a
    /// reflex contour vertex are recorded in the seed's back-index for
    /// vertex-event detection.
    fn collect_split_events(&mut self, n: VertexId) -> Build<()> {
        let lb = self.border_a(n)?;
        let rb = self.border_b(n)?;
        let excluded = [
            lb,
            rb,
            self.contour_prev(lb)?,
            self.contour_next(lb)?,
            self.contour_prev(rb)?,
            self.contour_next(rb)?,
        ];

        let candidates: Vec<HalfedgeId> = self
            .contour_halfedges
            .iter()
            .copied()
            .filter(|e| !excluded.contains(e))
            .collect();

        let seed_is_skeleton = self.store.vertex(n).is_skeleton();
        let seed_time = self.store.vertex(n).time;
        let (la, lr) = (self.line_of(lb)?, self.line_of(rb)?);

        for opp in candidates {
            let lo = self.line_of(opp)?;
            let Some((time, point)) = self.oracle.event_time_and_point(la, lr, lo) else {
                continue;
            };
            if seed_is_skeleton && self.oracle.event_in_past(time, seed_time) {
                continue;
            }

            let id = self.queue.insert(Event {
                kind: EventKind::Split {
                    borders: [lb, rb],
                    opposite: opp,
                    seed: n,
                },
                time,
                point,
                excluded: false,
            });
            let opp_target = self.target_of(opp)?;
            if self.slav.is_reflex(opp_target) {
                self.slav.add_reflex_split(n, id);
            }
        }
        Ok(())
    }

    /// Searches for a split event simultaneous with the popped one whose
    /// combination makes a vertex event.
    ///
    /// Scans the reflex-split back-indices of the reflex endpoints of
    /// the popped event's opposite border. On a simultaneous match both
    /// source events are excluded; the four-way concurrence is then
    /// confirmed with two triple checks before the vertex event is
    /// produced.
    fn find_vertex_event(&mut self, eid: EventId) -> Build<Option<EventId>> {
        let ev = self.queue.event(eid);
        let (time, point) = (ev.time, ev.point);
        let EventKind::Split {
            borders, opposite, seed,
        } = ev.kind
        else {
            return Err(SkeletonError::BrokenTopology);
        };
        let e0_borders = [borders[0], borders[1], opposite];

        let endpoints = [self.target_of(opposite)?, self.target_of(opposite.twin())?];
        for v in endpoints {
            if !self.slav.is_reflex(v) {
                continue;
            }
            let splits: Vec<EventId> = self.slav.reflex_splits(v).to_vec();
            for other in splits {
                if other == eid {
                    continue;
                }
                let candidate = self.queue.event(other);
                if candidate.excluded
                    || !self
                        .oracle
                        .events_simultaneous(time, point, candidate.time, candidate.point)
                {
                    continue;
                }
                let EventKind::Split {
                    borders: cb,
                    opposite: co,
                    seed: cs,
                } = candidate.kind
                else {
                    return Err(SkeletonError::BrokenTopology);
                };

                self.queue.exclude(eid);
                self.queue.exclude(other);

                let e1_borders = [cb[0], cb[1], co];
                let Some((d1, d2, q1, q2)) = sort_two_distinct_two_equal(e0_borders, e1_borders)
                else {
                    continue;
                };
                if self.oracle.event_exists(
                    self.line_of(d1)?,
                    self.line_of(d2)?,
                    self.line_of(q1)?,
                ) && self.oracle.event_exists(
                    self.line_of(q1)?,
                    self.line_of(q2)?,
                    self.line_of(d1)?,
                ) {
                    let id = self.queue.register(Event {
                        kind: EventKind::Vertex {
                            distinct: [d1, d2],
                            equal: [q1, q2],
                            seeds: (seed, cs),
                        },
                        time,
                        point,
                        excluded: false,
                    });
                    return Ok(Some(id));
                }
            }
        }
        Ok(None)
    }

    // ------------------------------------------------------------------
    // coincident bisectors

    /// True iff two bisectors carry the same unordered pair of defining
    /// contour edges.
    fn bisectors_coincident(&self, a: HalfedgeId, b: HalfedgeId) -> Build<bool> {
        let a_l = self.defining_contour_edge(a)?;
        let a_r = self.defining_contour_edge(a.twin())?;
        let b_l = self.defining_contour_edge(b)?;
        let b_r = self.defining_contour_edge(b.twin())?;
        Ok((a_l == b_l && a_r == b_r) || (a_l == b_r && a_r == b_l))
    }

    /// Splices two vertices whose bisectors collapse onto one line.
    ///
    /// Both vertices are consumed on the spot and the discarded outgoing
    /// bisector is queued for erasure in finalization. This must happen
    /// before any events are predicted for the pair: the edge-event
    /// computation cannot tell the two collapsing wavefronts apart.
    fn handle_simultaneous_edge_event(&mut self, a: VertexId, b: VertexId) -> Build<()> {
        let oa = self.primary_bisector(a)?;
        let ob = self.primary_bisector(b)?;
        let ia = oa.twin();
        let ib = ob.twin();

        self.slav.mark_processed(a);
        self.slav.mark_processed(b);
        self.slav.remove_active(a);
        self.slav.remove_active(b);

        let oa_prev = self.prev_of(oa)?;
        let ia_next = self.next_of(ia)?;

        self.store.set_next(ob, ia_next);
        self.store.set_prev(ia_next, ob);
        self.store.set_prev(ib, oa_prev);
        self.store.set_next(oa_prev, ib);
        self.store.set_vertex(ob, a);

        self.dangling_bisectors.push(oa);

        // The discarded pair may still be the incident halfedge of a
        // split-node twin; repoint those vertices at the survivors.
        if let Some(v) = self.store.halfedge(oa).vertex {
            if v != a && v != b {
                self.store.set_vertex_halfedge(v, ib);
            }
        }
        if let Some(v) = self.store.halfedge(ia).vertex {
            if v != a && v != b {
                self.store.set_vertex_halfedge(v, ob);
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // event prediction per vertex

    fn update_pq(&mut self, n: VertexId) -> Build<()> {
        let prev = self.slav.prev_in_lav(n).ok_or(SkeletonError::BrokenTopology)?;
        let next = self.slav.next_in_lav(n).ok_or(SkeletonError::BrokenTopology)?;

        let bisector = self.primary_bisector(n)?;
        let bisector_prev = self.primary_bisector(prev)?;
        let bisector_next = self.primary_bisector(next)?;

        if self.bisectors_coincident(bisector, bisector_prev)? {
            self.handle_simultaneous_edge_event(n, prev)
        } else if self.bisectors_coincident(bisector, bisector_next)? {
            self.handle_simultaneous_edge_event(n, next)
        } else {
            self.collect_new_events(n)
        }
    }

    /// Predicts the events of the wavefront emerging from `n`.
    ///
    /// Both adjacent edge-event candidates stay in the queue even though
    /// only one can happen; the loser dies as stale when popped. The one
    /// exception is a time tie, where heap order would decide: the
    /// candidate whose point is farther from the seed is dropped at
    /// enqueue time.
    fn collect_new_events(&mut self, n: VertexId) -> Build<()> {
        if self.slav.is_reflex(n) {
            self.collect_split_events(n)?;
        }

        let prev = self.slav.prev_in_lav(n).ok_or(SkeletonError::BrokenTopology)?;
        let next = self.slav.next_in_lav(n).ok_or(SkeletonError::BrokenTopology)?;
        let left = self.find_edge_event(prev, n)?;
        let right = self.find_edge_event(n, next)?;

        match (left, right) {
            (Some(l), Some(r)) => {
                if self.oracle.compare_times(l.time, r.time) == Ordering::Equal {
                    let seed = self.store.vertex(n).point;
                    let survivor = if self.oracle.compare_distance_to_seed(seed, l.point, r.point)
                        == Ordering::Greater
                    {
                        r
                    } else {
                        l
                    };
                    self.queue.insert(survivor);
                } else {
                    self.queue.insert(l);
                    self.queue.insert(r);
                }
            }
            (Some(l), None) => {
                self.queue.insert(l);
            }
            (None, Some(r)) => {
                self.queue.insert(r);
            }
            (None, None) => {}
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // event handlers

    /// Reads the three defining borders of a skeleton node off the
    /// half-edge topology just wired around it.
    fn assign_skeleton_borders(&mut self, node: VertexId) -> Build<()> {
        let h = self.store.vertex(node).halfedge.ok_or(SkeletonError::BrokenTopology)?;
        let a = self.defining_contour_edge(h)?;
        let hb = self.prev_of(h.twin())?;
        let b = self.defining_contour_edge(hb.twin())?;
        let c = self.defining_contour_edge(hb)?;
        self.slav.set_border_a(node, a);
        self.slav.set_border_b(node, b);
        self.slav.set_border_c(node, c);
        Ok(())
    }

    fn handle_edge_event(&mut self, eid: EventId) -> Build<()> {
        let ev = self.queue.event(eid);
        let (time, point) = (ev.time, ev.point);
        let EventKind::Edge { seeds: (l_seed, r_seed), .. } = ev.kind else {
            return Err(SkeletonError::BrokenTopology);
        };

        let node = self.store.add_vertex(point, time, VertexKind::Skeleton);
        self.slav.push_active(node);

        let lob = self.primary_bisector(l_seed)?;
        let rob = self.primary_bisector(r_seed)?;
        let lib = lob.twin();
        let rib = rob.twin();

        self.store.set_vertex_halfedge(node, lob);
        self.store.set_vertex(lob, node);
        self.store.set_vertex(rob, node);
        self.store.set_prev(lib, rob);
        self.store.set_next(rob, lib);

        self.slav.mark_processed(l_seed);
        self.slav.mark_processed(r_seed);
        self.slav.remove_active(l_seed);
        self.slav.remove_active(r_seed);

        let l_prev = self.slav.prev_in_lav(l_seed).ok_or(SkeletonError::BrokenTopology)?;
        let r_next = self.slav.next_in_lav(r_seed).ok_or(SkeletonError::BrokenTopology)?;
        self.slav.set_prev_in_lav(node, l_prev);
        self.slav.set_next_in_lav(l_prev, node);
        self.slav.set_next_in_lav(node, r_next);
        self.slav.set_prev_in_lav(r_next, node);

        if self.store.halfedge(lob).next.is_none() && self.store.halfedge(rib).prev.is_none() {
            let (no, ni) = self.store.add_edge_pair(true);
            self.store.set_prev(rib, ni);
            self.store.set_next(ni, rib);
            let f_out = self.store.halfedge(lob).face.ok_or(SkeletonError::BrokenTopology)?;
            let f_in = self.store.halfedge(rib).face.ok_or(SkeletonError::BrokenTopology)?;
            self.store.set_face(no, f_out);
            self.store.set_face(ni, f_in);
            self.store.set_vertex(ni, node);
            self.store.set_next(lob, no);
            self.store.set_prev(no, lob);

            self.assign_skeleton_borders(node)?;
            self.update_pq(node)?;
        } else {
            // A second event landed on the same nascent node; its onward
            // wavefront already exists and must not be predicted twice.
            self.assign_skeleton_borders(node)?;
        }
        Ok(())
    }

    /// Finds the LAV vertex whose incoming offset edge is the split's
    /// opposite border and whose offset zone contains the event.
    ///
    /// Returns `None` when the opposite edge vanished or the event slid
    /// off its shrunk extent; the split is then stale.
    fn lookup_on_slav(&self, eid: EventId) -> Build<Option<VertexId>> {
        let ev = self.queue.event(eid);
        let EventKind::Split { borders, opposite, .. } = ev.kind else {
            return Err(SkeletonError::BrokenTopology);
        };
        let (la, lb) = (self.line_of(borders[0])?, self.line_of(borders[1])?);
        let lo = self.line_of(opposite)?;

        for &v in self.slav.active() {
            if self.slav.prev_in_lav(v).is_none() || self.slav.next_in_lav(v).is_none() {
                continue;
            }
            if self.slav.border_a(v) != Some(opposite) {
                continue;
            }
            let prev = self.slav.prev_in_lav(v).ok_or(SkeletonError::BrokenTopology)?;
            let prev_border = self.border_a(prev)?;
            let next_border = self.border_b(v)?;
            if self.oracle.inside_offset_zone(
                la,
                lb,
                lo,
                self.line_of(prev_border)?,
                self.line_of(next_border)?,
            ) {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }

    fn handle_potential_split_event(&mut self, eid: EventId) -> Build<()> {
        let Some(opp_r) = self.lookup_on_slav(eid)? else {
            return Ok(());
        };
        match self.find_vertex_event(eid)? {
            Some(vertex_event) => self.handle_vertex_event(vertex_event),
            None => self.handle_split_event(eid, opp_r),
        }
    }

    fn handle_split_event(&mut self, eid: EventId, opp_r: VertexId) -> Build<()> {
        let ev = self.queue.event(eid);
        let (time, point) = (ev.time, ev.point);
        let EventKind::Split { opposite, seed, .. } = ev.kind else {
            return Err(SkeletonError::BrokenTopology);
        };

        let opp_l = self.slav.prev_in_lav(opp_r).ok_or(SkeletonError::BrokenTopology)?;

        let node_a = self.store.add_vertex(point, time, VertexKind::Skeleton);
        let node_b = self.store.add_vertex(point, time, VertexKind::Skeleton);
        self.slav.push_active(node_a);
        self.slav.push_active(node_b);

        let xo = self.primary_bisector(seed)?;
        let xi = xo.twin();
        self.store.set_vertex_halfedge(node_a, xo);
        self.store.set_vertex(xo, node_a);

        self.slav.mark_processed(seed);
        self.slav.remove_active(seed);

        // The ring containing the seed splits in two: one through the
        // opposite edge's right vertex, one through its left.
        let prev = self.slav.prev_in_lav(seed).ok_or(SkeletonError::BrokenTopology)?;
        let next = self.slav.next_in_lav(seed).ok_or(SkeletonError::BrokenTopology)?;
        self.slav.set_next_in_lav(prev, node_a);
        self.slav.set_prev_in_lav(node_a, prev);
        self.slav.set_next_in_lav(node_a, opp_r);
        self.slav.set_prev_in_lav(opp_r, node_a);
        self.slav.set_next_in_lav(opp_l, node_b);
        self.slav.set_prev_in_lav(node_b, opp_l);
        self.slav.set_next_in_lav(node_b, next);
        self.slav.set_prev_in_lav(next, node_b);

        self.split_nodes.push((node_a, node_b));

        let (no_l, ni_l) = self.store.add_edge_pair(true);
        let (no_r, ni_r) = self.store.add_edge_pair(true);

        self.store.set_vertex_halfedge(node_b, ni_l);

        let f_xo = self.store.halfedge(xo).face.ok_or(SkeletonError::BrokenTopology)?;
        let f_xi = self.store.halfedge(xi).face.ok_or(SkeletonError::BrokenTopology)?;
        let f_opp = self.store.halfedge(opposite).face.ok_or(SkeletonError::BrokenTopology)?;
        self.store.set_face(no_l, f_xo);
        self.store.set_face(ni_l, f_opp);
        self.store.set_face(no_r, f_opp);
        self.store.set_face(ni_r, f_xi);

        self.store.set_vertex(ni_l, node_b);
        self.store.set_vertex(ni_r, node_b);

        self.store.set_next(xo, no_l);
        self.store.set_prev(no_l, xo);
        self.store.set_prev(xi, ni_r);
        self.store.set_next(ni_r, xi);
        self.store.set_next(ni_l, no_r);
        self.store.set_prev(no_r, ni_l);

        self.assign_skeleton_borders(node_a)?;
        self.assign_skeleton_borders(node_b)?;

        self.update_pq(node_a)?;
        self.update_pq(node_b)?;
        Ok(())
    }

    /// Flags a vertex-event node reflex when the contour corner behind
    /// its new border pair turns right or is straight.
    fn setup_vertex_event_node(
        &mut self,
        node: VertexId,
        border_a: HalfedgeId,
        border_b: HalfedgeId,
    ) -> Build<bool> {
        let p = self.store.vertex(self.target_of(border_a.twin())?).point;
        let q = self.store.vertex(self.target_of(self.prev_of(border_a.twin())?)?).point;
        let r = self.store.vertex(self.target_of(self.prev_of(border_b.twin())?)?).point;

        if self.oracle.collinear(p, q, r) || !self.oracle.left_turn(p, q, r) {
            self.slav.set_reflex(node);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn handle_vertex_event(&mut self, eid: EventId) -> Build<()> {
        let ev = self.queue.event(eid);
        let (time, point) = (ev.time, ev.point);
        let EventKind::Vertex { seeds: (l_seed, r_seed), .. } = ev.kind else {
            return Err(SkeletonError::BrokenTopology);
        };

        let node_l = self.store.add_vertex(point, time, VertexKind::Skeleton);
        let node_r = self.store.add_vertex(point, time, VertexKind::Skeleton);
        self.slav.push_active(node_l);
        self.slav.push_active(node_r);

        let slo = self.primary_bisector(l_seed)?;
        let sro = self.primary_bisector(r_seed)?;
        let sli = slo.twin();
        let sri = sro.twin();

        self.store.set_vertex(slo, node_l);
        self.store.set_vertex(sro, node_r);

        self.slav.mark_processed(l_seed);
        self.slav.mark_processed(r_seed);
        self.slav.remove_active(l_seed);
        self.slav.remove_active(r_seed);

        // The two rings recombine crosswise through the new nodes.
        let l_prev = self.slav.prev_in_lav(l_seed).ok_or(SkeletonError::BrokenTopology)?;
        let l_next = self.slav.next_in_lav(l_seed).ok_or(SkeletonError::BrokenTopology)?;
        let r_prev = self.slav.prev_in_lav(r_seed).ok_or(SkeletonError::BrokenTopology)?;
        let r_next = self.slav.next_in_lav(r_seed).ok_or(SkeletonError::BrokenTopology)?;
        self.slav.set_prev_in_lav(node_l, l_prev);
        self.slav.set_next_in_lav(l_prev, node_l);
        self.slav.set_next_in_lav(node_l, r_next);
        self.slav.set_prev_in_lav(r_next, node_l);
        self.slav.set_prev_in_lav(node_r, r_prev);
        self.slav.set_next_in_lav(r_prev, node_r);
        self.slav.set_next_in_lav(node_r, l_next);
        self.slav.set_prev_in_lav(l_next, node_r);

        self.split_nodes.push((node_l, node_r));

        let (n_lo, n_li) = self.store.add_edge_pair(true);
        let (n_ro, n_ri) = self.store.add_edge_pair(true);

        let f_slo = self.store.halfedge(slo).face.ok_or(SkeletonError::BrokenTopology)?;
        let f_sli = self.store.halfedge(sli).face.ok_or(SkeletonError::BrokenTopology)?;
        let f_sro = self.store.halfedge(sro).face.ok_or(SkeletonError::BrokenTopology)?;
        let f_sri = self.store.halfedge(sri).face.ok_or(SkeletonError::BrokenTopology)?;
        self.store.set_face(n_lo, f_slo);
        self.store.set_face(n_li, f_sri);
        self.store.set_face(n_ro, f_sro);
        self.store.set_face(n_ri, f_sli);

        self.store.set_vertex(n_li, node_l);
        self.store.set_vertex(n_ri, node_r);

        self.store.set_next(slo, n_lo);
        self.store.set_prev(n_lo, slo);
        self.store.set_prev(sli, n_ri);
        self.store.set_next(n_ri, sli);
        self.store.set_prev(sri, n_li);
        self.store.set_next(n_li, sri);
        self.store.set_next(sro, n_ro);
        self.store.set_prev(n_ro, sro);

        self.store.set_vertex_halfedge(node_l, slo);
        self.store.set_vertex_halfedge(node_r, sro);

        let mut node_borders = [(node_l, HalfedgeId(0), HalfedgeId(0)); 2];
        for (slot, node) in [(0usize, node_l), (1, node_r)] {
            let h = self.store.vertex(node).halfedge.ok_or(SkeletonError::BrokenTopology)?;
            let a = self.defining_contour_edge(h)?;
            let b = self.defining_contour_edge(self.next_of(h)?.twin())?;
            let c = self.defining_contour_edge(self.prev_of(h.twin())?)?;
            self.slav.set_border_a(node, a);
            self.slav.set_border_b(node, b);
            self.slav.set_border_c(node, c);
            node_borders[slot] = (node, a, b);
        }

        let (_, la, lb) = node_borders[0];
        let (_, ra, rb) = node_borders[1];
        let left_reflex = self.setup_vertex_event_node(node_l, la, lb)?;
        if !left_reflex {
            self.setup_vertex_event_node(node_r, ra, rb)?;
        }

        self.update_pq(node_l)?;
        self.update_pq(node_r)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // propagation

    fn event_seed_processed(&self, eid: EventId) -> bool {
        match self.queue.event(eid).kind {
            EventKind::Edge { seeds: (l, r), .. } | EventKind::Vertex { seeds: (l, r), .. } => {
                self.slav.is_processed(l) || self.slav.is_processed(r)
            }
            EventKind::Split { seed, .. } => self.slav.is_processed(seed),
        }
    }

    /// Recomputes the event's time and point from its borders at pop
    /// time. Returns false when no meeting exists anymore.
    fn refresh_event(&mut self, eid: EventId) -> Build<bool> {
        let kind = self.queue.event(eid).kind;
        let triple = match kind {
            EventKind::Edge { borders, .. } => Some((borders[0], borders[1], borders[2])),
            EventKind::Split { borders, opposite, .. } => Some((borders[0], borders[1], opposite)),
            EventKind::Vertex { .. } => None,
        };
        let Some((a, b, c)) = triple else {
            return Ok(true);
        };
        let (la, lb, lc) = (self.line_of(a)?, self.line_of(b)?, self.line_of(c)?);
        match self.oracle.event_time_and_point(la, lb, lc) {
            Some((time, point)) => {
                let ev = self.queue.event_mut(eid);
                ev.time = time;
                ev.point = point;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn propagate(&mut self) -> Build<()> {
        while let Some(eid) = self.queue.pop() {
            if self.queue.event(eid).excluded || self.event_seed_processed(eid) {
                continue;
            }
            if !self.refresh_event(eid)? {
                continue;
            }
            match self.queue.event(eid).kind {
                EventKind::Edge { .. } => self.handle_edge_event(eid)?,
                EventKind::Split { .. } => self.handle_potential_split_event(eid)?,
                // Vertex events are dispatched when found, never queued.
                EventKind::Vertex { .. } => {}
            }
            self.steps += 1;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // finalization

    fn finalize(&mut self) -> Build<()> {
        let pairs = std::mem::take(&mut self.split_nodes);
        for (l, r) in pairs {
            self.merge_split_nodes(l, r)?;
        }
        let dangling = std::mem::take(&mut self.dangling_bisectors);
        for h in dangling {
            self.store.erase_edge_pair(h);
        }
        self.merge_coincident_nodes()
    }

    /// Retargets the local fan of a split-node pair onto the left node
    /// and erases the right one.
    fn merge_split_nodes(&mut self, l: VertexId, r: VertexId) -> Build<()> {
        let il1 = self.primary_bisector(l)?.twin();
        let ir1 = self.primary_bisector(r)?.twin();
        let il2 = self.next_of(il1)?.twin();
        let ir2 = self.next_of(ir1)?.twin();

        for h in [il1, ir1, il2, ir2] {
            if self.store.halfedge(h).vertex == Some(r) {
                self.store.set_vertex(h, l);
            }
        }

        self.slav.set_excluded(r);
        self.store.erase_vertex(r);
        Ok(())
    }

    /// Merges pairs of coincident skeleton nodes joined by a halfedge.
    fn merge_coincident_nodes(&mut self) -> Build<()> {
        let ids: Vec<VertexId> = self
            .store
            .vertex_ids()
            .filter(|&v| self.store.vertex(v).is_skeleton())
            .collect();

        let mut seen: std::collections::HashSet<(usize, usize)> = std::collections::HashSet::new();
        let mut edges_to_remove = Vec::new();
        let mut vertices_to_remove = Vec::new();

        for &v0 in &ids {
            if !self.store.vertex_alive(v0) || self.slav.is_excluded(v0) {
                continue;
            }
            for &v1 in &ids {
                if v0 == v1 || !self.store.vertex_alive(v1) || self.slav.is_excluded(v1) {
                    continue;
                }
                let key = (v0.index().min(v1.index()), v0.index().max(v1.index()));
                if seen.contains(&key) {
                    continue;
                }
                let p0 = self.store.vertex(v0).point;
                let p1 = self.store.vertex(v1).point;
                if self.oracle.points_equal(p0, p1) {
                    self.merge_coincident_pair(v0, v1, &mut edges_to_remove, &mut vertices_to_remove)?;
                    seen.insert(key);
                }
            }
        }

        for h in edges_to_remove {
            self.store.erase_edge_pair(h);
        }
        for v in vertices_to_remove {
            self.store.erase_vertex(v);
        }
        Ok(())
    }

    fn merge_coincident_pair(
        &mut self,
        v0: VertexId,
        v1: VertexId,
        edges_to_remove: &mut Vec<HalfedgeId>,
        vertices_to_remove: &mut Vec<VertexId>,
    ) -> Build<()> {
        let incoming = self
            .store
            .incoming_halfedges(v1)
            .ok_or(SkeletonError::BrokenTopology)?;

        let mut joining = None;
        let mut to_relink = Vec::new();
        for h in incoming {
            if self.store.halfedge(h.twin()).vertex == Some(v0) {
                joining = Some(h);
            } else {
                to_relink.push(h);
            }
        }
        // Coincident but unconnected nodes stay apart.
        let Some(t0) = joining else {
            return Ok(());
        };

        for h in to_relink {
            self.store.set_vertex(h, v0);
        }

        self.slav.set_excluded(v1);
        vertices_to_remove.push(v1);

        let t1 = t0.twin();
        let (t0_prev, t0_next) = (self.prev_of(t0)?, self.next_of(t0)?);
        let (t1_prev, t1_next) = (self.prev_of(t1)?, self.next_of(t1)?);
        self.store.set_next(t0_prev, t0_next);
        self.store.set_prev(t0_next, t0_prev);
        self.store.set_next(t1_prev, t1_next);
        self.store.set_prev(t1_next, t1_prev);

        if self.store.vertex(v0).halfedge == Some(t1) {
            self.store.set_vertex_halfedge(v0, t1_prev);
        }

        edges_to_remove.push(t0);
        Ok(())
    }
}

/// Partitions six borders (three per source event) into the two shared
/// by both events and the two unique to one each.
fn sort_two_distinct_two_equal(
    x: [HalfedgeId; 3],
    y: [HalfedgeId; 3],
) -> Option<(HalfedgeId, HalfedgeId, HalfedgeId, HalfedgeId)> {
    let mut equal = Vec::new();
    let mut distinct = Vec::new();
    for &b in &x {
        if y.contains(&b) {
            equal.push(b);
        } else {
            distinct.push(b);
        }
    }
    for &b in &y {
        if !x.contains(&b) {
            distinct.push(b);
        }
    }
    if equal.len() == 2 && distinct.len() == 2 {
        Some((distinct[0], distinct[1], equal[0], equal[1]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn poly(points: &[(f64, f64)]) -> Vec<Point2<f64>> {
        points.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn build(rings: &[&[(f64, f64)]]) -> StraightSkeleton<f64> {
        let mut builder = SkeletonBuilder::new();
        for ring in rings {
            builder.enter_contour(&poly(ring)).unwrap();
        }
        builder.construct_skeleton().expect("construction failed")
    }

    fn node_near(skeleton: &StraightSkeleton<f64>, x: f64, y: f64) -> VertexId {
        skeleton
            .skeleton_vertices()
            .find(|&v| {
                let p = skeleton.vertex(v).point;
                (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6
            })
            .unwrap_or_else(|| panic!("no skeleton vertex near ({x}, {y})"))
    }

    /// Each skeleton vertex must carry three pairwise distinct borders
    /// whose supporting lines are all at offset distance `time` from it.
    fn check_border_invariants(skeleton: &StraightSkeleton<f64>) {
        for v in skeleton.skeleton_vertices() {
            let borders = skeleton
                .defining_borders(v)
                .expect("skeleton vertex without defining borders");
            assert_ne!(borders[0], borders[1]);
            assert_ne!(borders[1], borders[2]);
            assert_ne!(borders[0], borders[2]);

            let rec = skeleton.vertex(v);
            for border in borders {
                let (p, q) = skeleton.endpoints(border).unwrap();
                let line = Line2::from_edge(p, q).unwrap();
                assert_relative_eq!(line.offset_distance(rec.point), rec.time, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_unit_square() {
        let skeleton = build(&[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]]);

        assert!(skeleton.is_valid());
        assert_eq!(skeleton.skeleton_vertices().count(), 1);
        assert_eq!(skeleton.faces().count(), 4);
        assert_eq!(skeleton.bisectors().count(), 8);

        let center = node_near(&skeleton, 0.5, 0.5);
        assert_relative_eq!(skeleton.vertex(center).time, 0.5, epsilon = 1e-9);
        assert_eq!(skeleton.degree(center), 4);
        check_border_invariants(&skeleton);
    }

    #[test]
    fn test_rectangle_has_interior_bisector() {
        let skeleton = build(&[&[(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (0.0, 1.0)]]);

        assert!(skeleton.is_valid());
        assert_eq!(skeleton.skeleton_vertices().count(), 2);
        let left = node_near(&skeleton, 0.5, 0.5);
        let right = node_near(&skeleton, 3.5, 0.5);
        assert_relative_eq!(skeleton.vertex(left).time, 0.5, epsilon = 1e-9);
        assert_relative_eq!(skeleton.vertex(right).time, 0.5, epsilon = 1e-9);

        // One bisector joins the two nodes.
        let joined = skeleton.bisectors().any(|h| {
            let (p, q) = skeleton.endpoints(h).unwrap();
            (p.x - 0.5).abs() < 1e-9
                && (p.y - 0.5).abs() < 1e-9
                && (q.x - 3.5).abs() < 1e-9
                && (q.y - 0.5).abs() < 1e-9
        });
        assert!(joined, "expected a bisector from (0.5,0.5) to (3.5,0.5)");
        check_border_invariants(&skeleton);
    }

    #[test]
    fn test_equilateral_triangle_collapses_to_incenter() {
        let h = 3.0_f64.sqrt() / 2.0;
        let skeleton = build(&[&[(0.0, 1.0), (-h, -0.5), (h, -0.5)]]);

        assert!(skeleton.is_valid());
        assert_eq!(skeleton.skeleton_vertices().count(), 1);
        let center = node_near(&skeleton, 0.0, 0.0);
        // The inradius of an equilateral triangle inscribed in the unit
        // circle is half the circumradius.
        assert_relative_eq!(skeleton.vertex(center).time, 0.5, epsilon = 1e-9);
        check_border_invariants(&skeleton);
    }

    #[test]
    fn test_l_shape_split_event() {
        let skeleton = build(&[&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]]);

        assert!(skeleton.is_valid());
        assert_eq!(skeleton.skeleton_vertices().count(), 3);
        for v in skeleton.skeleton_vertices() {
            assert_relative_eq!(skeleton.vertex(v).time, 0.5, epsilon = 1e-9);
        }

        node_near(&skeleton, 1.5, 0.5);
        node_near(&skeleton, 0.5, 1.5);
        let split = node_near(&skeleton, 0.5, 0.5);
        assert_eq!(skeleton.degree(split), 4);
        check_border_invariants(&skeleton);
    }

    #[test]
    fn test_house_pentagon() {
        let skeleton = build(&[&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 2.0), (0.0, 1.0)]]);

        assert!(skeleton.is_valid());
        assert_eq!(skeleton.skeleton_vertices().count(), 3);

        let t_eaves = 1.0 / 2.0_f64.sqrt();
        let left = node_near(&skeleton, t_eaves, t_eaves);
        let right = node_near(&skeleton, 2.0 - t_eaves, t_eaves);
        assert_relative_eq!(skeleton.vertex(left).time, t_eaves, epsilon = 1e-9);
        assert_relative_eq!(skeleton.vertex(right).time, t_eaves, epsilon = 1e-9);

        let t_ridge = 2.0 * 2.0_f64.sqrt() - 2.0;
        let ridge = node_near(&skeleton, 1.0, t_ridge);
        assert_relative_eq!(skeleton.vertex(ridge).time, t_ridge, epsilon = 1e-9);
        check_border_invariants(&skeleton);
    }

    #[test]
    fn test_square_with_concentric_hole() {
        let skeleton = build(&[
            &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            &[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)],
        ]);

        assert!(skeleton.is_valid());
        assert_eq!(skeleton.faces().count(), 8);

        // The ring collapses onto the mid loop: one degree-4 node per
        // corner of the loop, everything at offset one half.
        assert_eq!(skeleton.skeleton_vertices().count(), 4);
        for v in skeleton.skeleton_vertices() {
            assert_relative_eq!(skeleton.vertex(v).time, 0.5, epsilon = 1e-9);
        }
        for (x, y) in [(0.5, 0.5), (3.5, 0.5), (3.5, 3.5), (0.5, 3.5)] {
            let corner = node_near(&skeleton, x, y);
            assert_eq!(skeleton.degree(corner), 4);
        }

        // The mid loop connects hole-side and outer-side wavefronts.
        let joined = skeleton.bisectors().any(|h| {
            let (p, q) = skeleton.endpoints(h).unwrap();
            (p.distance(Point2::new(0.5, 0.5)) < 1e-9 && q.distance(Point2::new(3.5, 0.5)) < 1e-9)
                || (p.distance(Point2::new(3.5, 0.5)) < 1e-9
                    && q.distance(Point2::new(0.5, 0.5)) < 1e-9)
        });
        assert!(joined, "expected a mid-loop bisector along y = 0.5");
        check_border_invariants(&skeleton);
    }

    #[test]
    fn test_notched_hexagon_vertex_event() {
        // Two reflex tips at (3,1) and (3,3) advance toward each other
        // and meet head on at (3,2): a genuine vertex event.
        let skeleton = build(&[&[
            (0.0, 0.0),
            (3.0, 1.0),
            (6.0, 0.0),
            (6.0, 4.0),
            (3.0, 3.0),
            (0.0, 4.0),
        ]]);

        assert!(skeleton.is_valid());
        assert_eq!(skeleton.skeleton_vertices().count(), 3);

        let t_tips = 3.0 / 10.0_f64.sqrt();
        let center = node_near(&skeleton, 3.0, 2.0);
        assert_relative_eq!(skeleton.vertex(center).time, t_tips, epsilon = 1e-9);
        assert_eq!(skeleton.degree(center), 4);

        let t_side = 6.0 / (1.0 + 10.0_f64.sqrt());
        let left = node_near(&skeleton, t_side, 2.0);
        let right = node_near(&skeleton, 6.0 - t_side, 2.0);
        assert_relative_eq!(skeleton.vertex(left).time, t_side, epsilon = 1e-9);
        assert_relative_eq!(skeleton.vertex(right).time, t_side, epsilon = 1e-9);
        check_border_invariants(&skeleton);
    }

    #[test]
    fn test_collinear_contour_vertex_flagged_reflex() {
        let mut builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        builder
            .enter_contour(&poly(&[
                (0.0, 0.0),
                (1.0, 0.0),
                (2.0, 0.0),
                (2.0, 2.0),
                (0.0, 2.0),
            ]))
            .unwrap();
        builder.create_contour_bisectors().unwrap();

        let straight = builder.contour_vertices[1];
        let corner = builder.contour_vertices[2];
        assert!(builder.slav.is_reflex(straight));
        assert!(!builder.slav.is_reflex(corner));
    }

    #[test]
    fn test_contour_too_small() {
        let mut builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        assert_eq!(
            builder.enter_contour(&poly(&[(0.0, 0.0), (1.0, 0.0)])),
            Err(SkeletonError::ContourTooSmall)
        );
    }

    #[test]
    fn test_degenerate_contour_rejected() {
        let mut builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        assert_eq!(
            builder.enter_contour(&poly(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)])),
            Err(SkeletonError::DegenerateContour)
        );
    }

    #[test]
    fn test_construct_without_contour() {
        let builder: SkeletonBuilder<f64> = SkeletonBuilder::new();
        assert!(builder.construct_skeleton().is_none());
    }

    #[test]
    fn test_contour_preserved_in_output() {
        let points = [(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (0.0, 2.0)];
        let skeleton = build(&[&points]);

        assert_eq!(skeleton.contour_vertices().count(), 4);
        for v in skeleton.contour_vertices() {
            let p = skeleton.vertex(v).point;
            assert!(points
                .iter()
                .any(|&(x, y)| (p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12));
            assert_eq!(skeleton.vertex(v).time, 0.0);
        }
    }

    #[test]
    fn test_f32_support() {
        let mut builder: SkeletonBuilder<f32> = SkeletonBuilder::new();
        builder
            .enter_contour(&[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ])
            .unwrap();
        let skeleton = builder.construct_skeleton().unwrap();
        assert_eq!(skeleton.skeleton_vertices().count(), 1);
    }
}
