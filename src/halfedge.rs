//! Arena-backed half-edge store for the skeleton under construction.
//!
//! The graph is cyclic, so all linkage (twin, next, prev, target vertex,
//! face) is expressed as indices into append-only arenas rather than
//! owned references. Halfedges are allocated in twin pairs at adjacent
//! indices, so a halfedge's twin is its id with the lowest bit flipped.
//! Erasure tombstones records in place; ids stay stable and are never
//! reused.
//!
//! Mutators here are single link writes. They do not enforce global
//! consistency; event handlers compose them into atomic updates, and
//! [`HalfedgeStore::validate`] checks the finished graph.

use crate::geometry::Point2;
use num_traits::Float;

/// Identifier of a vertex in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

/// Identifier of a halfedge in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfedgeId(pub(crate) usize);

/// Identifier of a face in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub(crate) usize);

impl VertexId {
    /// The dense index of this vertex.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl HalfedgeId {
    /// The dense index of this halfedge.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// The opposite halfedge of the pair.
    #[inline]
    pub fn twin(self) -> HalfedgeId {
        HalfedgeId(self.0 ^ 1)
    }
}

impl FaceId {
    /// The dense index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether a vertex belongs to the input contour or to the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// An input contour vertex, at propagation time zero.
    Contour,
    /// A vertex created by an event, tagged with the event time.
    Skeleton,
}

/// Whether a face is an offset region or the outside of a contour ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    /// The offset region swept by one contour edge.
    Interior,
    /// The region beyond a contour ring (the unbounded plane for the
    /// outer ring, the hole interior for a hole ring).
    Outer,
}

/// A vertex record.
#[derive(Debug, Clone)]
pub struct Vertex<F> {
    /// Position in the plane.
    pub point: Point2<F>,
    /// Propagation time at which the vertex appeared.
    pub time: F,
    /// Contour or skeleton.
    pub kind: VertexKind,
    /// A halfedge targeting this vertex, once assigned.
    pub halfedge: Option<HalfedgeId>,
    alive: bool,
}

impl<F> Vertex<F> {
    /// True for skeleton vertices.
    #[inline]
    pub fn is_skeleton(&self) -> bool {
        self.kind == VertexKind::Skeleton
    }
}

/// A halfedge record. The twin is implicit in the id pairing.
#[derive(Debug, Clone)]
pub struct Halfedge {
    /// Next halfedge around the face, once assigned.
    pub next: Option<HalfedgeId>,
    /// Previous halfedge around the face, once assigned.
    pub prev: Option<HalfedgeId>,
    /// Target vertex, once assigned.
    pub vertex: Option<VertexId>,
    /// Incident face on the left, once assigned.
    pub face: Option<FaceId>,
    /// True for interior bisector halfedges, false for contour halfedges.
    pub is_bisector: bool,
    alive: bool,
}

/// A face record.
#[derive(Debug, Clone)]
pub struct Face {
    /// For interior faces, the contour halfedge whose offset region this
    /// is; for outer faces, some halfedge on the ring.
    pub halfedge: HalfedgeId,
    /// Interior offset region or outside of a ring.
    pub kind: FaceKind,
}

/// The half-edge graph arena.
#[derive(Debug, Clone, Default)]
pub struct HalfedgeStore<F> {
    vertices: Vec<Vertex<F>>,
    halfedges: Vec<Halfedge>,
    faces: Vec<Face>,
}

impl<F: Float> HalfedgeStore<F> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            halfedges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Appends a vertex and returns its id.
    pub fn add_vertex(&mut self, point: Point2<F>, time: F, kind: VertexKind) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            point,
            time,
            kind,
            halfedge: None,
            alive: true,
        });
        id
    }

    /// Appends an unlinked twin pair and returns (even, odd) ids.
    pub fn add_edge_pair(&mut self, is_bisector: bool) -> (HalfedgeId, HalfedgeId) {
        let id = HalfedgeId(self.halfedges.len());
        for _ in 0..2 {
            self.halfedges.push(Halfedge {
                next: None,
                prev: None,
                vertex: None,
                face: None,
                is_bisector,
                alive: true,
            });
        }
        (id, id.twin())
    }

    /// Appends a face and returns its id.
    pub fn add_face(&mut self, halfedge: HalfedgeId, kind: FaceKind) -> FaceId {
        let id = FaceId(self.faces.len());
        self.faces.push(Face { halfedge, kind });
        id
    }

    /// Borrows a vertex record.
    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex<F> {
        &self.vertices[v.0]
    }

    /// Borrows a halfedge record.
    #[inline]
    pub fn halfedge(&self, h: HalfedgeId) -> &Halfedge {
        &self.halfedges[h.0]
    }

    /// Borrows a face record.
    #[inline]
    pub fn face(&self, f: FaceId) -> &Face {
        &self.faces[f.0]
    }

    /// True while the vertex has not been erased.
    #[inline]
    pub fn vertex_alive(&self, v: VertexId) -> bool {
        self.vertices[v.0].alive
    }

    /// True while the halfedge has not been erased.
    #[inline]
    pub fn halfedge_alive(&self, h: HalfedgeId) -> bool {
        self.halfedges[h.0].alive
    }

    /// Sets the next link of `h`.
    #[inline]
    pub fn set_next(&mut self, h: HalfedgeId, next: HalfedgeId) {
        self.halfedges[h.0].next = Some(next);
    }

    /// Sets the prev link of `h`.
    #[inline]
    pub fn set_prev(&mut self, h: HalfedgeId, prev: HalfedgeId) {
        self.halfedges[h.0].prev = Some(prev);
    }

    /// Sets the target vertex of `h`.
    #[inline]
    pub fn set_vertex(&mut self, h: HalfedgeId, v: VertexId) {
        self.halfedges[h.0].vertex = Some(v);
    }

    /// Sets the incident face of `h`.
    #[inline]
    pub fn set_face(&mut self, h: HalfedgeId, f: FaceId) {
        self.halfedges[h.0].face = Some(f);
    }

    /// Sets the incident halfedge of vertex `v`.
    #[inline]
    pub fn set_vertex_halfedge(&mut self, v: VertexId, h: HalfedgeId) {
        self.vertices[v.0].halfedge = Some(h);
    }

    /// Tombstones a vertex.
    pub fn erase_vertex(&mut self, v: VertexId) {
        self.vertices[v.0].alive = false;
    }

    /// Tombstones both halfedges of a pair.
    pub fn erase_edge_pair(&mut self, h: HalfedgeId) {
        self.halfedges[h.0].alive = false;
        self.halfedges[h.0 ^ 1].alive = false;
    }

    /// Iterates live vertex ids.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.alive)
            .map(|(i, _)| VertexId(i))
    }

    /// Iterates live halfedge ids.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        self.halfedges
            .iter()
            .enumerate()
            .filter(|(_, h)| h.alive)
            .map(|(i, _)| HalfedgeId(i))
    }

    /// Iterates all face ids (faces are never erased).
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId)
    }

    /// Number of live vertices.
    pub fn live_vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.alive).count()
    }

    /// Number of live halfedges.
    pub fn live_halfedge_count(&self) -> usize {
        self.halfedges.iter().filter(|h| h.alive).count()
    }

    /// All live halfedges targeting `v`, by circulating its fan.
    ///
    /// Requires the local topology around `v` to be closed; returns
    /// `None` if a link is missing or the walk does not return to its
    /// start within the halfedge count.
    pub fn incoming_halfedges(&self, v: VertexId) -> Option<Vec<HalfedgeId>> {
        let start = self.vertices[v.0].halfedge?;
        let mut result = Vec::new();
        let mut h = start;
        for _ in 0..=self.halfedges.len() {
            result.push(h);
            let out = self.halfedges[h.0].next?;
            h = out.twin();
            if h == start {
                return Some(result);
            }
        }
        None
    }

    /// Checks structural validity of the finished graph.
    ///
    /// Every live halfedge must be fully linked with a live twin and
    /// mutually consistent next/prev; every face boundary must close
    /// through halfedges carrying that face, with interior faces holding
    /// exactly one contour halfedge; the face walks together must cover
    /// every live halfedge exactly once; every live vertex's incident
    /// halfedge must target it; and the Euler relation `V - E + F = 2`
    /// must hold over live records.
    pub fn validate(&self) -> bool {
        let live: Vec<HalfedgeId> = self.halfedge_ids().collect();
        if live.is_empty() {
            return false;
        }

        for &h in &live {
            let rec = &self.halfedges[h.0];
            if !self.halfedges[h.0 ^ 1].alive {
                return false;
            }
            let (Some(next), Some(prev), Some(vertex), Some(face)) =
                (rec.next, rec.prev, rec.vertex, rec.face)
            else {
                return false;
            };
            if !self.halfedges[next.0].alive || !self.halfedges[prev.0].alive {
                return false;
            }
            if self.halfedges[next.0].prev != Some(h) || self.halfedges[prev.0].next != Some(h) {
                return false;
            }
            if !self.vertices[vertex.0].alive {
                return false;
            }
            if self.halfedges[next.0].face != Some(face) {
                return false;
            }
        }

        for v in self.vertex_ids() {
            let Some(h) = self.vertices[v.0].halfedge else {
                return false;
            };
            if !self.halfedges[h.0].alive || self.halfedges[h.0].vertex != Some(v) {
                return false;
            }
        }

        // Face boundaries must close and partition the live halfedges.
        let mut visited = 0usize;
        for f in self.face_ids() {
            let face = &self.faces[f.0];
            let start = face.halfedge;
            if !self.halfedges[start.0].alive {
                return false;
            }
            let mut contour_edges = 0usize;
            let mut h = start;
            let mut steps = 0usize;
            loop {
                if self.halfedges[h.0].face != Some(f) {
                    return false;
                }
                if !self.halfedges[h.0].is_bisector {
                    contour_edges += 1;
                }
                visited += 1;
                steps += 1;
                if steps > self.halfedges.len() {
                    return false;
                }
                match self.halfedges[h.0].next {
                    Some(next) => h = next,
                    None => return false,
                }
                if h == start {
                    break;
                }
            }
            if face.kind == FaceKind::Interior && contour_edges != 1 {
                return false;
            }
        }
        if visited != live.len() {
            return false;
        }

        let v = self.live_vertex_count() as i64;
        let e = (live.len() / 2) as i64;
        let f = self.faces.len() as i64;
        v - e + f == 2
    }
}
