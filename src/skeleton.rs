//! The finished straight skeleton.
//!
//! A completed construction is a half-edge graph embedding the original
//! contour (unchanged geometry and cyclic order), the skeleton vertices
//! tagged with their propagation time, and the interior bisector
//! halfedges, with one face per contour edge mapping each offset region
//! to the edge that swept it.

use crate::halfedge::{FaceId, FaceKind, HalfedgeId, HalfedgeStore, Vertex, VertexId};
use num_traits::Float;

/// A completed straight skeleton.
pub struct StraightSkeleton<F> {
    store: HalfedgeStore<F>,
    defining_borders: Vec<Option<[HalfedgeId; 3]>>,
}

impl<F: Float> StraightSkeleton<F> {
    pub(crate) fn new(
        store: HalfedgeStore<F>,
        defining_borders: Vec<Option<[HalfedgeId; 3]>>,
    ) -> Self {
        Self {
            store,
            defining_borders,
        }
    }

    /// Borrows a vertex record.
    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex<F> {
        self.store.vertex(v)
    }

    /// Iterates all live vertices.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.store.vertex_ids()
    }

    /// Iterates the original contour vertices.
    pub fn contour_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.store
            .vertex_ids()
            .filter(|&v| !self.store.vertex(v).is_skeleton())
    }

    /// Iterates the skeleton vertices created by the propagation.
    pub fn skeleton_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.store
            .vertex_ids()
            .filter(|&v| self.store.vertex(v).is_skeleton())
    }

    /// Iterates the offset-region faces, one per contour edge.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.store
            .face_ids()
            .filter(|&f| self.store.face(f).kind == FaceKind::Interior)
    }

    /// The contour edge whose offset region a face is.
    pub fn defining_contour_edge(&self, f: FaceId) -> HalfedgeId {
        self.store.face(f).halfedge
    }

    /// Iterates the live interior bisector halfedges.
    pub fn bisectors(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        self.store
            .halfedge_ids()
            .filter(|&h| self.store.halfedge(h).is_bisector)
    }

    /// Iterates the live contour halfedges (both orientations).
    pub fn contour_halfedges(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        self.store
            .halfedge_ids()
            .filter(|&h| !self.store.halfedge(h).is_bisector)
    }

    /// Source and target points of a halfedge, if both are assigned.
    pub fn endpoints(&self, h: HalfedgeId) -> Option<(crate::Point2<F>, crate::Point2<F>)> {
        let target = self.store.halfedge(h).vertex?;
        let source = self.store.halfedge(h.twin()).vertex?;
        Some((self.store.vertex(source).point, self.store.vertex(target).point))
    }

    /// The three contour edges defining a skeleton vertex's trajectory.
    pub fn defining_borders(&self, v: VertexId) -> Option<[HalfedgeId; 3]> {
        self.defining_borders.get(v.index()).copied().flatten()
    }

    /// Number of live halfedges targeting `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.store
            .incoming_halfedges(v)
            .map(|fan| fan.len())
            .unwrap_or(0)
    }

    /// Re-runs the structural validity check on the embedding.
    pub fn is_valid(&self) -> bool {
        self.store.validate()
    }
}
