//! grassfire - Straight skeleton construction for planar polygons
//!
//! The straight skeleton of a polygon is the trace left by its edges as
//! they translate inward along their angle bisectors at uniform speed.
//! This crate simulates that propagation event by event: the shrinking
//! boundary is tracked in rings of active vertices, topology changes
//! (edge collapses, reflex splits, wavefront recombinations) are pulled
//! from a priority queue, and the result is emitted as a half-edge graph
//! embedding the original contour.
//!
//! # Example
//!
//! ```
//! use grassfire::{Point2, SkeletonBuilder};
//!
//! let mut builder = SkeletonBuilder::<f64>::new();
//! builder
//!     .enter_contour(&[
//!         Point2::new(0.0, 0.0),
//!         Point2::new(2.0, 0.0),
//!         Point2::new(2.0, 2.0),
//!         Point2::new(0.0, 2.0),
//!     ])
//!     .unwrap();
//! let skeleton = builder.construct_skeleton().unwrap();
//!
//! // The square collapses to its center at offset distance 1.
//! let center = skeleton.skeleton_vertices().next().unwrap();
//! assert!((skeleton.vertex(center).time - 1.0).abs() < 1e-9);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod geometry;
pub mod halfedge;
pub mod oracle;
pub mod skeleton;
pub mod slav;

pub use builder::SkeletonBuilder;
pub use error::SkeletonError;
pub use geometry::{Line2, Point2, Vec2};
pub use halfedge::{FaceId, HalfedgeId, VertexId, VertexKind};
pub use oracle::Oracle;
pub use skeleton::StraightSkeleton;
