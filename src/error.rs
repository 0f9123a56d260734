//! Error types for skeleton construction.

use thiserror::Error;

/// Errors that can occur while building a straight skeleton.
///
/// The public entry point swallows these and returns `None`; they are
/// exposed for the contour-entry API and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkeletonError {
    /// A contour ring has fewer than three vertices.
    #[error("contour needs at least 3 vertices")]
    ContourTooSmall,

    /// Consecutive contour vertices coincide or an edge has zero length.
    #[error("degenerate contour: coincident consecutive vertices")]
    DegenerateContour,

    /// No contour was entered before construction.
    #[error("no contour entered")]
    NoContour,

    /// A half-edge link that must be assigned at this point is missing,
    /// or a record was addressed after erasure.
    #[error("half-edge topology is incomplete or inconsistent")]
    BrokenTopology,
}
