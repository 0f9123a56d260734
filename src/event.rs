//! Event variants and the propagation priority queue.
//!
//! Events live in an arena and carry a mutable `excluded` flag; the heap
//! only stores (time, id) entries. Exclusion and staleness are resolved
//! lazily when an entry is popped, so superseded events cost nothing to
//! cancel. Ties in time are ordered by ascending id, which makes runs
//! deterministic; correctness does not depend on it, because equal-time
//! conflicts are resolved at enqueue time.

use crate::geometry::Point2;
use crate::halfedge::{HalfedgeId, VertexId};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Identifier of an event in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub(crate) usize);

impl EventId {
    /// The dense index of this event.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The three event variants of the propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Two adjacent wavefront vertices collide; the contour edge between
    /// their defining borders collapses.
    Edge {
        /// The three distinct contour edges meeting at the event.
        borders: [HalfedgeId; 3],
        /// Left and right colliding vertices.
        seeds: (VertexId, VertexId),
    },
    /// A reflex wavefront crashes into a non-adjacent contour edge.
    Split {
        /// The two contour edges incident to the reflex seed.
        borders: [HalfedgeId; 2],
        /// The contour edge being split.
        opposite: HalfedgeId,
        /// The reflex vertex.
        seed: VertexId,
    },
    /// Two simultaneous split events sharing two borders; four reflex
    /// wavefronts recombine.
    Vertex {
        /// The two borders unique to one source event each.
        distinct: [HalfedgeId; 2],
        /// The two borders shared by both source events.
        equal: [HalfedgeId; 2],
        /// The two reflex seeds.
        seeds: (VertexId, VertexId),
    },
}

/// One predicted event.
#[derive(Debug, Clone)]
pub struct Event<F> {
    /// Variant and operands.
    pub kind: EventKind,
    /// Propagation time of the event.
    pub time: F,
    /// Location of the event.
    pub point: Point2<F>,
    /// Set when the event has been superseded; skipped at pop.
    pub excluded: bool,
}

/// Min-heap entry; ordering is ascending time, then ascending id.
struct QueueEntry<F> {
    time: F,
    id: EventId,
}

impl<F: Float> PartialEq for QueueEntry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<F: Float> Eq for QueueEntry<F> {}

impl<F: Float> PartialOrd for QueueEntry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for QueueEntry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the minimum.
        other
            .time
            .partial_cmp(&self.time)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Event arena plus the lazy priority queue.
pub struct EventQueue<F> {
    events: Vec<Event<F>>,
    heap: BinaryHeap<QueueEntry<F>>,
}

impl<F: Float> Default for EventQueue<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> EventQueue<F> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }

    /// Stores an event without scheduling it.
    ///
    /// Used for vertex events, which are dispatched immediately when
    /// found and never drain through the heap.
    pub fn register(&mut self, event: Event<F>) -> EventId {
        let id = EventId(self.events.len());
        self.events.push(event);
        id
    }

    /// Stores an event and schedules it.
    pub fn insert(&mut self, event: Event<F>) -> EventId {
        let time = event.time;
        let id = self.register(event);
        self.heap.push(QueueEntry { time, id });
        id
    }

    /// Pops the scheduled event with the smallest time.
    pub fn pop(&mut self) -> Option<EventId> {
        self.heap.pop().map(|entry| entry.id)
    }

    /// Borrows an event.
    #[inline]
    pub fn event(&self, id: EventId) -> &Event<F> {
        &self.events[id.0]
    }

    /// Mutably borrows an event.
    #[inline]
    pub fn event_mut(&mut self, id: EventId) -> &mut Event<F> {
        &mut self.events[id.0]
    }

    /// Flags an event as superseded.
    pub fn exclude(&mut self, id: EventId) {
        self.events[id.0].excluded = true;
    }

    /// True when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
