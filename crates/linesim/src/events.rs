//! Intersection event list and the sort/dedup pass that imposes canonical
//! order (spec.md §3, §4.3 step 3).
//!
//! `EventList` is a concat-tree rather than a literal head/tail linked list:
//! `push` and `merge` are both O(1) (they just wrap the two operands in a new
//! node), and the list is only walked once, when it is flattened into the
//! canonical `Vec<Event>` the resolver iterates over. This is the same
//! "associative monoid, accumulate per worker, merge at the join point" shape
//! spec.md's design notes describe; a concat tree realizes it without unsafe
//! tail-pointer bookkeeping.

use crate::geometry::Verdict;
use crate::segment::SegmentId;

/// One detected interaction between two segments, `id(a) < id(b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub a: SegmentId,
    pub b: SegmentId,
    pub verdict: Verdict,
}

impl Event {
    #[inline]
    pub fn new(a: SegmentId, b: SegmentId, verdict: Verdict) -> Self {
        debug_assert!(a < b, "event requires id(a) < id(b)");
        Self { a, b, verdict }
    }

    #[inline]
    fn key(&self) -> (SegmentId, SegmentId) {
        (self.a, self.b)
    }
}

/// Append-only sequence of events, accumulated per worker and merged at join
/// points. Identity is `EventList::new()`; `merge` is the associative,
/// commutative-in-content (but order-preserving per branch) concatenation.
#[derive(Debug, Default)]
pub enum EventList {
    #[default]
    Empty,
    Leaf(Event),
    Concat(Box<EventList>, Box<EventList>),
}

impl EventList {
    #[inline]
    pub fn new() -> Self {
        EventList::Empty
    }

    /// Append one event. O(1).
    #[inline]
    pub fn push(self, event: Event) -> Self {
        match self {
            EventList::Empty => EventList::Leaf(event),
            other => EventList::Concat(Box::new(other), Box::new(EventList::Leaf(event))),
        }
    }

    /// Concatenate two lists, preserving the append order within each. O(1).
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (EventList::Empty, b) => b,
            (a, EventList::Empty) => a,
            (a, b) => EventList::Concat(Box::new(a), Box::new(b)),
        }
    }

    /// Flatten into a `Vec<Event>` in append order. O(n), single pass.
    pub fn into_vec(self) -> Vec<Event> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                EventList::Empty => {}
                EventList::Leaf(e) => out.push(e),
                EventList::Concat(a, b) => {
                    stack.push(*b);
                    stack.push(*a);
                }
            }
        }
        out
    }
}

/// Running count of raw (pre-dedup) detected pairs, accumulated the same way
/// as `EventList` (per worker, merged by addition at join points).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairCount(pub u64);

impl PairCount {
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        PairCount(self.0 + other.0)
    }
}

/// Sort `events` into canonical order (lexicographic on `(id(a), id(b))`) and
/// remove duplicate pairs, keeping the first verdict seen for each pair.
///
/// Returns the deduped, canonically-ordered events and the number of
/// duplicates removed (`N0 - duplicates_removed` is the step's reported
/// line-line collision count). Any stable sort that produces this order is
/// conformant; the "selection-sort with in-place deletion" description in the
/// design notes is one reference algorithm, not a mandated implementation.
pub fn canonical_order(mut events: Vec<Event>) -> (Vec<Event>, u64) {
    events.sort_by_key(Event::key);
    let before = events.len();
    events.dedup_by_key(|e| e.key());
    let duplicates_removed = (before - events.len()) as u64;
    (events, duplicates_removed)
}
