use crate::cnf::VarId;
use std::cmp::Ordering;

pub type BuildHasher = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Score wrapper whose `Ord` breaks ties by ascending variable id: since
/// `priority_queue::PriorityQueue::pop` extracts the maximum, a *smaller*
/// id must compare as *greater* so it is extracted first among equal
/// scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Priority {
    pub score: f64,
    pub id: VarId,
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        // Heuristic scores are sums of finite, non-negative terms and are
        // never NaN.
        match self.score.partial_cmp(&other.score).unwrap() {
            Ordering::Equal => other.id.cmp(&self.id),
            ord => ord,
        }
    }
}

/// Indexed binary max-heap over variable ids keyed by `Priority`, backed by
/// a deterministic (non-randomized) hasher so iteration order never
/// depends on process-local hash seeding.
pub type PriorityQueue = priority_queue::PriorityQueue<VarId, Priority, BuildHasher>;

pub fn build<I: IntoIterator<Item = (VarId, f64)>>(scored: I) -> PriorityQueue {
    scored
        .into_iter()
        .map(|(id, score)| (id, Priority { score, id }))
        .collect()
}
