//! Domain-supplied cost-to-go estimates for informed search.

use crate::space::Cost;

/// Estimated remaining cost from a state to the nearest goal.
///
/// A* is optimal only when the estimate is admissible (never exceeds the true
/// remaining cost). Consistency is not required for correctness because the
/// search layer reopens closed states; it only avoids the extra work.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> Cost;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> Cost,
{
    fn estimate(&self, state: &S) -> Cost {
        self(state)
    }
}

/// The trivially admissible heuristic. A* with it behaves like uniform-cost
/// search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> Cost {
        0
    }
}
