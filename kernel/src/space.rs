//! The capability contract every search domain implements.
//!
//! # Contract
//!
//! - States are immutable values with a stable `Hash` and `Eq`. Dedup in the
//!   search layer is only as correct as these two impls.
//! - `Space::neighbors` must be finite and deterministic in both content and
//!   order. Neighbor order feeds creation order, which feeds tie-breaking, so
//!   an unstable order makes instrumentation counters irreproducible.
//! - Spaces are read-only during search. Every method takes `&self`.

use std::fmt;
use std::hash::Hash;

use rand::Rng;

use crate::error::DomainError;
use crate::problem::{Problem, SimpleProblem};

/// Path and action cost. Integer so counters and reports stay bit-reproducible.
pub type Cost = i64;

/// A point in a search space.
///
/// Blanket-implemented for every type with the required capabilities.
pub trait State: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> State for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// A labelled transition between two states.
pub trait Action<S>: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Cost of applying this action from `from`.
    ///
    /// Defaults to 0 so unit-less domains need not care.
    fn cost(&self, _from: &S) -> Cost {
        0
    }
}

/// A generic search space.
pub trait Space {
    type State: State;
    type Action: Action<Self::State>;

    /// The available actions at `state`, each paired with its resulting state.
    ///
    /// # Errors
    ///
    /// Propagates any [`DomainError`] raised while enumerating. Search treats
    /// such errors as fatal and returns them unchanged.
    fn neighbors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<(Self::Action, Self::State)>, DomainError>;

    /// Replay `action` from `state`.
    ///
    /// The default scans [`Space::neighbors`] for the first matching action.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAction`] naming the attempted action and
    /// every valid action at `state` when no neighbor matches.
    fn execute(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, DomainError> {
        let mut neighbors = self.neighbors(state)?;
        if let Some(pos) = neighbors.iter().position(|(a, _)| a == action) {
            return Ok(neighbors.swap_remove(pos).1);
        }
        Err(DomainError::InvalidAction {
            action: action.to_string(),
            state: state.to_string(),
            valid: neighbors.iter().map(|(a, _)| a.to_string()).collect(),
        })
    }

    /// Debug rendering of `state` within `problem`.
    ///
    /// # Errors
    ///
    /// The default returns [`DomainError::Unimplemented`]; rendering is never
    /// needed by the search algorithms themselves.
    fn render<P>(&self, _problem: &P, _state: &Self::State) -> Result<String, DomainError>
    where
        P: Problem<Space = Self>,
        Self: Sized,
    {
        Err(DomainError::Unimplemented {
            capability: "render",
        })
    }
}

/// A space with predefined start and goal states, used to build problems.
pub trait PredefinedSpace: Space + Sized {
    /// Starting states, in a deterministic order.
    fn starting_states(&self) -> Vec<Self::State>;

    /// Goal states, in a deterministic order.
    fn goal_states(&self) -> Vec<Self::State>;

    /// One problem per `(start, goal)` pair.
    fn simple_given(&self) -> impl Iterator<Item = SimpleProblem<'_, Self>> {
        let goals = self.goal_states();
        self.starting_states().into_iter().flat_map(move |start| {
            goals
                .clone()
                .into_iter()
                .map(move |goal| SimpleProblem::new(self, [start.clone()], [goal]))
        })
    }

    /// One problem per start, each with every goal.
    fn multi_goal_given(&self) -> impl Iterator<Item = SimpleProblem<'_, Self>> {
        let goals = self.goal_states();
        self.starting_states()
            .into_iter()
            .map(move |start| SimpleProblem::new(self, [start], goals.clone()))
    }

    /// A single problem with every start and every goal.
    fn multi_start_and_goal_given(&self) -> SimpleProblem<'_, Self> {
        SimpleProblem::new(self, self.starting_states(), self.goal_states())
    }
}

/// A space that can sample states uniformly at random.
pub trait RandomAccessSpace: Space + Sized {
    /// A uniformly random valid state.
    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;

    /// A problem with one random start and one random goal.
    fn simple_random<R: Rng + ?Sized>(&self, rng: &mut R) -> SimpleProblem<'_, Self> {
        let start = self.random_state(rng);
        let goal = self.random_state(rng);
        SimpleProblem::new(self, [start], [goal])
    }
}
