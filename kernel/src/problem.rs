//! Search problems: a space, its starting states, and a goal predicate.

use std::collections::HashSet;

use crate::error::DomainError;
use crate::space::Space;

/// State type of a problem's space.
pub type StateOf<P> = <<P as Problem>::Space as Space>::State;

/// Action type of a problem's space.
pub type ActionOf<P> = <<P as Problem>::Space as Space>::Action;

/// A search problem over a [`Space`].
///
/// Problems are read-only for the lifetime of any search over them.
pub trait Problem {
    type Space: Space;

    /// The space this problem is posed in.
    fn space(&self) -> &Self::Space;

    /// Starting states, duplicate-free and in a deterministic order.
    fn starts(&self) -> &[StateOf<Self>];

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &StateOf<Self>) -> bool;

    /// Render the problem through its space, from the first starting state.
    ///
    /// # Errors
    ///
    /// [`DomainError::EmptyStartSet`] if there is no starting state, or any
    /// error from [`Space::render`].
    fn render(&self) -> Result<String, DomainError>
    where
        Self: Sized,
    {
        let start = self.starts().first().ok_or(DomainError::EmptyStartSet)?;
        self.space().render(self, start)
    }
}

/// Keep the first occurrence of each state, preserving order.
fn dedup_in_order<S: crate::space::State>(states: impl IntoIterator<Item = S>) -> Vec<S> {
    let mut seen = HashSet::new();
    states
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// A problem whose goal is membership in a fixed set of states.
#[derive(Debug, Clone)]
pub struct SimpleProblem<'s, S: Space> {
    space: &'s S,
    starts: Vec<S::State>,
    goals: HashSet<S::State>,
}

impl<'s, S: Space> SimpleProblem<'s, S> {
    /// Build a problem. Duplicate starts are dropped; first occurrence wins.
    pub fn new(
        space: &'s S,
        starts: impl IntoIterator<Item = S::State>,
        goals: impl IntoIterator<Item = S::State>,
    ) -> Self {
        Self {
            space,
            starts: dedup_in_order(starts),
            goals: goals.into_iter().collect(),
        }
    }

    /// The goal states.
    #[must_use]
    pub fn goals(&self) -> &HashSet<S::State> {
        &self.goals
    }
}

impl<S: Space> Problem for SimpleProblem<'_, S> {
    type Space = S;

    fn space(&self) -> &S {
        self.space
    }

    fn starts(&self) -> &[S::State] {
        &self.starts
    }

    fn is_goal(&self, state: &S::State) -> bool {
        self.goals.contains(state)
    }
}

/// A problem whose goal is an arbitrary predicate.
pub struct PredicateProblem<'s, S: Space, F> {
    space: &'s S,
    starts: Vec<S::State>,
    goal: F,
}

impl<'s, S, F> PredicateProblem<'s, S, F>
where
    S: Space,
    F: Fn(&S::State) -> bool,
{
    pub fn new(space: &'s S, starts: impl IntoIterator<Item = S::State>, goal: F) -> Self {
        Self {
            space,
            starts: dedup_in_order(starts),
            goal,
        }
    }
}

impl<S, F> Problem for PredicateProblem<'_, S, F>
where
    S: Space,
    F: Fn(&S::State) -> bool,
{
    type Space = S;

    fn space(&self) -> &S {
        self.space
    }

    fn starts(&self) -> &[S::State] {
        &self.starts
    }

    fn is_goal(&self, state: &S::State) -> bool {
        (self.goal)(state)
    }
}
