//! `WeightedGraph`: an explicit graph of named places with non-negative road
//! costs, plus a lookup-table heuristic.
//!
//! Text form, one statement per line (`#` starts a comment):
//!
//! ```text
//! start a
//! goal  d
//! a -> b 4     # one-way
//! b -- c 1     # both ways
//! h b 3        # heuristic entry
//! ```
//!
//! Neighbors come back in the order their roads were declared.

use std::collections::HashMap;
use std::fmt;

use waypoint_kernel::error::DomainError;
use waypoint_kernel::heuristic::Heuristic;
use waypoint_kernel::problem::Problem;
use waypoint_kernel::space::{Action, Cost, PredefinedSpace, Space};

/// Travel along one road.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Road {
    pub to: String,
    pub cost: Cost,
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "to {}", self.to)
    }
}

impl Action<String> for Road {
    fn cost(&self, _from: &String) -> Cost {
        self.cost
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphParseError {
    #[error("line {line}: road cost {cost} is negative")]
    NegativeCost { line: usize, cost: Cost },

    #[error("line {line}: cannot parse {text:?}")]
    Malformed { line: usize, text: String },
}

#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    index: HashMap<String, usize>,
    names: Vec<String>,
    roads: Vec<Vec<Road>>,
    starts: Vec<String>,
    goals: Vec<String>,
    estimates: HashMap<String, Cost>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text form described in the module docs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphParseError`] for an unrecognised line or a negative
    /// cost. Line numbers are 1-based.
    pub fn parse(text: &str) -> Result<Self, GraphParseError> {
        let mut graph = Self::new();
        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let body = raw.split('#').next().unwrap_or_default().trim();
            let words: Vec<&str> = body.split_whitespace().collect();
            let malformed = || GraphParseError::Malformed {
                line,
                text: raw.to_string(),
            };
            match words.as_slice() {
                [] => {}
                ["start", name] => {
                    graph.add_start(name);
                }
                ["goal", name] => {
                    graph.add_goal(name);
                }
                ["h", name, cost] => {
                    let cost = cost.parse().map_err(|_| malformed())?;
                    graph.set_estimate(name, cost);
                }
                [from, arrow @ ("->" | "--"), to, cost] => {
                    let cost: Cost = cost.parse().map_err(|_| malformed())?;
                    if cost < 0 {
                        return Err(GraphParseError::NegativeCost { line, cost });
                    }
                    graph.add_road(from, to, cost);
                    if *arrow == "--" {
                        graph.add_road(to, from, cost);
                    }
                }
                _ => return Err(malformed()),
            }
        }
        Ok(graph)
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.index.insert(name.to_string(), i);
        self.names.push(name.to_string());
        self.roads.push(Vec::new());
        i
    }

    /// Add a one-way road. Both places are created if missing.
    pub fn add_road(&mut self, from: &str, to: &str, cost: Cost) -> &mut Self {
        self.intern(to);
        let i = self.intern(from);
        self.roads[i].push(Road {
            to: to.to_string(),
            cost,
        });
        self
    }

    pub fn add_start(&mut self, name: &str) -> &mut Self {
        self.intern(name);
        if !self.starts.iter().any(|s| s == name) {
            self.starts.push(name.to_string());
        }
        self
    }

    pub fn add_goal(&mut self, name: &str) -> &mut Self {
        self.intern(name);
        if !self.goals.iter().any(|g| g == name) {
            self.goals.push(name.to_string());
        }
        self
    }

    pub fn set_estimate(&mut self, name: &str, cost: Cost) -> &mut Self {
        self.estimates.insert(name.to_string(), cost);
        self
    }

    /// Places in declaration order.
    #[must_use]
    pub fn places(&self) -> &[String] {
        &self.names
    }

    /// The heuristic declared with `h` lines.
    #[must_use]
    pub fn table_heuristic(&self) -> TableHeuristic {
        TableHeuristic {
            table: self.estimates.clone(),
        }
    }

    fn roads_from(&self, state: &str) -> Result<&[Road], DomainError> {
        self.index
            .get(state)
            .map(|&i| self.roads[i].as_slice())
            .ok_or_else(|| DomainError::UnknownState {
                state: state.to_string(),
            })
    }
}

impl Space for WeightedGraph {
    type State = String;
    type Action = Road;

    fn neighbors(&self, state: &String) -> Result<Vec<(Road, String)>, DomainError> {
        Ok(self
            .roads_from(state)?
            .iter()
            .map(|r| (r.clone(), r.to.clone()))
            .collect())
    }

    /// `place [start] [goal]: to x (c), to y (c)`.
    fn render<P>(&self, problem: &P, state: &String) -> Result<String, DomainError>
    where
        P: Problem<Space = Self>,
    {
        let roads = self.roads_from(state)?;
        let mut out = state.clone();
        if problem.starts().contains(state) {
            out.push_str(" [start]");
        }
        if problem.is_goal(state) {
            out.push_str(" [goal]");
        }
        out.push(':');
        let listed: Vec<String> = roads.iter().map(|r| format!(" {r} ({})", r.cost)).collect();
        out.push_str(&listed.join(","));
        Ok(out)
    }
}

impl PredefinedSpace for WeightedGraph {
    fn starting_states(&self) -> Vec<String> {
        self.starts.clone()
    }

    fn goal_states(&self) -> Vec<String> {
        self.goals.clone()
    }
}

/// Estimates looked up by place name; 0 for places without an entry.
#[derive(Debug, Clone, Default)]
pub struct TableHeuristic {
    table: HashMap<String, Cost>,
}

impl TableHeuristic {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (String, Cost)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
        }
    }
}

impl Heuristic<String> for TableHeuristic {
    fn estimate(&self, state: &String) -> Cost {
        self.table.get(state).copied().unwrap_or(0)
    }
}
