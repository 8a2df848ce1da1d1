use std::fmt;
use std::str::FromStr;

use crate::errors::ParseStrategyError;

/// The search strategies available through [search](crate::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    Greedy,
    AStar,
}

impl Strategy {
    /// Every strategy, in the order they are usually reported.
    pub fn all() -> impl Iterator<Item = Strategy> {
        [
            Strategy::DepthFirst,
            Strategy::BreadthFirst,
            Strategy::UniformCost,
            Strategy::Greedy,
            Strategy::AStar,
        ]
        .iter()
        .copied()
    }

    /// Short name, as accepted by [FromStr].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
        }
    }

    /// Does this strategy consult the heuristic?
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dfs" => Ok(Strategy::DepthFirst),
            "bfs" => Ok(Strategy::BreadthFirst),
            "ucs" => Ok(Strategy::UniformCost),
            "greedy" => Ok(Strategy::Greedy),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
