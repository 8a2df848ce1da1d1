//! Classical search strategies over undirected, weighted graphs.
//!
//! Build a [Graph](graph::Graph), then run one of [dfs], [bfs], [ucs],
//! [greedy] or [astar] (or pick one at runtime with [search]). Each
//! search returns an [Expansion] recording the order nodes were
//! expanded in and the path found, if any.
//!
//! All strategies mark a node visited when it is popped from the
//! frontier, and stop as soon as the goal is popped.

pub mod algorithm;
mod errors;
mod expansion;
pub mod graph;
mod traits;

pub use errors::{ParseGraphError, ParseStrategyError, Result, SearchError};
pub use expansion::Expansion;
pub use graph::Graph;
pub use traits::{Cost, EdgeWeight, Heuristic, NoHeuristic, Uniform, Weight};

pub use algorithm::astar::{astar, astar_with};
pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::dijkstra::{ucs, ucs_with};
pub use algorithm::greedy::greedy;
pub use algorithm::{search, SearchOptions, Searcher, Strategy};
