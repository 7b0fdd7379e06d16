//! Navigation graphs and shortest-path search.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod astar;
pub mod finder;

pub use adjacency::{Adjacency, AdjacencyMatrix};
pub use astar::{AStar, AStarQuery};
pub use finder::{PathFinder, PathFinding};
