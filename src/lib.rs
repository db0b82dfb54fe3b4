//! Stochastic hill-climbing search for coloring the map of Canada.
//!
//! Colors the 13 Canadian provinces and territories with a user-supplied
//! budget of `k` colors so that no two adjacent regions share a color.
//! The search is a stochastic hill climb that permits sideways moves:
//! neighbors are produced by recoloring a single random region, and a
//! candidate that does not worsen the cost is accepted through a
//! logistic probability gate scaled by how far the cost has fallen
//! since the start of the run.
//!
//! # Architecture
//!
//! - [`map`]: the fixed map model (region names, color names, and the
//!   adjacency matrix). Constant for the process lifetime.
//! - [`search`]: the evaluator computing the heuristic and cost of a
//!   coloring, and the search driver running the random initial state,
//!   neighbor selection, and goal-or-step-limit loop.
//!
//! The map topology is deliberately not configurable; this crate solves
//! one concrete instance of map coloring, not graph coloring in general.

pub mod map;
pub mod search;
