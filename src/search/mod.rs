//! Stochastic hill climbing with sideways moves.
//!
//! A single-solution trajectory search. Each step recolors one random
//! region and accepts the candidate through a probability gate that only
//! ever considers non-worsening moves, so the cost trajectory is
//! monotonically non-increasing. Sideways moves (equal cost) keep the
//! search from stalling on plateaus; a hard step budget keeps them from
//! running forever.
//!
//! # References
//!
//! - Russell & Norvig, "Artificial Intelligence: A Modern Approach",
//!   ch. 4 (local search, hill climbing variants)
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated
//!   Annealing" (the shape of the acceptance gate)

mod config;
mod runner;
mod types;

pub use config::SearchConfig;
pub use runner::{Outcome, SearchResult, SearchRunner, StepRecord};
pub use types::{evaluate, ColorState, Evaluation};
