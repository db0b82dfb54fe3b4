//! Hill-climbing execution loop.

use super::config::SearchConfig;
use super::types::{evaluate, ColorState, Evaluation};
use crate::map::REGION_COUNT;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A conflict-free coloring was found (heuristic reached zero).
    GoalReached,

    /// The step budget ran out first.
    StepLimitReached,
}

/// One entry of the search trace.
#[derive(Debug, Clone, Copy)]
pub struct StepRecord {
    /// Outer step index; 0 is the initial state.
    pub step: usize,

    /// The current state after this step.
    pub state: ColorState,

    /// Its evaluation.
    pub eval: Evaluation,
}

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The state the search ended on.
    pub final_state: ColorState,

    /// Evaluation of the final state.
    pub final_eval: Evaluation,

    /// Whether the goal was reached or the step budget exhausted.
    pub outcome: Outcome,

    /// Number of outer steps taken (accepted moves).
    pub steps: usize,

    /// The initial state and every accepted step, in order.
    pub trace: Vec<StepRecord>,
}

/// Executes the stochastic hill climb.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search, seeding the generator from the config (or from
    /// entropy when no seed is given).
    pub fn run(config: &SearchConfig) -> Result<SearchResult, String> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the search with a caller-supplied generator.
    ///
    /// Every random draw goes through `rng`, so a seeded generator
    /// makes the whole run (initial state, every neighbor choice, every
    /// acceptance decision) reproducible.
    pub fn run_with_rng<R: Rng>(
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult, String> {
        config.validate()?;
        let k = config.colors;

        let mut current = ColorState::random(k, rng);
        let mut eval = evaluate(&current, k);

        // Fixed for the whole run; scales the acceptance temperature.
        let initial_cost = eval.cost;

        let mut trace = Vec::with_capacity(config.max_steps + 1);
        trace.push(StepRecord {
            step: 0,
            state: current,
            eval,
        });

        let mut steps = 0;
        while !goal_reached(eval) && steps < config.max_steps {
            let (next, next_eval) = select_neighbor(&current, eval, k, initial_cost, rng);
            current = next;
            eval = next_eval;
            steps += 1;
            trace.push(StepRecord {
                step: steps,
                state: current,
                eval,
            });
        }

        let outcome = if goal_reached(eval) {
            Outcome::GoalReached
        } else {
            Outcome::StepLimitReached
        };

        Ok(SearchResult {
            final_state: current,
            final_eval: eval,
            outcome,
            steps,
            trace,
        })
    }
}

/// Goal test: no adjacent regions share a color.
fn goal_reached(eval: Evaluation) -> bool {
    eval.heuristic == 0
}

/// Generates and probabilistically selects the next state.
///
/// Each attempt recolors one uniformly random region with a uniformly
/// random different color and evaluates the candidate from scratch.
/// Candidates costing more than the current state are discarded
/// outright, so the returned state never worsens the cost; equal-cost
/// candidates are allowed through, giving the search its sideways
/// moves. Non-worsening candidates still face the acceptance gate, and
/// rejected ones are simply replaced by a fresh random attempt. The
/// retry loop is unbounded but terminates quickly in practice, since
/// any non-worsening candidate passes the gate with probability of at
/// least one half.
fn select_neighbor<R: Rng>(
    current: &ColorState,
    current_eval: Evaluation,
    k: usize,
    initial_cost: u32,
    rng: &mut R,
) -> (ColorState, Evaluation) {
    loop {
        let region = rng.random_range(0..REGION_COUNT);
        let mut color = rng.random_range(0..k);
        while color == current.colors[region] {
            color = rng.random_range(0..k);
        }

        let candidate = current.with_color(region, color);
        let candidate_eval = evaluate(&candidate, k);

        if candidate_eval.cost > current_eval.cost {
            continue;
        }
        if accept(current_eval.cost, candidate_eval.cost, initial_cost, rng) {
            return (candidate, candidate_eval);
        }
    }
}

/// Acceptance gate for a non-worsening candidate.
///
/// The temperature `T = current_cost * 10 / initial_cost` starts at 10
/// and shrinks as the cost falls, so large cost drops are increasingly
/// favored as the search closes in on a solution. The gate computes
/// `p = 1 / (1 + exp((current - candidate) / T))` and accepts when a
/// uniform draw exceeds `p`: an improving candidate pushes `p` below
/// one half and is accepted more often than not, a sideways candidate
/// sits exactly at one half.
fn accept<R: Rng>(
    current_cost: u32,
    candidate_cost: u32,
    initial_cost: u32,
    rng: &mut R,
) -> bool {
    if initial_cost == 0 {
        // Unreachable on this map (cost is at least 1 per region), but
        // a zero temperature would make the gate meaningless anyway.
        return true;
    }
    let t = current_cost as f64 * 10.0 / initial_cost as f64;
    let p = 1.0 / (1.0 + ((current_cost as f64 - candidate_cost as f64) / t).exp());
    rng.random_range(0.0..1.0) > p
}
