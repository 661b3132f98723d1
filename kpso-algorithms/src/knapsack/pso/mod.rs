use anyhow::{anyhow, Result};
use kpso_challenges::knapsack::*;
use serde_json::{Map, Value};
mod params;
mod particle;
mod solver;
mod uniform;
pub use params::PsoParams;
pub use particle::{sigmoid, Particle, VELOCITY_LIMIT};
pub use solver::{OptimizationResult, PsoKnapsackSolver};
pub use uniform::{RngSource, UniformSource};

pub struct Solver;

impl Solver {
    /// Runs the swarm with a generator seeded from the challenge seed.
    pub fn solve(
        challenge: &Challenge,
        hyperparameters: &Option<Map<String, Value>>,
    ) -> Result<OptimizationResult> {
        let params = PsoParams::initialize(hyperparameters)?;
        let solver = PsoKnapsackSolver::new(challenge, params, RngSource::seeded(&challenge.seed));
        Ok(solver.optimize())
    }
}

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let result = Solver::solve(challenge, hyperparameters)?;
    let solution = result.to_solution();
    match challenge.evaluate_total_value(&solution) {
        Ok(_) => save_solution(&solution),
        Err(e) => Err(anyhow!("No feasible solution found: {}", e)),
    }
}
