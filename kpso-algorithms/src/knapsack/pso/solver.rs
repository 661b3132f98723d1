use super::{particle::Particle, params::PsoParams, uniform::UniformSource};
use kpso_challenges::knapsack::{Challenge, Item, Solution};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    pub best_position: Vec<bool>,
    pub best_fitness: f64,
    pub selected_items: Vec<Item>,
    pub total_weight: f64,
    pub total_value: f64,
    pub convergence_history: Vec<f64>,
}

impl OptimizationResult {
    pub fn to_solution(&self) -> Solution {
        Solution::from_position(&self.best_position)
    }
}

/// Binary PSO over the item-selection space of one challenge.
///
/// The swarm is initialised on construction, so the global best is meaningful before
/// [`optimize`](Self::optimize) runs. Particles are updated in order against the live
/// global best: an improvement found by one particle is seen by the particles updated
/// after it in the same iteration.
pub struct PsoKnapsackSolver<'a, U: UniformSource> {
    challenge: &'a Challenge,
    params: PsoParams,
    source: U,
    particles: Vec<Particle>,
    global_best_position: Vec<bool>,
    global_best_fitness: f64,
    convergence_history: Vec<f64>,
}

impl<'a, U: UniformSource> PsoKnapsackSolver<'a, U> {
    pub fn new(challenge: &'a Challenge, params: PsoParams, source: U) -> Self {
        let mut solver = Self {
            challenge,
            params,
            source,
            particles: Vec::with_capacity(params.num_particles),
            global_best_position: vec![false; challenge.num_items()],
            global_best_fitness: f64::NEG_INFINITY,
            convergence_history: Vec::with_capacity(params.max_iterations),
        };
        solver.initialize_swarm();
        solver
    }

    fn initialize_swarm(&mut self) {
        for _ in 0..self.params.num_particles {
            let particle = Particle::random(self.challenge, &mut self.source);
            if particle.fitness() > self.global_best_fitness {
                self.global_best_fitness = particle.fitness();
                self.global_best_position = particle.position().to_vec();
            }
            self.particles.push(particle);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn global_best_position(&self) -> &[bool] {
        &self.global_best_position
    }

    pub fn global_best_fitness(&self) -> f64 {
        self.global_best_fitness
    }

    pub fn convergence_history(&self) -> &[f64] {
        &self.convergence_history
    }

    fn update_particle(&mut self, index: usize) {
        let particle = &mut self.particles[index];
        let fitness = particle.step(
            &self.global_best_position,
            &self.params,
            self.challenge,
            &mut self.source,
        );
        if fitness > self.global_best_fitness {
            self.global_best_fitness = fitness;
            self.global_best_position.clear();
            self.global_best_position.extend_from_slice(particle.position());
        }
    }

    /// Updates every particle once and records the global best fitness.
    pub fn iterate(&mut self) {
        for index in 0..self.particles.len() {
            self.update_particle(index);
        }
        self.convergence_history.push(self.global_best_fitness);
        debug!(
            "iteration {}: global best fitness {}",
            self.convergence_history.len(),
            self.global_best_fitness
        );
    }

    /// Runs `max_iterations` iterations and reports the best selection found.
    pub fn optimize(mut self) -> OptimizationResult {
        for _ in 0..self.params.max_iterations {
            self.iterate();
        }
        let result = self.result();
        info!(
            "pso finished after {} iterations: fitness {}, value {}, weight {}/{}",
            self.convergence_history.len(),
            result.best_fitness,
            result.total_value,
            result.total_weight,
            self.challenge.capacity
        );
        result
    }

    /// Snapshot of the current global best.
    pub fn result(&self) -> OptimizationResult {
        let selected_items: Vec<Item> = self
            .challenge
            .items
            .iter()
            .zip(&self.global_best_position)
            .filter(|(_, selected)| **selected)
            .map(|(item, _)| item.clone())
            .collect();
        OptimizationResult {
            best_position: self.global_best_position.clone(),
            best_fitness: self.global_best_fitness,
            total_weight: selected_items.iter().map(|item| item.weight).sum(),
            total_value: selected_items.iter().map(|item| item.value).sum(),
            selected_items,
            convergence_history: self.convergence_history.clone(),
        }
    }
}
