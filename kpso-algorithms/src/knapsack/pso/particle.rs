use super::{params::PsoParams, uniform::UniformSource};
use kpso_challenges::knapsack::Challenge;

/// Velocities are clamped to `[-VELOCITY_LIMIT, VELOCITY_LIMIT]` after every update.
pub const VELOCITY_LIMIT: f64 = 4.0;

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn bit(selected: bool) -> f64 {
    if selected {
        1.0
    } else {
        0.0
    }
}

/// One candidate selection with its velocity and best visited state.
///
/// The personal best position and fitness only ever change together.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec<bool>,
    velocity: Vec<f64>,
    personal_best_position: Vec<bool>,
    personal_best_fitness: f64,
    fitness: f64,
}

impl Particle {
    /// Draws every bit with probability 0.5, then every velocity uniformly from `[-1, 1]`.
    pub fn random<U: UniformSource>(challenge: &Challenge, source: &mut U) -> Self {
        let n = challenge.num_items();
        let position: Vec<bool> = (0..n).map(|_| source.next_uniform() < 0.5).collect();
        let velocity: Vec<f64> = (0..n).map(|_| 2.0 * source.next_uniform() - 1.0).collect();
        let fitness = challenge.evaluate_fitness(&position);
        Self {
            personal_best_position: position.clone(),
            personal_best_fitness: fitness,
            position,
            velocity,
            fitness,
        }
    }

    pub fn position(&self) -> &[bool] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn personal_best_position(&self) -> &[bool] {
        &self.personal_best_position
    }

    pub fn personal_best_fitness(&self) -> f64 {
        self.personal_best_fitness
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Moves the particle one step towards its personal best and `global_best_position`,
    /// then re-evaluates it. Returns the new fitness.
    pub(crate) fn step<U: UniformSource>(
        &mut self,
        global_best_position: &[bool],
        params: &PsoParams,
        challenge: &Challenge,
        source: &mut U,
    ) -> f64 {
        for d in 0..self.position.len() {
            let r1 = source.next_uniform();
            let r2 = source.next_uniform();
            let x = bit(self.position[d]);
            let cognitive =
                params.cognitive_coefficient * r1 * (bit(self.personal_best_position[d]) - x);
            let social = params.social_coefficient * r2 * (bit(global_best_position[d]) - x);
            let v = params.inertia_weight * self.velocity[d] + cognitive + social;
            self.velocity[d] = v.clamp(-VELOCITY_LIMIT, VELOCITY_LIMIT);

            let p = sigmoid(self.velocity[d]);
            self.position[d] = source.next_uniform() < p;
        }

        self.fitness = challenge.evaluate_fitness(&self.position);
        if self.fitness > self.personal_best_fitness {
            self.personal_best_position.clone_from(&self.position);
            self.personal_best_fitness = self.fitness;
        }
        self.fitness
    }
}
