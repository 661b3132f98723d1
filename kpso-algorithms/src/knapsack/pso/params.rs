use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PsoParams {
    /// Swarm size
    pub num_particles: usize,

    /// Number of swarm updates; the run never stops early
    pub max_iterations: usize,

    /// Inertia weight (w)
    pub inertia_weight: f64,

    /// Pull towards the particle's personal best (c1)
    pub cognitive_coefficient: f64,

    /// Pull towards the swarm's global best (c2)
    pub social_coefficient: f64,
}

impl Default for PsoParams {
    fn default() -> Self {
        Self {
            num_particles: 20,
            max_iterations: 50,
            inertia_weight: 0.7,
            cognitive_coefficient: 1.5,
            social_coefficient: 1.5,
        }
    }
}

impl PsoParams {
    /// Overlays recognised hyperparameters on the defaults. Unknown keys are ignored.
    pub fn initialize(h: &Option<Map<String, Value>>) -> Result<Self> {
        let mut p = Self::default();
        if let Some(m) = h {
            if let Some(v) = get_usize(m, &["num_particles"])? { p.num_particles = v; }
            if let Some(v) = get_usize(m, &["max_iterations"])? { p.max_iterations = v; }
            if let Some(v) = get_f64(m, &["w", "inertia_weight"])? { p.inertia_weight = v; }
            if let Some(v) = get_f64(m, &["c1", "cognitive_coefficient"])? { p.cognitive_coefficient = v; }
            if let Some(v) = get_f64(m, &["c2", "social_coefficient"])? { p.social_coefficient = v; }
        }
        Ok(p)
    }
}

fn lookup<'a>(
    m: &'a Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    keys.iter().find_map(|&k| m.get(k).map(|v| (k, v)))
}

fn get_usize(m: &Map<String, Value>, keys: &[&'static str]) -> Result<Option<usize>> {
    match lookup(m, keys) {
        None => Ok(None),
        Some((k, v)) => v
            .as_u64()
            .map(|v| Some(v as usize))
            .ok_or_else(|| {
                anyhow!("Hyperparameter '{}' must be a non-negative integer, got {}", k, v)
            }),
    }
}

fn get_f64(m: &Map<String, Value>, keys: &[&'static str]) -> Result<Option<f64>> {
    match lookup(m, keys) {
        None => Ok(None),
        Some((k, v)) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| anyhow!("Hyperparameter '{}' must be a number, got {}", k, v)),
    }
}
