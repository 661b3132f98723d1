use crate::QUALITY_PRECISION;
mod baselines;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::HashSet};

/// Fitness deducted per unit of weight above capacity.
pub const PENALTY_COEFFICIENT: f64 = 1000.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub weight: f64,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Difficulty {
    pub num_items: usize,
    /// Capacity as a percentage of the summed item weights.
    pub budget: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Solution {
    pub items: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_position(position: &[bool]) -> Self {
        Self {
            items: position
                .iter()
                .enumerate()
                .filter_map(|(i, &selected)| if selected { Some(i) } else { None })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    #[serde(default)]
    pub seed: [u8; 32],
    pub items: Vec<Item>,
    pub capacity: f64,
}

impl Challenge {
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self {
            seed: [0u8; 32],
            items,
            capacity,
        }
    }

    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        if difficulty.budget > 100 {
            return Err(anyhow!(
                "Budget ({}) must be a percentage between 0 and 100",
                difficulty.budget
            ));
        }
        let mut rng = SmallRng::from_seed(*seed);

        // Weights in [1, 50], values in [1, 100]
        let items: Vec<Item> = (0..difficulty.num_items)
            .map(|i| {
                let id = i as u32 + 1;
                let weight = rng.gen_range(1u32..=50) as f64;
                let value = rng.gen_range(1u32..=100) as f64;
                Item {
                    id,
                    name: format!("item-{}", id),
                    weight,
                    value,
                }
            })
            .collect();

        let total_weight: f64 = items.iter().map(|item| item.weight).sum();
        let capacity = (difficulty.budget as f64 / 100.0 * total_weight).floor();

        Ok(Challenge {
            seed: *seed,
            items,
            capacity,
        })
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Summed `(weight, value)` of the items whose bit is set.
    pub fn selection_totals(&self, position: &[bool]) -> (f64, f64) {
        self.items
            .iter()
            .zip(position)
            .filter(|(_, selected)| **selected)
            .fold((0.0, 0.0), |(weight, value), (item, _)| {
                (weight + item.weight, value + item.value)
            })
    }

    /// Total value of the selection, linearly penalised when it exceeds capacity.
    pub fn evaluate_fitness(&self, position: &[bool]) -> f64 {
        let (total_weight, total_value) = self.selection_totals(position);
        if total_weight > self.capacity {
            total_value - (total_weight - self.capacity) * PENALTY_COEFFICIENT
        } else {
            total_value
        }
    }

    pub fn evaluate_total_value(&self, solution: &Solution) -> Result<f64> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let mut total_weight = 0.0;
        let mut total_value = 0.0;
        for &i in &solution.items {
            let item = self
                .items
                .get(i)
                .ok_or_else(|| anyhow!("Item ({}) is out of bounds", i))?;
            total_weight += item.weight;
            total_value += item.value;
        }

        if total_weight > self.capacity {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        Ok(total_value)
    }

    pub fn compute_greedy_baseline(&self) -> Result<Solution> {
        let solution = RefCell::new(Solution::new());
        let save_solution_fn = |s: &Solution| -> Result<()> {
            *solution.borrow_mut() = s.clone();
            Ok(())
        };
        baselines::greedy::solve_challenge(self, &save_solution_fn, &None)?;
        Ok(solution.into_inner())
    }

    /// Quality of `solution` relative to the greedy baseline, scaled by `QUALITY_PRECISION`.
    pub fn evaluate_solution(&self, solution: &Solution) -> Result<i32> {
        let total_value = self.evaluate_total_value(solution)?;
        let greedy_solution = self.compute_greedy_baseline()?;
        let greedy_total_value = self.evaluate_total_value(&greedy_solution)?;
        let quality = if greedy_total_value > 0.0 {
            (total_value - greedy_total_value) / greedy_total_value
        } else {
            0.0
        };
        let quality = quality.clamp(-10.0, 10.0) * QUALITY_PRECISION as f64;
        Ok(quality.round() as i32)
    }
}
