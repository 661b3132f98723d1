use crate::knapsack::{Challenge, Solution};
use anyhow::Result;
use serde_json::{Map, Value};

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    _hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    // Pair each item index with its value-weight ratio. Weightless items come first
    let mut item_ratios: Vec<(usize, f64)> = challenge
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let ratio = if item.weight > 0.0 {
                item.value / item.weight
            } else {
                f64::INFINITY
            };
            (i, ratio)
        })
        .collect();

    // Sort the list of ratios in descending order
    item_ratios.sort_by(|a, b| b.1.total_cmp(&a.1));

    // Greedily add items while the running weight stays within capacity
    let mut is_selected = vec![false; challenge.num_items()];
    let mut added = Vec::new();
    let mut total_weight = 0.0;
    for &(item, _) in &item_ratios {
        let weight = challenge.items[item].weight;
        if total_weight + weight <= challenge.capacity {
            total_weight += weight;
            is_selected[item] = true;
            added.push(item);
        }
    }

    // Verification sums in index order, which can round above the running total
    while challenge.selection_totals(&is_selected).0 > challenge.capacity {
        match added.pop() {
            Some(item) => is_selected[item] = false,
            None => break,
        }
    }

    save_solution(&Solution::from_position(&is_selected))
}
