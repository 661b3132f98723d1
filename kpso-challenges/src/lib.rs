/// Scale applied to relative quality scores before rounding to an integer.
pub const QUALITY_PRECISION: i32 = 1_000_000;

pub mod knapsack;
