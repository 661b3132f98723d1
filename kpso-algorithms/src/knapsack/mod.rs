// Binary particle swarm optimisation over item selections
pub mod pso;
