use anyhow::{anyhow, Result};
use clap::{arg, ArgMatches, Command};
use env_logger::Env;
use kpso_algorithms::knapsack::pso::{OptimizationResult, Solver};
use kpso_challenges::knapsack::{Challenge, Difficulty, Solution};
use kpso_utils::{jsonify, load_json_arg, seed_from_str, seed_to_hex};
use log::{debug, info, LevelFilter};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize, Debug)]
struct SolveOutput {
    result: OptimizationResult,
    solution: Solution,
    feasible: bool,
    greedy_baseline_value: f64,
    quality: Option<i32>,
}

#[derive(Serialize, Debug)]
struct VerifyOutput {
    total_value: f64,
    quality: i32,
}

fn cli() -> Command {
    Command::new("kpso-worker")
        .about("Generates knapsack instances and solves them with particle swarm optimisation")
        .arg_required_else_help(true)
        .arg(arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand(
            Command::new("generate")
                .about("Generates a random instance")
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(<BUDGET> "Capacity as a percentage of the total item weight")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--seed [SEED] "A string used in seed generation")
                        .default_value("0")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("solve")
                .about("Runs the swarm on an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--params [PARAMS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Overrides the instance seed with one derived from a string")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a solution against an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if matches.get_flag("verbose") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("BUDGET").unwrap(),
            sub_m.get_one::<String>("seed").unwrap().clone(),
        ),
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("params").cloned(),
            sub_m.get_one::<String>("seed").cloned(),
        ),
        Some(("verify", sub_m)) => verify(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(num_items: usize, budget: u32, seed: String) -> Result<()> {
    let seed = seed_from_str(&seed);
    debug!("generating instance with seed {}", seed_to_hex(&seed));
    let challenge = Challenge::generate_instance(&seed, &Difficulty { num_items, budget })?;
    println!("{}", jsonify(&challenge)?);
    Ok(())
}

fn solve(instance: String, params: Option<String>, seed: Option<String>) -> Result<()> {
    let mut challenge: Challenge = load_json_arg(&instance)?;
    if let Some(seed) = seed {
        challenge.seed = seed_from_str(&seed);
    }
    let hyperparameters = match params {
        Some(params) => Some(load_json_arg::<Map<String, Value>>(&params)?),
        None => None,
    };
    info!(
        "solving instance with {} items, capacity {}, seed {}",
        challenge.num_items(),
        challenge.capacity,
        seed_to_hex(&challenge.seed)
    );

    let result = Solver::solve(&challenge, &hyperparameters)?;
    let solution = result.to_solution();
    let feasible = challenge.evaluate_total_value(&solution).is_ok();
    let greedy_solution = challenge.compute_greedy_baseline()?;
    let greedy_baseline_value = challenge.evaluate_total_value(&greedy_solution)?;
    let quality = if feasible {
        Some(challenge.evaluate_solution(&solution)?)
    } else {
        None
    };

    println!(
        "{}",
        jsonify(&SolveOutput {
            result,
            solution,
            feasible,
            greedy_baseline_value,
            quality,
        })?
    );
    Ok(())
}

fn verify(sub_m: &ArgMatches) -> Result<()> {
    let challenge: Challenge = load_json_arg(sub_m.get_one::<String>("INSTANCE").unwrap())?;
    let solution: Solution = load_json_arg(sub_m.get_one::<String>("SOLUTION").unwrap())?;
    let total_value = challenge
        .evaluate_total_value(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    let quality = challenge.evaluate_solution(&solution)?;
    println!(
        "{}",
        jsonify(&VerifyOutput {
            total_value,
            quality
        })?
    );
    Ok(())
}
