//! Command-line front end: parse the color budget, run the search, and
//! print the trace.

use std::env;
use std::process::ExitCode;

use mapclimb::map::{COLOR_NAMES, REGION_NAMES};
use mapclimb::search::{Outcome, SearchConfig, SearchRunner, StepRecord};

fn main() -> ExitCode {
    let Some(arg) = env::args().nth(1) else {
        eprintln!("usage: mapclimb <k>   (number of colors, 1 < k <= 13)");
        return ExitCode::FAILURE;
    };

    let k = match arg.parse::<usize>() {
        Ok(k) => k,
        Err(_) => {
            eprintln!("not a number: {arg}");
            eprintln!("usage: mapclimb <k>   (number of colors, 1 < k <= 13)");
            return ExitCode::FAILURE;
        }
    };

    let config = SearchConfig::default().with_colors(k);
    let result = match SearchRunner::run(&config) {
        Ok(result) => result,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    for record in &result.trace {
        if record.step == 0 {
            println!("Current State:");
        } else {
            println!("Step {}:", record.step);
        }
        print_record(record);
    }

    match result.outcome {
        Outcome::GoalReached => println!("Goal State Reached!"),
        Outcome::StepLimitReached => println!(
            "Goal not reached, the search hit the maximum number of steps permitted ({})",
            config.max_steps
        ),
    }

    ExitCode::SUCCESS
}

fn print_record(record: &StepRecord) {
    println!("Cost: {}", record.eval.cost);
    println!("Heuristic: {}", record.eval.heuristic);
    let line = REGION_NAMES
        .iter()
        .zip(record.state.colors.iter())
        .map(|(region, &color)| format!("{region} : {}", COLOR_NAMES[color]))
        .collect::<Vec<_>>()
        .join("  |  ");
    println!("{line}");
    println!();
}
