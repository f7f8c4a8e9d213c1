use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::{Table, presets};
use periplus_optimizer::{
    json::trip_plan_input::TripPlanInput,
    schedule::RouteResult,
    solver::{
        route_solver,
        solver_params::{SolverParams, Termination},
    },
};
use tracing::{info, warn};

use crate::parsers;

#[derive(Args)]
pub struct OptimizeArgs {
    /// The trip plan to optimize
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "5s")]
    timeout: jiff::SignedDuration,

    /// Largest stop count solved exactly
    #[arg(long, default_value_t = 12)]
    exact_limit: usize,

    /// Print the itinerary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: OptimizeArgs) -> Result<(), anyhow::Error> {
    let file = File::open(args.input)?;
    let input: TripPlanInput = serde_json::from_reader(BufReader::new(file))?;

    let problem = input.create_problem()?;

    let params = SolverParams {
        exact_search_limit: args.exact_limit,
        terminations: vec![Termination::Duration(args.timeout)],
    };

    let result = route_solver::optimize(&problem, &params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_itinerary(&result);

    info!("total duration: {:#}", result.total_duration());

    if result.exceeds_end_time() {
        warn!("the itinerary does not fit the requested time frame");
    }

    Ok(())
}

fn print_itinerary(result: &RouteResult) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["#", "Stop", "Arrival", "Departure", "Dwell"]);

    for stop in result.stops() {
        let dwell = stop.departure_time().duration_since(stop.arrival_time());

        table.add_row(vec![
            stop.order().to_string(),
            stop.name().to_owned(),
            stop.arrival_time().to_string(),
            stop.departure_time().to_string(),
            format!("{dwell:#}"),
        ]);
    }

    println!("{table}");
}
