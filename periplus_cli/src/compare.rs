use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{anyhow, bail};
use clap::Args;
use comfy_table::{Table, presets};
use periplus_optimizer::{
    json::trip_plan_input::TripPlanInput,
    solver::{
        route_solver::solve_route,
        solver_params::{SolverParams, Termination},
        tour::Tour,
    },
    trip::{stop::StopIdx, travel_time_matrix::TourNode, trip_problem::TripProblem},
};

use crate::parsers;

#[derive(Args)]
pub struct CompareArgs {
    /// The trip plan to score against
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Comma separated stop ids; repeat the flag for each candidate order
    #[arg(short, long = "order", required = true)]
    orders: Vec<String>,

    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "5s")]
    timeout: jiff::SignedDuration,
}

pub fn run(args: CompareArgs) -> Result<(), anyhow::Error> {
    let file = File::open(args.input)?;
    let input: TripPlanInput = serde_json::from_reader(BufReader::new(file))?;

    let problem = input.create_problem()?;

    let params = SolverParams {
        terminations: vec![Termination::Duration(args.timeout)],
        ..SolverParams::default()
    };

    let best = solve_route(&problem, &params);

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["Order", "Legs (s)", "Total (s)"]);

    table.add_row(vec![
        format!("optimizer: {}", format_tour(&problem, &best)),
        format_legs(&problem, &best),
        best.travel_seconds(problem.matrix()).to_string(),
    ]);

    for order in &args.orders {
        let tour = parse_order(&problem, order)?;

        table.add_row(vec![
            format_tour(&problem, &tour),
            format_legs(&problem, &tour),
            tour.travel_seconds(problem.matrix()).to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}

/// Parses a comma separated id list into a tour, requiring a full
/// permutation of the problem's stops.
fn parse_order(problem: &TripProblem, order: &str) -> Result<Tour, anyhow::Error> {
    let stops = order
        .split(',')
        .map(str::trim)
        .map(|id| {
            problem
                .stop_idx(id)
                .ok_or_else(|| anyhow!("unknown stop id '{id}'"))
        })
        .collect::<Result<Vec<StopIdx>, _>>()?;

    let mut seen = vec![false; problem.num_stops()];
    for &stop in &stops {
        if seen[stop.get()] {
            bail!("stop '{}' appears twice", problem.stop(stop).stop_id());
        }
        seen[stop.get()] = true;
    }

    if stops.len() != problem.num_stops() {
        bail!(
            "order lists {} of {} stops",
            stops.len(),
            problem.num_stops()
        );
    }

    Ok(Tour::new(stops))
}

fn format_tour(problem: &TripProblem, tour: &Tour) -> String {
    tour.stops()
        .iter()
        .map(|&index| problem.stop(index).stop_id())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_legs(problem: &TripProblem, tour: &Tour) -> String {
    let matrix = problem.matrix();
    let mut legs = Vec::with_capacity(tour.len());
    let mut previous = TourNode::Origin;

    for position in 0..tour.len() {
        let node = tour.node(position);
        legs.push(matrix.travel_seconds(previous, node).to_string());
        previous = node;
    }

    legs.join(" + ")
}
