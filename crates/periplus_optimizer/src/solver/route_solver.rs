use tracing::{debug, instrument};

use crate::{
    schedule::{self, RouteResult},
    solver::{
        exact::solve_exact,
        ls::local_search,
        nearest_neighbor::nearest_neighbor_tour,
        solver_params::{SearchState, SolverParams},
        tour::Tour,
    },
    timer_debug,
    trip::{stop::StopIdx, trip_problem::TripProblem},
};

/// Orders the stops of a validated trip problem.
///
/// Small instances go to the exact subset search; larger ones, and instances
/// where the exact search runs out of budget or hits unreachable edges, take
/// a greedy nearest-neighbor tour and polish it with local search. Every
/// call returns a complete permutation, whichever path produced it.
#[instrument(skip_all, level = "debug")]
pub fn solve_route(problem: &TripProblem, params: &SolverParams) -> Tour {
    let mut state = SearchState::new();

    if problem.num_stops() <= 1 {
        return Tour::new((0..problem.num_stops()).map(StopIdx::new).collect());
    }

    if problem.num_stops() <= params.exact_search_limit
        && let Some(tour) = solve_exact(problem, params, &state)
    {
        debug!(
            "exact search ordered {} stops in {}s of travel",
            problem.num_stops(),
            tour.travel_seconds(problem.matrix())
        );
        return tour;
    }

    let mut tour = timer_debug!("Construction", nearest_neighbor_tour(problem));
    let applied = local_search::improve(problem, &mut tour, params, &mut state);

    debug!(
        "greedy seed improved by {} moves to {}s of travel",
        applied,
        tour.travel_seconds(problem.matrix())
    );

    tour
}

/// Full pipeline: order the stops, then lay the order out on the clock.
pub fn optimize(problem: &TripProblem, params: &SolverParams) -> RouteResult {
    let tour = solve_route(problem, params);
    schedule::build_schedule(problem, &tour)
}
