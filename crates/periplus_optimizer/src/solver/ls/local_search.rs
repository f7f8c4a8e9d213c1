use tracing::{debug, instrument};

use crate::{
    solver::{
        ls::{
            r#move::{LocalSearchMove, LocalSearchOperator},
            or_opt::OrOptOperator,
            two_opt::TwoOptOperator,
        },
        solver_params::{SearchState, SolverParams},
        tour::Tour,
    },
    trip::trip_problem::TripProblem,
};

const MAX_DELTA: i64 = 0;

/// When the trip pins a final stop, the last position is frozen and every
/// move must stay inside `0..free_end`.
fn free_segment_end(problem: &TripProblem, tour: &Tour) -> usize {
    if problem.end_stop().is_some() {
        tour.len().saturating_sub(1)
    } else {
        tour.len()
    }
}

/// Runs best-improvement local search until no operator yields a negative
/// delta or a termination fires. Returns the number of applied moves.
#[instrument(skip_all, level = "debug")]
pub(crate) fn improve(
    problem: &TripProblem,
    tour: &mut Tour,
    params: &SolverParams,
    state: &mut SearchState,
) -> usize {
    let free_end = free_segment_end(problem, tour);
    let mut applied = 0;

    loop {
        if params.terminated(state) {
            debug!("Local search terminated after {} moves", applied);
            break;
        }

        state.iteration += 1;

        let mut best_delta = MAX_DELTA;
        let mut best_move: Option<LocalSearchMove> = None;

        TwoOptOperator::generate_moves(tour, free_end, |op| {
            let delta = op.delta(problem, tour);
            if delta < best_delta {
                best_delta = delta;
                best_move = Some(LocalSearchMove::TwoOpt(op));
            }
        });

        OrOptOperator::generate_moves(tour, free_end, |op| {
            let delta = op.delta(problem, tour);
            if delta < best_delta {
                best_delta = delta;
                best_move = Some(LocalSearchMove::OrOpt(op));
            }
        });

        let Some(best_move) = best_move else {
            break;
        };

        debug!(
            "Apply {} (d={}) {:?}",
            best_move.operator_name(),
            best_delta,
            best_move
        );

        best_move.apply(tour);
        applied += 1;
    }

    applied
}
