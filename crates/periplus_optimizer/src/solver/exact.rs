use tracing::debug;

use crate::{
    solver::{
        solver_params::{SearchState, SolverParams},
        tour::Tour,
    },
    trip::{
        stop::StopIdx,
        travel_time_matrix::{TourNode, TravelTimeMatrix},
        trip_problem::TripProblem,
    },
};

const BUDGET_CHECK_INTERVAL: usize = 256;

/// Held-Karp subset dynamic program, oriented tail-first.
///
/// `finish[mask * m + j]` is the cheapest cost to complete the walk from free
/// stop `j`, visiting exactly the free stops in `mask` and then taking the
/// final leg to the pinned end stop if one is set. A pinned end stop never
/// enters a mask. The optimal order is rebuilt front to back from the
/// `parent` table, so every equal-cost choice resolves to the lowest stop
/// index and reruns give the same order.
///
/// Returns `None` when the budget runs out mid-search or when even the
/// optimal order would have to use an unreachable edge. Both cases fall back
/// to the greedy construction.
pub(crate) fn solve_exact(
    problem: &TripProblem,
    params: &SolverParams,
    state: &SearchState,
) -> Option<Tour> {
    let matrix = problem.matrix();
    let end_stop = problem.end_stop();

    let free: Vec<StopIdx> = (0..problem.num_stops())
        .map(StopIdx::new)
        .filter(|&stop| Some(stop) != end_stop)
        .collect();

    let m = free.len();

    if m == 0 {
        return Some(Tour::new(end_stop.into_iter().collect()));
    }

    let size = 1usize << m;
    let mut finish = vec![u64::MAX; size * m];
    let mut parent = vec![usize::MAX; size * m];

    for (j, &stop) in free.iter().enumerate() {
        finish[j] = match end_stop {
            Some(end) => matrix.cost(stop.into(), end.into()),
            None => 0,
        };
    }

    for mask in 1..size {
        if mask % BUDGET_CHECK_INTERVAL == 0 && params.terminated(state) {
            debug!("exact search ran out of budget after {mask} of {size} subsets");
            return None;
        }

        for j in 0..m {
            if mask & (1 << j) != 0 {
                continue;
            }

            let slot = mask * m + j;

            for k in 0..m {
                if mask & (1 << k) == 0 {
                    continue;
                }

                let rest = mask & !(1 << k);
                let candidate = matrix.cost(free[j].into(), free[k].into()) + finish[rest * m + k];

                if candidate < finish[slot] {
                    finish[slot] = candidate;
                    parent[slot] = k;
                }
            }
        }
    }

    let full = size - 1;
    let mut best_total = u64::MAX;
    let mut best_first = None;

    for j in 0..m {
        let rest = full & !(1 << j);
        let total = matrix.cost(TourNode::Origin, free[j].into()) + finish[rest * m + j];

        if total < best_total {
            best_total = total;
            best_first = Some(j);
        }
    }

    let best_first = best_first?;

    if best_total >= TravelTimeMatrix::UNREACHABLE as u64 {
        debug!("optimal order needs an unreachable edge, leaving it to the heuristic");
        return None;
    }

    // walk the parent table from the first stop down to the empty mask
    let mut order = Vec::with_capacity(problem.num_stops());
    let mut mask = full & !(1 << best_first);
    let mut current = best_first;
    order.push(free[current]);

    while mask != 0 {
        current = parent[mask * m + current];
        order.push(free[current]);
        mask &= !(1 << current);
    }

    if let Some(end) = end_stop {
        order.push(end);
    }

    Some(Tour::new(order))
}
