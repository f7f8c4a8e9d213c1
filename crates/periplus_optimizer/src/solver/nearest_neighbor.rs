use crate::{
    solver::tour::Tour,
    trip::{stop::StopIdx, travel_time_matrix::TourNode, trip_problem::TripProblem},
};

/// Greedy construction: starting at the origin, repeatedly walk to the
/// closest unvisited stop. Ties go to the lowest stop index. A pinned end
/// stop is held back until every other stop has been placed.
///
/// Always yields a complete tour, which makes it both the seed for local
/// search and the answer of last resort when the exact search gives up.
pub fn nearest_neighbor_tour(problem: &TripProblem) -> Tour {
    let num_stops = problem.num_stops();
    let end_stop = problem.end_stop();

    let mut visited = vec![false; num_stops];
    let mut order = Vec::with_capacity(num_stops);
    let mut current = TourNode::Origin;

    let free_count = num_stops - end_stop.map_or(0, |_| 1);

    for _ in 0..free_count {
        let mut best: Option<(u64, StopIdx)> = None;

        for index in 0..num_stops {
            let stop = StopIdx::new(index);

            if visited[index] || end_stop == Some(stop) {
                continue;
            }

            let cost = problem.matrix().cost(current, stop.into());

            if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                best = Some((cost, stop));
            }
        }

        let Some((_, next)) = best else {
            break;
        };

        visited[next.get()] = true;
        order.push(next);
        current = next.into();
    }

    if let Some(end) = end_stop {
        order.push(end);
    }

    Tour::new(order)
}
