use crate::{
    solver::{ls::r#move::LocalSearchOperator, tour::Tour},
    trip::trip_problem::TripProblem,
};

/// **2-Opt**
///
/// Reverses the sequence of stops between `from` and `to` (inclusive).
/// This eliminates crossing edges in the walking path.
///
/// ```text
/// BEFORE:
///    origin ... (prev) --x--> [from] -> ... -> [to] --x--> (next) ...
///
/// AFTER (segment reversed):
///    origin ... (prev) -----> [to] -> ... -> [from] -----> (next) ...
///
/// Edges removed: (prev->from), (to->next)
/// Edges added:   (prev->to),   (from->next)
/// ```
#[derive(Debug)]
pub struct TwoOptOperator {
    params: TwoOptParams,
}

#[derive(Debug)]
pub struct TwoOptParams {
    pub from: usize,
    pub to: usize,
}

impl TwoOptOperator {
    pub fn new(params: TwoOptParams) -> Self {
        if params.from >= params.to {
            panic!("TwoOpt: cannot have from >= to")
        }

        TwoOptOperator { params }
    }

    fn symmetric_delta(&self, problem: &TripProblem, tour: &Tour) -> i64 {
        let matrix = problem.matrix();

        let prev = tour.previous_node(self.params.from);
        let from = tour.node(self.params.from);
        let to = tour.node(self.params.to);

        let mut current = matrix.cost(prev, from) as i64;
        let mut new = matrix.cost(prev, to) as i64;

        if let Some(next) = tour.next_node(self.params.to) {
            current += matrix.cost(to, next) as i64;
            new += matrix.cost(from, next) as i64;
        }

        new - current
    }

    /// The interior arcs flip direction, so the whole span is recosted.
    fn asymmetric_delta(&self, problem: &TripProblem, tour: &Tour) -> i64 {
        let matrix = problem.matrix();

        let prev = tour.previous_node(self.params.from);

        let mut current = matrix.cost(prev, tour.node(self.params.from)) as i64;
        let mut new = matrix.cost(prev, tour.node(self.params.to)) as i64;

        for position in self.params.from..self.params.to {
            current += matrix.cost(tour.node(position), tour.node(position + 1)) as i64;
            new += matrix.cost(tour.node(position + 1), tour.node(position)) as i64;
        }

        if let Some(next) = tour.next_node(self.params.to) {
            current += matrix.cost(tour.node(self.params.to), next) as i64;
            new += matrix.cost(tour.node(self.params.from), next) as i64;
        }

        new - current
    }
}

impl LocalSearchOperator for TwoOptOperator {
    fn generate_moves<C>(tour: &Tour, free_end: usize, mut consumer: C)
    where
        C: FnMut(Self),
    {
        debug_assert!(free_end <= tour.len());

        if free_end < 2 {
            return; // need at least two movable stops to reverse anything
        }

        for from in 0..free_end - 1 {
            for to in (from + 1)..free_end {
                consumer(TwoOptOperator::new(TwoOptParams { from, to }))
            }
        }
    }

    fn delta(&self, problem: &TripProblem, tour: &Tour) -> i64 {
        if problem.is_symmetric() {
            self.symmetric_delta(problem, tour)
        } else {
            self.asymmetric_delta(problem, tour)
        }
    }

    fn apply(&self, tour: &mut Tour) {
        tour.reverse_segment(self.params.from, self.params.to);
    }
}
