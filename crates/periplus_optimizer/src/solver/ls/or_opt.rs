use crate::{
    solver::{ls::r#move::LocalSearchOperator, tour::Tour},
    trip::trip_problem::TripProblem,
};

/// **Or-Opt**
///
/// Moves a consecutive run of stops of length `segment_length` starting at
/// `from` so that it sits just before the stop currently at `to`.
///
/// ```text
/// BEFORE:
///    ... (a) -> [from -> ... -> end] -> (b) ... (x) -> (y) ...
///
/// AFTER:
///    ... (a) -> (b) ... (x) -> [from -> ... -> end] -> (y) ...
///
/// Effect: moves a whole cluster of stops to a better place in the walk.
/// ```
#[derive(Debug)]
pub struct OrOptOperator {
    params: OrOptParams,
}

#[derive(Debug)]
pub struct OrOptParams {
    pub from: usize,
    pub to: usize,
    pub segment_length: usize,
}

const MAX_SEGMENT_LENGTH: usize = 3;

impl OrOptOperator {
    pub fn new(params: OrOptParams) -> Self {
        if params.segment_length == 0 {
            panic!("OrOpt: segment length must be at least 1");
        }

        if params.from == params.to {
            panic!(
                "OrOpt: 'from' ({}) and 'to' ({}) positions must be different.",
                params.from, params.to
            );
        }

        if params.to > params.from && params.from + params.segment_length >= params.to {
            panic!("OrOpt: overlapping segments are not allowed.");
        }

        OrOptOperator { params }
    }
}

impl LocalSearchOperator for OrOptOperator {
    fn generate_moves<C>(tour: &Tour, free_end: usize, mut consumer: C)
    where
        C: FnMut(Self),
    {
        debug_assert!(free_end <= tour.len());

        for from in 0..free_end {
            for segment_length in 1..=MAX_SEGMENT_LENGTH.min(free_end - from) {
                for to in 0..from {
                    consumer(OrOptOperator::new(OrOptParams {
                        from,
                        to,
                        segment_length,
                    }));
                }

                for to in (from + segment_length + 1)..=free_end {
                    consumer(OrOptOperator::new(OrOptParams {
                        from,
                        to,
                        segment_length,
                    }));
                }
            }
        }
    }

    /// Three edges are cut and three are added; nothing inside the run
    /// changes direction, so the formula holds for asymmetric matrices too.
    fn delta(&self, problem: &TripProblem, tour: &Tour) -> i64 {
        let matrix = problem.matrix();

        let a = tour.previous_node(self.params.from);
        let from = tour.node(self.params.from);
        let end = tour.node(self.params.from + self.params.segment_length - 1);
        let b = tour.next_node(self.params.from + self.params.segment_length - 1);

        let x = tour.previous_node(self.params.to);
        let y = (self.params.to < tour.len()).then(|| tour.node(self.params.to));

        let mut delta = 0i64;

        delta -= matrix.cost(a, from) as i64;
        delta += matrix.cost(x, from) as i64;

        if let Some(b) = b {
            delta -= matrix.cost(end, b) as i64;
            delta += matrix.cost(a, b) as i64;
        }

        if let Some(y) = y {
            delta -= matrix.cost(x, y) as i64;
            delta += matrix.cost(end, y) as i64;
        }

        delta
    }

    fn apply(&self, tour: &mut Tour) {
        tour.relocate_segment(self.params.from, self.params.segment_length, self.params.to);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        solver::ls::{
            r#move::LocalSearchOperator,
            or_opt::{OrOptOperator, OrOptParams},
        },
        test_utils,
    };

    #[test]
    fn test_or_opt() {
        let (problem, mut tour) = test_utils::create_scatter_instance(8);

        // Move [1, 2, 3] to just before position 5
        let operator = OrOptOperator::new(OrOptParams {
            from: 1,
            segment_length: 3,
            to: 5,
        });

        let travel = tour.travel_seconds(problem.matrix()) as i64;
        let delta = operator.delta(&problem, &tour);
        operator.apply(&mut tour);

        assert_eq!(tour.travel_seconds(problem.matrix()) as i64, travel + delta);
        assert_eq!(
            test_utils::tour_indices(&tour),
            vec![0, 4, 1, 2, 3, 5, 6, 7]
        );

        // Move [3, 5] back to just before position 2
        let operator = OrOptOperator::new(OrOptParams {
            from: 4,
            segment_length: 2,
            to: 2,
        });

        let travel = tour.travel_seconds(problem.matrix()) as i64;
        let delta = operator.delta(&problem, &tour);
        operator.apply(&mut tour);

        assert_eq!(tour.travel_seconds(problem.matrix()) as i64, travel + delta);
        assert_eq!(
            test_utils::tour_indices(&tour),
            vec![0, 4, 3, 5, 1, 2, 6, 7]
        );
    }

    #[test]
    fn test_or_opt_to_before_from() {
        let (problem, mut tour) = test_utils::create_scatter_instance(8);

        let operator = OrOptOperator::new(OrOptParams {
            from: 4,
            segment_length: 2,
            to: 1,
        });

        let travel = tour.travel_seconds(problem.matrix()) as i64;
        let delta = operator.delta(&problem, &tour);
        operator.apply(&mut tour);

        assert_eq!(tour.travel_seconds(problem.matrix()) as i64, travel + delta);
        assert_eq!(
            test_utils::tour_indices(&tour),
            vec![0, 4, 5, 1, 2, 3, 6, 7]
        );
    }

    #[test]
    fn test_or_opt_end_of_tour() {
        let (problem, mut tour) = test_utils::create_scatter_instance(8);

        let operator = OrOptOperator::new(OrOptParams {
            from: 1,
            segment_length: 3,
            to: 8,
        });

        let travel = tour.travel_seconds(problem.matrix()) as i64;
        let delta = operator.delta(&problem, &tour);
        operator.apply(&mut tour);

        assert_eq!(tour.travel_seconds(problem.matrix()) as i64, travel + delta);
        assert_eq!(
            test_utils::tour_indices(&tour),
            vec![0, 4, 5, 6, 7, 1, 2, 3]
        );
    }

    #[test]
    fn test_or_opt_asymmetric() {
        let (problem, mut tour) = test_utils::create_asymmetric_scatter_instance(8);

        let operator = OrOptOperator::new(OrOptParams {
            from: 2,
            segment_length: 2,
            to: 7,
        });

        let travel = tour.travel_seconds(problem.matrix()) as i64;
        let delta = operator.delta(&problem, &tour);
        operator.apply(&mut tour);

        assert_eq!(tour.travel_seconds(problem.matrix()) as i64, travel + delta);
        assert_eq!(
            test_utils::tour_indices(&tour),
            vec![0, 1, 4, 5, 6, 2, 3, 7]
        );
    }

    #[test]
    fn test_or_opt_single_stop_relocate() {
        let (problem, mut tour) = test_utils::create_scatter_instance(6);

        let operator = OrOptOperator::new(OrOptParams {
            from: 0,
            segment_length: 1,
            to: 3,
        });

        let travel = tour.travel_seconds(problem.matrix()) as i64;
        let delta = operator.delta(&problem, &tour);
        operator.apply(&mut tour);

        assert_eq!(tour.travel_seconds(problem.matrix()) as i64, travel + delta);
        assert_eq!(test_utils::tour_indices(&tour), vec![1, 2, 0, 3, 4, 5]);
    }

    #[test]
    fn test_generate_moves_respects_pinned_tail() {
        let (_, tour) = test_utils::create_scatter_instance(6);

        let mut touched_last = false;
        OrOptOperator::generate_moves(&tour, 5, |op| {
            touched_last |= op.params.to > 5 || op.params.from + op.params.segment_length > 5;
        });

        assert!(!touched_last);
    }

    #[test]
    #[should_panic(expected = "OrOpt: overlapping segments are not allowed.")]
    fn test_or_opt_overlapping() {
        OrOptOperator::new(OrOptParams {
            from: 1,
            segment_length: 3,
            to: 4,
        });
    }
}
