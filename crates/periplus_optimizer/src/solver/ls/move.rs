use crate::{
    solver::{
        ls::{or_opt::OrOptOperator, two_opt::TwoOptOperator},
        tour::Tour,
    },
    trip::trip_problem::TripProblem,
};

pub trait LocalSearchOperator {
    /// Enumerates every candidate move touching only positions `0..free_end`
    /// of the tour. Positions at `free_end` and beyond hold a pinned end stop
    /// and are never rearranged.
    fn generate_moves<C>(tour: &Tour, free_end: usize, consumer: C)
    where
        C: FnMut(Self),
        Self: Sized;

    /// Travel cost change of applying the move, negative when improving.
    fn delta(&self, problem: &TripProblem, tour: &Tour) -> i64;

    fn apply(&self, tour: &mut Tour);
}

#[derive(Debug)]
pub enum LocalSearchMove {
    /// 2-Opt operator that reverses the segment between two positions.
    TwoOpt(TwoOptOperator),
    /// Or-Opt operator that moves a short run of stops to another position.
    OrOpt(OrOptOperator),
}

impl LocalSearchMove {
    pub fn operator_name(&self) -> &'static str {
        match self {
            LocalSearchMove::TwoOpt { .. } => "Two-Opt",
            LocalSearchMove::OrOpt { .. } => "Or-Opt",
        }
    }

    pub fn delta(&self, problem: &TripProblem, tour: &Tour) -> i64 {
        match self {
            LocalSearchMove::TwoOpt(op) => op.delta(problem, tour),
            LocalSearchMove::OrOpt(op) => op.delta(problem, tour),
        }
    }

    pub fn apply(&self, tour: &mut Tour) {
        match self {
            LocalSearchMove::TwoOpt(op) => op.apply(tour),
            LocalSearchMove::OrOpt(op) => op.apply(tour),
        }
    }
}
