use jiff::{SignedDuration, Timestamp};

#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Largest stop count handed to the exact subset search. Above it, or
    /// when the exact search gives up, the greedy construction plus local
    /// search takes over.
    pub exact_search_limit: usize,

    pub terminations: Vec<Termination>,
}

#[derive(Clone, Debug)]
pub enum Termination {
    Duration(SignedDuration),
    Iterations(usize),
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            exact_search_limit: 12,
            terminations: vec![
                Termination::Duration(SignedDuration::from_secs(5)),
                Termination::Iterations(10_000),
            ],
        }
    }
}

/// Wall clock start and iteration count of one `solve_route` call, shared by
/// the exact search and the local search so the budget covers both phases.
pub(crate) struct SearchState {
    pub start: Timestamp,
    pub iteration: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            start: Timestamp::now(),
            iteration: 0,
        }
    }
}

impl SolverParams {
    pub(crate) fn terminated(&self, state: &SearchState) -> bool {
        self.terminations.iter().any(|termination| match *termination {
            Termination::Iterations(max_iterations) => state.iteration >= max_iterations,
            Termination::Duration(max_duration) => {
                Timestamp::now().duration_since(state.start) > max_duration
            }
        })
    }
}
