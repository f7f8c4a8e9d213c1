use fxhash::FxHashMap;
use jiff::SignedDuration;

use crate::error::OptimizeError;

use super::{
    constraints::TripConstraints,
    stop::{Stop, StopIdx},
    travel_time_matrix::{TourNode, TravelTimeMatrix},
};

/// A validated trip: the stop list, the travel time matrix covering it, and
/// the constraints. Built once per request and immutable afterwards, so the
/// solver and the schedule builder can both borrow it freely.
pub struct TripProblem {
    stops: Vec<Stop>,
    matrix: TravelTimeMatrix,
    constraints: TripConstraints,
    end_stop: Option<StopIdx>,
    stop_indices: FxHashMap<String, StopIdx>,
}

impl TripProblem {
    pub fn new(
        stops: Vec<Stop>,
        matrix: TravelTimeMatrix,
        constraints: TripConstraints,
    ) -> Result<Self, OptimizeError> {
        let expected = stops.len() + 1;
        if matrix.dimension() != expected {
            return Err(OptimizeError::MatrixDimensionMismatch {
                num_stops: stops.len(),
                expected,
                actual: matrix.dimension(),
            });
        }

        if constraints.end_time() <= constraints.start_time() {
            return Err(OptimizeError::EmptyTimeWindow {
                start: constraints.start_time(),
                end: constraints.end_time(),
            });
        }

        let mut stop_indices =
            FxHashMap::with_capacity_and_hasher(stops.len(), Default::default());

        for (index, stop) in stops.iter().enumerate() {
            let previous = stop_indices.insert(stop.stop_id().to_owned(), StopIdx::new(index));

            if previous.is_some() {
                return Err(OptimizeError::DuplicateStopId(stop.stop_id().to_owned()));
            }
        }

        let end_stop = match constraints.end_stop_id() {
            Some(end_stop_id) => Some(
                stop_indices
                    .get(end_stop_id)
                    .copied()
                    .ok_or_else(|| OptimizeError::UnknownEndStop(end_stop_id.to_owned()))?,
            ),
            None => None,
        };

        Ok(TripProblem {
            stops,
            matrix,
            constraints,
            end_stop,
            stop_indices,
        })
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn stop(&self, index: StopIdx) -> &Stop {
        &self.stops[index]
    }

    /// Looks a stop up by its external id.
    pub fn stop_idx(&self, stop_id: &str) -> Option<StopIdx> {
        self.stop_indices.get(stop_id).copied()
    }

    pub fn matrix(&self) -> &TravelTimeMatrix {
        &self.matrix
    }

    pub fn constraints(&self) -> &TripConstraints {
        &self.constraints
    }

    /// Stop pinned to the last position of the tour, if the trip has one.
    pub fn end_stop(&self) -> Option<StopIdx> {
        self.end_stop
    }

    pub fn travel_time(&self, from: TourNode, to: TourNode) -> SignedDuration {
        self.matrix.travel_time(from, to)
    }

    pub fn is_symmetric(&self) -> bool {
        self.matrix.is_symmetric()
    }
}
