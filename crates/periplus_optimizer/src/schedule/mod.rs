use jiff::{SignedDuration, Timestamp};
use serde::Serialize;
use tracing::warn;

use crate::{
    solver::tour::Tour,
    trip::{
        stop::Stop,
        travel_time_matrix::TourNode,
        trip_problem::TripProblem,
    },
};

/// One visit on the finished itinerary. Carries copies of the stop fields it
/// reports, the input `Stop` is never touched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScheduledStop {
    stop_id: String,
    name: String,
    order: usize,
    arrival_time: Timestamp,
    departure_time: Timestamp,
}

impl ScheduledStop {
    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the itinerary, starting at 1.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn departure_time(&self) -> Timestamp {
        self.departure_time
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteResult {
    stops: Vec<ScheduledStop>,
    total_duration: SignedDuration,
    exceeds_end_time: bool,
}

impl RouteResult {
    pub fn stops(&self) -> &[ScheduledStop] {
        &self.stops
    }

    /// Last departure minus the trip start, zero for an empty itinerary.
    pub fn total_duration(&self) -> SignedDuration {
        self.total_duration
    }

    /// Set when the final departure lands after the requested end time. The
    /// itinerary is still returned, the caller decides what to do with it.
    pub fn exceeds_end_time(&self) -> bool {
        self.exceeds_end_time
    }
}

/// Lays a tour out on the clock. Departure from the origin is the trip start
/// time, each stop is reached after the travel leg from the previous node and
/// left again once its dwell has passed.
pub fn build_schedule(problem: &TripProblem, tour: &Tour) -> RouteResult {
    let constraints = problem.constraints();
    let start_time = constraints.start_time();

    let mut stops = Vec::with_capacity(tour.len());
    let mut previous = TourNode::Origin;
    let mut previous_departure_time = start_time;

    for (position, &stop_idx) in tour.stops().iter().enumerate() {
        let stop = problem.stop(stop_idx);
        let node = TourNode::from(stop_idx);

        let arrival_time = compute_arrival_time(problem, previous, node, previous_departure_time);
        let departure_time = compute_departure_time(stop, arrival_time);

        stops.push(ScheduledStop {
            stop_id: stop.stop_id().to_owned(),
            name: stop.name().to_owned(),
            order: position + 1,
            arrival_time,
            departure_time,
        });

        previous = node;
        previous_departure_time = departure_time;
    }

    let total_duration = if stops.is_empty() {
        SignedDuration::ZERO
    } else {
        previous_departure_time.duration_since(start_time)
    };

    let exceeds_end_time = previous_departure_time > constraints.end_time();
    if exceeds_end_time {
        warn!(
            "itinerary ends at {} which is past the requested end time {}",
            previous_departure_time,
            constraints.end_time()
        );
    }

    RouteResult {
        stops,
        total_duration,
        exceeds_end_time,
    }
}

fn compute_arrival_time(
    problem: &TripProblem,
    previous: TourNode,
    node: TourNode,
    previous_departure_time: Timestamp,
) -> Timestamp {
    previous_departure_time + problem.travel_time(previous, node)
}

fn compute_departure_time(stop: &Stop, arrival_time: Timestamp) -> Timestamp {
    arrival_time + stop.dwell()
}
