use jiff::{SignedDuration, Timestamp};

use crate::{
    solver::tour::Tour,
    trip::{
        constraints::{TripConstraints, TripConstraintsBuilder},
        location::Location,
        stop::{Stop, StopBuilder, StopIdx},
        travel_time_matrix::TravelTimeMatrix,
        trip_problem::TripProblem,
    },
};

/// Stop coordinates with no particular structure, so greedy orders are
/// usually improvable. Row 0 of every derived matrix is the origin at (0, 0).
const SCATTER_COORDINATES: [(f64, f64); 12] = [
    (6.0, 1.0),
    (2.0, 8.0),
    (9.0, 5.0),
    (1.0, 3.0),
    (8.0, 9.0),
    (4.0, 4.0),
    (10.0, 2.0),
    (3.0, 10.0),
    (7.0, 6.0),
    (0.0, 7.0),
    (5.0, 0.0),
    (10.0, 10.0),
];

pub fn create_location_grid(rows: usize, cols: usize) -> Vec<Location> {
    let mut locations = Vec::new();

    for y in 0..rows {
        for x in 0..cols {
            let location = Location::from_cartesian(x as f64, y as f64);
            locations.push(location);
        }
    }

    locations
}

pub fn create_basic_stops(locations: Vec<Location>) -> Vec<Stop> {
    locations
        .into_iter()
        .enumerate()
        .map(|(index, location)| {
            let mut builder = StopBuilder::default();
            builder.set_stop_id(index.to_string()).set_location(location);
            builder.build()
        })
        .collect()
}

pub fn create_test_constraints() -> TripConstraints {
    let mut builder = TripConstraintsBuilder::default();
    builder
        .set_start_time("2025-06-10T09:00:00Z".parse().unwrap())
        .set_end_time("2025-06-10T18:00:00Z".parse().unwrap());

    builder.build()
}

pub fn create_reversed_constraints() -> TripConstraints {
    let mut builder = TripConstraintsBuilder::default();
    builder
        .set_start_time("2025-06-10T18:00:00Z".parse().unwrap())
        .set_end_time("2025-06-10T09:00:00Z".parse().unwrap());

    builder.build()
}

pub fn create_test_constraints_with_end(end_stop_id: &str) -> TripConstraints {
    let mut builder = TripConstraintsBuilder::default();
    builder
        .set_start_time("2025-06-10T09:00:00Z".parse().unwrap())
        .set_end_time("2025-06-10T18:00:00Z".parse().unwrap())
        .set_end_stop_id(end_stop_id.to_owned());

    builder.build()
}

pub fn create_tight_constraints(budget: SignedDuration) -> TripConstraints {
    let start: Timestamp = "2025-06-10T09:00:00Z".parse().unwrap();

    let mut builder = TripConstraintsBuilder::default();
    builder.set_start_time(start).set_end_time(start + budget);

    builder.build()
}

pub fn create_test_problem(stops: Vec<Stop>, rows: Vec<Vec<u32>>) -> TripProblem {
    let matrix = TravelTimeMatrix::from_rows(rows).unwrap();

    TripProblem::new(stops, matrix, create_test_constraints()).unwrap()
}

/// Three stops strung out east of the origin, ten seconds of walking apart.
/// The optimal walk visits them in id order for 30 seconds of travel.
pub fn create_line_problem(end_stop_id: Option<&str>) -> TripProblem {
    let stops = ["a", "b", "c"]
        .into_iter()
        .enumerate()
        .map(|(index, id)| {
            let mut builder = StopBuilder::default();
            builder
                .set_stop_id(id.to_owned())
                .set_location(Location::from_cartesian((index as f64 + 1.0) * 10.0, 0.0));
            builder.build()
        })
        .collect();

    let matrix = TravelTimeMatrix::from_rows(vec![
        vec![0, 10, 20, 30],
        vec![10, 0, 10, 20],
        vec![20, 10, 0, 10],
        vec![30, 20, 10, 0],
    ])
    .unwrap();

    let constraints = match end_stop_id {
        Some(end) => create_test_constraints_with_end(end),
        None => create_test_constraints(),
    };

    TripProblem::new(stops, matrix, constraints).unwrap()
}

pub fn create_scatter_problem(num_stops: usize, end_stop_id: Option<&str>) -> TripProblem {
    let locations = create_scatter_locations(num_stops);
    let stops = create_basic_stops(locations.clone());

    let matrix = TravelTimeMatrix::from_rows(distance_rows(&locations)).unwrap();

    let constraints = match end_stop_id {
        Some(end) => create_test_constraints_with_end(end),
        None => create_test_constraints(),
    };

    TripProblem::new(stops, matrix, constraints).unwrap()
}

/// Scatter problem where legs toward higher stop indices cost extra, so the
/// direction of every edge matters.
pub fn create_asymmetric_scatter_problem(num_stops: usize) -> TripProblem {
    let locations = create_scatter_locations(num_stops);
    let stops = create_basic_stops(locations.clone());

    let mut rows = distance_rows(&locations);
    for (from, row) in rows.iter_mut().enumerate() {
        for (to, seconds) in row.iter_mut().enumerate() {
            if from != to {
                *seconds += 7 * to as u32;
            }
        }
    }

    let matrix = TravelTimeMatrix::from_rows(rows).unwrap();

    TripProblem::new(stops, matrix, create_test_constraints()).unwrap()
}

/// Scatter problem plus the identity tour over it, the usual starting point
/// for exercising a single operator.
pub fn create_scatter_instance(num_stops: usize) -> (TripProblem, Tour) {
    let problem = create_scatter_problem(num_stops, None);
    let tour = Tour::new((0..num_stops).map(StopIdx::new).collect());

    (problem, tour)
}

pub fn create_asymmetric_scatter_instance(num_stops: usize) -> (TripProblem, Tour) {
    let problem = create_asymmetric_scatter_problem(num_stops);
    let tour = Tour::new((0..num_stops).map(StopIdx::new).collect());

    (problem, tour)
}

pub fn tour_ids<'a>(problem: &'a TripProblem, tour: &Tour) -> Vec<&'a str> {
    tour.stops()
        .iter()
        .map(|&index| problem.stop(index).stop_id())
        .collect()
}

pub fn tour_indices(tour: &Tour) -> Vec<usize> {
    tour.stops().iter().map(|index| index.get()).collect()
}

fn create_scatter_locations(num_stops: usize) -> Vec<Location> {
    SCATTER_COORDINATES[..num_stops]
        .iter()
        .map(|&(x, y)| Location::from_cartesian(x, y))
        .collect()
}

fn distance_rows(locations: &[Location]) -> Vec<Vec<u32>> {
    let mut nodes = vec![Location::from_cartesian(0.0, 0.0)];
    nodes.extend_from_slice(locations);

    nodes
        .iter()
        .map(|from| {
            nodes
                .iter()
                .map(|to| (from.euclidean_distance(to) * 100.0).round() as u32)
                .collect()
        })
        .collect()
}
