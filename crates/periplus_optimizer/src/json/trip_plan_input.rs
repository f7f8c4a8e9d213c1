use jiff::{SignedDuration, Timestamp};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::OptimizeError,
    trip::{
        constraints::{TripConstraintsBuilder, WalkingSpeed},
        location::Location,
        stop::{Stop, StopBuilder},
        travel_time_matrix::TravelTimeMatrix,
        trip_problem::TripProblem,
    },
};

/// Trip planning request as clients send it. Coordinates are `[lon, lat]`
/// pairs, GeoJSON order.
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename = "TripPlan")]
pub struct TripPlanInput {
    pub origin: [f64; 2],
    pub stops: Vec<StopInput>,
    pub constraints: ConstraintsInput,

    /// Directed travel times in seconds, row and column 0 being the origin.
    /// When absent, times are estimated from straight-line distances.
    pub matrix: Option<Vec<Vec<u32>>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename = "Stop")]
pub struct StopInput {
    pub id: String,
    pub name: Option<String>,
    pub coordinates: [f64; 2],

    #[serde(default = "default_dwell_minutes")]
    pub dwell_minutes: i64,

    pub place_ref: Option<String>,
    pub opening_hours: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename = "Constraints")]
pub struct ConstraintsInput {
    pub start_time: Timestamp,
    pub end_time: Timestamp,

    #[serde(default)]
    pub walking_speed: WalkingSpeed,

    pub end_stop: Option<String>,
}

fn default_dwell_minutes() -> i64 {
    60
}

impl TripPlanInput {
    #[instrument(skip_all, level = "debug")]
    pub fn create_problem(self) -> Result<TripProblem, OptimizeError> {
        let origin = Location::from_lat_lon(self.origin[1], self.origin[0]);

        let mut stops: Vec<Stop> = Vec::with_capacity(self.stops.len());

        for input in self.stops {
            if input.dwell_minutes < 0 {
                return Err(OptimizeError::NegativeDwell {
                    stop_id: input.id,
                    minutes: input.dwell_minutes,
                });
            }

            let mut builder = StopBuilder::default();
            builder
                .set_stop_id(input.id)
                .set_location(Location::from_lat_lon(
                    input.coordinates[1],
                    input.coordinates[0],
                ))
                .set_dwell(SignedDuration::from_mins(input.dwell_minutes));

            if let Some(name) = input.name {
                builder.set_name(name);
            }

            if let Some(place_ref) = input.place_ref {
                builder.set_place_ref(place_ref);
            }

            if let Some(opening_hours) = input.opening_hours {
                builder.set_opening_hours(opening_hours);
            }

            stops.push(builder.build());
        }

        let matrix = match self.matrix {
            Some(rows) => TravelTimeMatrix::from_rows(rows)?,
            None => TravelTimeMatrix::from_haversine_estimate(
                &origin,
                &stops,
                self.constraints.walking_speed,
            ),
        };

        let mut builder = TripConstraintsBuilder::default();
        builder
            .set_start_time(self.constraints.start_time)
            .set_end_time(self.constraints.end_time)
            .set_walking_speed(self.constraints.walking_speed);

        if let Some(end_stop) = self.constraints.end_stop {
            builder.set_end_stop_id(end_stop);
        }

        TripProblem::new(stops, matrix, builder.build())
    }
}
