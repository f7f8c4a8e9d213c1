use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// Pace used when travel times are estimated from coordinates instead of
/// being supplied as a matrix.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WalkingSpeed {
    Slow,
    #[default]
    Moderate,
    Fast,
}

impl WalkingSpeed {
    pub fn meters_per_second(self) -> f64 {
        match self {
            WalkingSpeed::Slow => 1.2,
            WalkingSpeed::Moderate => 1.4,
            WalkingSpeed::Fast => 1.6,
        }
    }
}

/// Time frame and endpoint rules for a single trip.
#[derive(Debug, Clone)]
pub struct TripConstraints {
    start_time: Timestamp,
    end_time: Timestamp,
    walking_speed: WalkingSpeed,
    end_stop_id: Option<String>,
}

impl TripConstraints {
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn end_time(&self) -> Timestamp {
        self.end_time
    }

    pub fn walking_speed(&self) -> WalkingSpeed {
        self.walking_speed
    }

    /// Stop that must be visited last, when the trip has a fixed finish.
    pub fn end_stop_id(&self) -> Option<&str> {
        self.end_stop_id.as_deref()
    }

    pub fn time_budget(&self) -> SignedDuration {
        self.end_time.duration_since(self.start_time)
    }
}

#[derive(Default)]
pub struct TripConstraintsBuilder {
    start_time: Option<Timestamp>,
    end_time: Option<Timestamp>,
    walking_speed: Option<WalkingSpeed>,
    end_stop_id: Option<String>,
}

impl TripConstraintsBuilder {
    pub fn set_start_time(&mut self, start_time: Timestamp) -> &mut TripConstraintsBuilder {
        self.start_time = Some(start_time);
        self
    }

    pub fn set_end_time(&mut self, end_time: Timestamp) -> &mut TripConstraintsBuilder {
        self.end_time = Some(end_time);
        self
    }

    pub fn set_walking_speed(&mut self, walking_speed: WalkingSpeed) -> &mut TripConstraintsBuilder {
        self.walking_speed = Some(walking_speed);
        self
    }

    pub fn set_end_stop_id(&mut self, end_stop_id: String) -> &mut TripConstraintsBuilder {
        self.end_stop_id = Some(end_stop_id);
        self
    }

    pub fn build(self) -> TripConstraints {
        TripConstraints {
            start_time: self.start_time.expect("Expected trip start time"),
            end_time: self.end_time.expect("Expected trip end time"),
            walking_speed: self.walking_speed.unwrap_or_default(),
            end_stop_id: self.end_stop_id,
        }
    }
}
