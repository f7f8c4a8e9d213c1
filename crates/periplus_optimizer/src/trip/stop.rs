use jiff::SignedDuration;

use crate::define_index_newtype;

use super::location::Location;

define_index_newtype!(StopIdx, Stop);

/// A place the trip has to visit. `opening_hours` and `place_ref` travel with
/// the stop for clients to display, the scheduler itself never reads them.
#[derive(Debug, Clone)]
pub struct Stop {
    stop_id: String,
    name: String,
    location: Location,
    dwell: SignedDuration,
    place_ref: Option<String>,
    opening_hours: Option<serde_json::Value>,
}

impl Stop {
    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Time spent at the stop once arrived.
    pub fn dwell(&self) -> SignedDuration {
        self.dwell
    }

    pub fn place_ref(&self) -> Option<&str> {
        self.place_ref.as_deref()
    }

    pub fn opening_hours(&self) -> Option<&serde_json::Value> {
        self.opening_hours.as_ref()
    }
}

#[derive(Default)]
pub struct StopBuilder {
    stop_id: Option<String>,
    name: Option<String>,
    location: Option<Location>,
    dwell: Option<SignedDuration>,
    place_ref: Option<String>,
    opening_hours: Option<serde_json::Value>,
}

impl StopBuilder {
    pub fn set_stop_id(&mut self, stop_id: String) -> &mut StopBuilder {
        self.stop_id = Some(stop_id);
        self
    }

    pub fn set_name(&mut self, name: String) -> &mut StopBuilder {
        self.name = Some(name);
        self
    }

    pub fn set_location(&mut self, location: Location) -> &mut StopBuilder {
        self.location = Some(location);
        self
    }

    pub fn set_dwell(&mut self, dwell: SignedDuration) -> &mut StopBuilder {
        self.dwell = Some(dwell);
        self
    }

    pub fn set_place_ref(&mut self, place_ref: String) -> &mut StopBuilder {
        self.place_ref = Some(place_ref);
        self
    }

    pub fn set_opening_hours(&mut self, opening_hours: serde_json::Value) -> &mut StopBuilder {
        self.opening_hours = Some(opening_hours);
        self
    }

    pub fn build(self) -> Stop {
        let stop_id = self.stop_id.expect("Expected stop id");

        Stop {
            name: self.name.unwrap_or_else(|| stop_id.clone()),
            stop_id,
            location: self.location.expect("Expected stop location"),
            dwell: self.dwell.unwrap_or(SignedDuration::ZERO),
            place_ref: self.place_ref,
            opening_hours: self.opening_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut builder = StopBuilder::default();
        builder
            .set_stop_id(String::from("agora"))
            .set_name(String::from("Ancient Agora"))
            .set_location(Location::from_lat_lon(37.9747, 23.7217));

        builder.set_dwell(SignedDuration::from_mins(45));

        let stop = builder.build();

        assert_eq!(stop.stop_id(), "agora");
        assert_eq!(stop.name(), "Ancient Agora");
        assert_eq!(stop.dwell(), SignedDuration::from_mins(45));
        assert_eq!(stop.place_ref(), None);
    }

    #[test]
    fn test_builder_defaults() {
        let mut builder = StopBuilder::default();
        builder
            .set_stop_id(String::from("kerameikos"))
            .set_location(Location::from_lat_lon(37.9781, 23.7186));

        let stop = builder.build();

        assert_eq!(stop.name(), "kerameikos");
        assert_eq!(stop.dwell(), SignedDuration::ZERO);
        assert!(stop.opening_hours().is_none());
    }
}
