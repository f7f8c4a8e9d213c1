use crate::trip::{
    stop::StopIdx,
    travel_time_matrix::{TourNode, TravelTimeMatrix},
};

/// Visiting order over every stop of a trip. The tour implicitly starts at
/// the origin and is open: there is no edge back from the last stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tour {
    stops: Vec<StopIdx>,
}

impl Tour {
    pub fn new(stops: Vec<StopIdx>) -> Self {
        Tour { stops }
    }

    pub fn empty() -> Self {
        Tour { stops: Vec::new() }
    }

    pub fn stops(&self) -> &[StopIdx] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline(always)]
    pub fn node(&self, position: usize) -> TourNode {
        TourNode::Stop(self.stops[position])
    }

    /// Node the tour comes from when entering `position`. Position 0 is
    /// entered from the origin.
    #[inline(always)]
    pub fn previous_node(&self, position: usize) -> TourNode {
        if position == 0 {
            TourNode::Origin
        } else {
            TourNode::Stop(self.stops[position - 1])
        }
    }

    /// Node after `position`, or `None` at the open end of the tour.
    #[inline(always)]
    pub fn next_node(&self, position: usize) -> Option<TourNode> {
        self.stops.get(position + 1).map(|&stop| TourNode::Stop(stop))
    }

    /// Total travel cost of the tour: origin to first stop, then every
    /// consecutive leg. Dwell is not part of the cost, it is the same for
    /// every order.
    pub fn travel_seconds(&self, matrix: &TravelTimeMatrix) -> u64 {
        let mut total = 0u64;
        let mut previous = TourNode::Origin;

        for &stop in &self.stops {
            total += matrix.cost(previous, stop.into());
            previous = stop.into();
        }

        total
    }

    pub fn reverse_segment(&mut self, from: usize, to: usize) {
        self.stops[from..=to].reverse();
    }

    /// Moves the run of `segment_length` stops starting at `from` so that it
    /// sits just before the stop currently at `to`. `to` may address the
    /// position one past the end to move a run to the back.
    pub fn relocate_segment(&mut self, from: usize, segment_length: usize, to: usize) {
        if from < to {
            self.stops[from..to].rotate_left(segment_length);
        } else {
            self.stops[to..from + segment_length].rotate_right(segment_length);
        }
    }
}
