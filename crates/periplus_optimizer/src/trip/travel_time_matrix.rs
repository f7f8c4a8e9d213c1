use jiff::SignedDuration;

use crate::error::OptimizeError;

use super::{constraints::WalkingSpeed, location::Location, stop::Stop, stop::StopIdx};

/// Addressing scheme of the travel time matrix: the trip start point sits at
/// row and column 0, stop `i` at row and column `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TourNode {
    Origin,
    Stop(StopIdx),
}

impl TourNode {
    #[inline(always)]
    fn matrix_index(self) -> usize {
        match self {
            TourNode::Origin => 0,
            TourNode::Stop(stop) => stop.get() + 1,
        }
    }
}

impl From<StopIdx> for TourNode {
    fn from(stop: StopIdx) -> Self {
        TourNode::Stop(stop)
    }
}

/// Straight-line distances underestimate street networks; scale them up
/// before converting to walking seconds.
const STREET_NETWORK_FACTOR: f64 = 1.3;

/// Directed travel times in whole seconds, stored flat. To find the index for
/// a pair of nodes, use the formula `index = from * dimension + to`.
pub struct TravelTimeMatrix {
    seconds: Vec<u32>,
    dimension: usize,
    is_symmetric: bool,
}

fn is_flat_matrix_symmetric(matrix: &[u32], dimension: usize) -> bool {
    for i in 0..dimension {
        for j in 0..dimension {
            if matrix[i * dimension + j] != matrix[j * dimension + i] {
                return false;
            }
        }
    }
    true
}

impl TravelTimeMatrix {
    /// Marks an edge that cannot be traversed. Carried through cost sums as a
    /// huge finite value so orders that avoid it always compare cheaper.
    pub const UNREACHABLE: u32 = u32::MAX;

    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, OptimizeError> {
        let dimension = rows.len();

        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != dimension {
                return Err(OptimizeError::RaggedMatrix {
                    row,
                    actual: entries.len(),
                    expected: dimension,
                });
            }
        }

        let seconds: Vec<u32> = rows.into_iter().flatten().collect();
        let is_symmetric = is_flat_matrix_symmetric(&seconds, dimension);

        Ok(TravelTimeMatrix {
            seconds,
            dimension,
            is_symmetric,
        })
    }

    /// Walking time estimate from great circle distances, for trip plans that
    /// come without a measured matrix.
    pub fn from_haversine_estimate(
        origin: &Location,
        stops: &[Stop],
        walking_speed: WalkingSpeed,
    ) -> Self {
        let locations: Vec<&Location> = std::iter::once(origin)
            .chain(stops.iter().map(Stop::location))
            .collect();

        let dimension = locations.len();
        let speed = walking_speed.meters_per_second();
        let mut seconds = vec![0u32; dimension * dimension];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i == j {
                    continue;
                }

                let meters = from.haversine_distance(to) * STREET_NETWORK_FACTOR;
                seconds[i * dimension + j] = (meters / speed).round() as u32;
            }
        }

        TravelTimeMatrix {
            seconds,
            dimension,
            is_symmetric: true,
        }
    }

    #[cfg(test)]
    pub fn from_constant(dimension: usize, travel_seconds: u32) -> Self {
        let mut seconds = vec![travel_seconds; dimension * dimension];

        for i in 0..dimension {
            seconds[i * dimension + i] = 0;
        }

        TravelTimeMatrix {
            seconds,
            dimension,
            is_symmetric: true,
        }
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.dimension + to
    }

    #[inline(always)]
    pub fn travel_seconds(&self, from: TourNode, to: TourNode) -> u32 {
        if from == to {
            return 0;
        }

        self.seconds[self.index(from.matrix_index(), to.matrix_index())]
    }

    /// Edge cost for the solver. Widened so sums over a whole tour cannot
    /// wrap even when unreachable edges are involved.
    #[inline(always)]
    pub fn cost(&self, from: TourNode, to: TourNode) -> u64 {
        self.travel_seconds(from, to) as u64
    }

    #[inline(always)]
    pub fn travel_time(&self, from: TourNode, to: TourNode) -> SignedDuration {
        SignedDuration::from_secs(self.travel_seconds(from, to) as i64)
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_symmetric
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stops covered, excluding the origin row.
    pub fn num_stops(&self) -> usize {
        self.dimension.saturating_sub(1)
    }
}
