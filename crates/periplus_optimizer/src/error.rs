use jiff::Timestamp;
use thiserror::Error;

/// Rejections raised while assembling a trip problem. Once a problem has been
/// validated, solving and scheduling are total: degenerate inputs degrade to
/// the greedy construction instead of erroring out.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("travel time matrix row {row} has {actual} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("travel time matrix dimension is {actual}, expected {expected} for {num_stops} stops")]
    MatrixDimensionMismatch {
        num_stops: usize,
        expected: usize,
        actual: usize,
    },

    #[error("end time {end} is not after start time {start}")]
    EmptyTimeWindow { start: Timestamp, end: Timestamp },

    #[error("end stop '{0}' does not match any stop id")]
    UnknownEndStop(String),

    #[error("duplicate stop id '{0}'")]
    DuplicateStopId(String),

    #[error("stop '{stop_id}' has a negative dwell of {minutes} minutes")]
    NegativeDwell { stop_id: String, minutes: i64 },
}
