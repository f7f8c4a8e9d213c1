pub mod constraints;
pub mod location;
pub mod stop;
pub mod travel_time_matrix;
pub mod trip_problem;
