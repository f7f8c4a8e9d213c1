mod exact;

pub mod ls;
pub mod nearest_neighbor;
pub mod route_solver;
pub mod solver_params;
pub mod tour;
