pub mod error;
pub mod json;
pub mod schedule;
pub mod solver;
pub mod trip;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
