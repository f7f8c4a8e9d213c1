pub mod local_search;
pub mod r#move;
pub mod or_opt;
pub mod two_opt;
