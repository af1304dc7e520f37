pub mod compose;
pub mod generation;
