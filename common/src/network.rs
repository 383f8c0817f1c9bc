pub mod probe;
pub mod range;
pub mod target;
