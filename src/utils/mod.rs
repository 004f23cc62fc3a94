pub mod comparators;
pub mod escape;
