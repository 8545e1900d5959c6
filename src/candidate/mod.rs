//! Turns a permutation into equation candidates by placing the equality marker

mod builder;

pub use builder::CandidateBuilder;
