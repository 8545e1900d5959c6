pub mod core;
pub mod state;

pub use self::core::PermutationIterator;
pub use state::{MAX_POOL_SIZE, PermutationState};

#[cfg(test)]
mod tests;
