mod core;
mod errors;
mod pairing;

pub use self::core::{CollectionStats, EquationSolver, GeneratorConfig};
pub use errors::SolverError;
