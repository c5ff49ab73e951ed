// Reaction repositories
pub mod reaction_repository;

pub use reaction_repository::*;
