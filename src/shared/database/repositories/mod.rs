// All repositories module
pub mod auth;
pub mod videos;
pub mod reactions;
pub mod social;

// Re-export all repositories for convenience
pub use auth::*;
pub use videos::*;
pub use reactions::*;
pub use social::*;
