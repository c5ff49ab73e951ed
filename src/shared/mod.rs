// Shared module
pub mod config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod middleware;
pub mod rpc;
pub mod services;
