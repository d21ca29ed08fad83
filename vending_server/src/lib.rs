pub mod config;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use config::Cli;
pub use routes::app;
