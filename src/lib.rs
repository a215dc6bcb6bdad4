pub mod checkpoints;
pub mod config;
pub mod fetch;
pub mod http;
pub mod infra;
pub mod parser;
pub mod services;
pub mod telemetry;
pub mod wait_code;
