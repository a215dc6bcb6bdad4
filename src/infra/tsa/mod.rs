pub mod client;

pub use client::{DEFAULT_TSA_BASE_URL, TsaClient};
