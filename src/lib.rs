// to allow testing, almost everything lives in src/lib.rs (and its modules),
// keeping only the entrypoint in src/main.rs. black-box tests in tests/api link
// against this crate exactly like main.rs does

pub mod capture;
pub mod configuration;
pub mod domain;
pub mod persistence;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod utils;
