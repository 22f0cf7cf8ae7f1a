//! src/lib.rs
pub mod configuration;
pub mod domain;
pub mod error;
pub mod form;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod waitlist_client;
