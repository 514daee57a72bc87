//! Logstash exporter server library.
//!
//! Wires config, the upstream stats client, the Logstash collector, the
//! registry and the HTTP surface. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod collector;
pub mod config;
pub mod ops;
pub mod registry;
pub mod router;
pub mod upstream;
