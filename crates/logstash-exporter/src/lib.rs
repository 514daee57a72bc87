//! Top-level facade crate for the Logstash exporter.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use logstash_exporter_core::*;
}

pub mod server {
    pub use logstash_exporter_server::*;
}
