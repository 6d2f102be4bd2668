//! Application configuration
//!
//! [`RouterConfig`] groups the static parameters the routing and
//! fact-checking use cases run with. It is built by the infrastructure
//! layer from the merged configuration file.

mod router_config;

pub use router_config::RouterConfig;
