//! Kernel contracts shared across slices.
//!
//! The configurator and garage slices never talk to the network or the router directly.
//! They depend on the traits here:
//!
//! * [`gateway::CarsGateway`] for backend reads and writes (implemented by `bolt-http`);
//! * [`navigation::Navigator`] for leaving a page once a save is confirmed.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use bolt_kernel::config::load_config;
//! use bolt_kernel::domain::config::ClientConfig;
//!
//! let cfg: ClientConfig = load_config(Some("bolt.toml"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod gateway;
pub mod navigation;
pub mod prelude;

pub use bolt_domain as domain;
