//! # Domain Models
//!
//! Data exchanged with the car backend plus the client configuration shape.
//! Depends on `serde` only: no I/O, networking, or state-machine logic lives here.

pub mod car;
pub mod config;
pub mod constants;
pub mod price;

pub use car::{CarDraft, CarId, CarOption, CarRecord, Feature, FeatureId, OptionId};
pub use price::Cents;
