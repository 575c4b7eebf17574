//! nestora-core
//!
//! Business logic for property records: lease creation, payment recording,
//! positional selection, and rent-roll aggregation.
//! Depends on nestora-domain. No CLI, no terminal I/O; persistence goes through
//! the [`storage::PropertyStorage`] trait.

pub mod error;
pub mod lease_service;
pub mod property_service;
pub mod rent_roll_service;
pub mod storage;
pub mod store;
pub mod time;

pub use error::CoreError;
pub use lease_service::*;
pub use property_service::*;
pub use rent_roll_service::*;
pub use storage::{store_warnings, PropertyStorage};
pub use store::PropertyStore;
pub use time::Clock;
