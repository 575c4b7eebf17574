//! nestora-domain
//!
//! Pure domain models (Property, Unit, Lease, Tenant, Payment).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod lease;
pub mod payment;
pub mod property;

pub use common::*;
pub use lease::*;
pub use payment::*;
pub use property::*;
