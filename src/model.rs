//! Wire models exchanged with the backend, plus validated path identifiers.
//!
//! Response types mirror the backend DTOs with camelCase field names; nullable backend
//! columns are `Option`s. Request DTOs skip unset fields so partial updates stay partial.

pub mod bill;
pub mod booking;
pub mod customer;
pub mod driver;
pub mod id;
pub mod user;
pub mod vehicle;

pub use bill::*;
pub use booking::*;
pub use customer::*;
pub use driver::*;
pub use id::*;
pub use user::*;
pub use vehicle::*;
