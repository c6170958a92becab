//! Session-domain types: credential keys, redacted secrets, identity, and invalidation events.

pub mod credentials;
pub mod identity;
pub mod listener;
pub mod secret;

pub use credentials::*;
pub use identity::*;
pub use listener::*;
pub use secret::*;
