//! Network layer: wire types, the bearer-token gateway, and typed
//! endpoint wrappers.

pub mod api;
pub mod gateway;
pub mod inventory;
pub mod types;
