//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `admin`, `notices`) so individual
//! components can depend on small focused models. Signals wrapping these
//! are constructed in `App` and provided through context; the structs
//! themselves stay plain so they test natively.

pub mod admin;
pub mod auth;
pub mod notices;
