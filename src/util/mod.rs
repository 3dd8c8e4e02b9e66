//! Browser-adjacent utilities: persisted storage, session obfuscation,
//! and clock access. Each has an off-browser fallback so the session
//! logic built on top is testable natively.

pub mod crypto;
pub mod storage;
pub mod time;
