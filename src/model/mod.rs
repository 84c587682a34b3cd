//! Sample records used by the demo binary and the integration tests.
//!
//! Each domain record has an independently declared transport counterpart
//! (`*Dto`, `*Form`); the two only share field names and types.

pub mod account;
pub mod person;

pub use account::*;
pub use person::*;
