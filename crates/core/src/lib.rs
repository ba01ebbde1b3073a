//! Domain layer for the hello workspace.
//!
//! Hosts the greeting shared by the binary and its tests.
pub mod greeting;

pub use greeting::{say_hello, GREETING};
