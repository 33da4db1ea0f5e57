//! Server wiring
//!
//! Socket accept loop and TLS context construction.

pub mod listener;
pub mod tls;
