//! haven-cli library root.
//!
//! The binary is a thin shell over these modules; they are public so the
//! integration tests can drive a session and the config file directly.

pub mod aws;
pub mod config;
pub mod session;
