//! Exchange a web identity token for temporary AWS credentials.
//!
//! Parameters are resolved from the environment ([`config`]), exchanged with
//! AWS STS ([`aws::exchange`]) and formatted for display with optional
//! redaction ([`display`]).

pub mod aws;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;
