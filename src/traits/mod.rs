//! Core trait abstractions.
//!
//! [`FromConfig`] is the construction seam between declarative
//! configuration and validated runtime values.

mod from_config;

pub use from_config::FromConfig;
