//! Core library components.
//!
//! The resolution pipeline: configuration, name mapping, batching, the
//! parameter store backends, the resolver, environment building and the
//! final process handoff.

pub mod batch;
pub mod config;
pub mod constants;
pub mod env;
pub mod exec;
pub mod naming;
pub mod resolver;
pub mod store;
