//! # astra-core
//!
//! Core types, traits, configuration, and error handling for the astra
//! skill: the inbound request envelope, the outbound response builder,
//! the per-request context, and the handler trait seams.

pub mod config;
pub mod context;
pub mod error;
pub mod request;
pub mod response;
pub mod traits;
