//! Arithmetic calculation service.
//!
//! This crate provides a pure calculation engine, an HTTP service exposing
//! it behind basic authentication, and a client that prefers the remote
//! service but falls back to the local engine when the service is
//! unreachable.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
