//! Data models for the insured client registry.
//!
//! This module contains the client record stored by the registry and the
//! summary projection rendered in tables.

pub mod client;

pub use client::{Client, ClientSummary};
