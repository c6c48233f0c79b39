//! Core domain types
//!
//! This module contains the domain structures shared between the platform
//! client (which deserializes them off the wire) and the relay (which drives
//! the run lifecycle and reports outcomes).

pub mod actor;
pub mod run;
pub mod user;
