//! Stagehand Core
//!
//! Core types for the Stagehand actor-run relay.
//!
//! This crate contains:
//! - Domain types: Core business entities (Actor, RunStatus, RunOutcome, etc.)
//! - DTOs: Request/response payloads for the relay's own HTTP API

pub mod domain;
pub mod dto;
