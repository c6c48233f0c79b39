//! Request and response payloads for the relay's own HTTP API
//!
//! These are the JSON shapes exchanged with the browser UI. Field names are
//! camelCase on the wire to match what the form layer sends.

pub mod auth;
pub mod run;
