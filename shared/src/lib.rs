//! Shared types for the cafe API
//!
//! Entity models, the error system and the JSON response envelopes used by
//! the server and by its integration tests.

pub mod error;
pub mod models;
pub mod response;

