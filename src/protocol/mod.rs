//! Transport-agnostic message codec.
//!
//! Turns the JSON payloads submitted by each faction into typed
//! [`Submission`]s, and encodes actions back for clients.

pub mod messages;

pub use messages::{
    batch_message, designation_message, parse_batch, parse_designation, parse_submission, Submission,
};
