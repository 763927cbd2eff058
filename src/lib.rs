//! Topic provisioner - an HTTP endpoint that reports messaging coordinates
//!
//! Clients provision a stream by issuing `PUT /<namespace>/<stream-name>`;
//! the service answers with the gateway address to connect through and the
//! fully-qualified topic backing the stream. The topic itself is never
//! created or verified here - that is the messaging cluster's job.

pub mod api;
pub mod config;
pub mod error;
pub mod topic;

pub use error::{Error, Result};
