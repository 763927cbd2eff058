//! Stream paths and topic naming
//!
//! A provisioning request addresses a stream as `/<namespace>/<stream-name>`.
//! The topic backing that stream is fully qualified under the cluster's
//! `persistent://tenant/namespace/name` scheme, with the two path segments
//! joined by `_` as the local name.

use std::fmt;

use crate::error::{Error, Result};

/// The two-segment stream address carried in a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamPath<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
}

impl<'a> StreamPath<'a> {
    /// Parse a request path into its namespace and stream-name segments.
    ///
    /// Exactly one leading `/` is stripped before splitting; anything other
    /// than two non-empty segments is rejected.
    pub fn parse(path: &'a str) -> Result<Self> {
        let mut segments = path.strip_prefix('/').unwrap_or(path).split('/');

        let namespace = segments.next().unwrap_or("");
        let name = segments.next().unwrap_or("");

        if namespace.is_empty() || name.is_empty() || segments.next().is_some() {
            return Err(Error::InvalidPath(path.to_string()));
        }

        Ok(Self { namespace, name })
    }
}

/// A fully-qualified persistent topic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicName {
    tenant: String,
    namespace: String,
    local_name: String,
}

impl TopicName {
    /// Derive the topic backing a stream under the configured tenant and
    /// namespace.
    pub fn for_stream(tenant: &str, namespace: &str, stream: &StreamPath<'_>) -> Self {
        Self {
            tenant: tenant.to_string(),
            namespace: namespace.to_string(),
            local_name: format!("{}_{}", stream.namespace, stream.name),
        }
    }
}

impl fmt::Display for TopicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "persistent://{}/{}/{}",
            self.tenant, self.namespace, self.local_name
        )
    }
}
