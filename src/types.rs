//! Common data types shared across the assignment pipeline.

use std::fmt;

/// Dense index of a partition within the original `affinities` array, in
/// `[0, P)`. This is the identifier returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartitionId(pub usize);

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "partition-{}", self.0)
    }
}

impl From<usize> for PartitionId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// Dense index of a host within the endpoint roster, in `[0, H)`, assigned
/// by the [`crate::affinity_index::AffinityIndex`] in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostId(pub usize);

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host-{}", self.0)
    }
}

impl From<usize> for HostId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// A single database ingestion channel: a host plus a port. Multiple
/// endpoints may share a host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Hostname this endpoint listens on.
    pub host: String,
    /// Port this endpoint listens on.
    pub port: u16,
}

impl Endpoint {
    /// Construct a new endpoint.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl From<(&str, u16)> for Endpoint {
    fn from((host, port): (&str, u16)) -> Self {
        Self::new(host, port)
    }
}

impl From<(String, u16)> for Endpoint {
    fn from((host, port): (String, u16)) -> Self {
        Self::new(host, port)
    }
}
