//! Builds the dense host index table from the endpoint roster.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Endpoint, HostId};

/// Maps hostnames to dense [`HostId`]s and back to the endpoints bound to
/// each host, in the order the endpoints were given.
///
/// Construction walks the endpoint list in order and assigns the next
/// available index on first occurrence of a host. This order is load
/// bearing: later stages break ties by ascending `HostId`, and the
/// assignment must be reproducible given the same endpoint order.
#[derive(Debug, Clone)]
pub struct AffinityIndex {
    host_to_id: HashMap<String, HostId>,
    /// `endpoints_by_host[h]` lists the original endpoint indices whose
    /// host resolved to `HostId(h)`, in endpoint-list order.
    endpoints_by_host: Vec<Vec<usize>>,
}

impl AffinityIndex {
    /// Build the index from the endpoint roster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `endpoints` is empty.
    pub fn build(endpoints: &[Endpoint]) -> Result<Self> {
        if endpoints.is_empty() {
            return Err(Error::invalid_input(
                "endpoint roster must contain at least one endpoint",
            ));
        }

        let mut host_to_id = HashMap::new();
        let mut endpoints_by_host: Vec<Vec<usize>> = Vec::new();

        for (endpoint_idx, endpoint) in endpoints.iter().enumerate() {
            let id = *host_to_id.entry(endpoint.host.clone()).or_insert_with(|| {
                let id = HostId(endpoints_by_host.len());
                endpoints_by_host.push(Vec::new());
                id
            });
            endpoints_by_host[id.0].push(endpoint_idx);
        }

        debug!(
            host_count = endpoints_by_host.len(),
            endpoint_count = endpoints.len(),
            "built affinity index"
        );

        Ok(Self {
            host_to_id,
            endpoints_by_host,
        })
    }

    /// Number of distinct hosts in the roster.
    pub fn host_count(&self) -> usize {
        self.endpoints_by_host.len()
    }

    /// Resolve a hostname to its dense [`HostId`], if it appears in the
    /// roster. Hosts named by partition affinity but absent from the
    /// roster resolve to `None` and are silently dropped by the caller.
    pub fn resolve(&self, host: &str) -> Option<HostId> {
        self.host_to_id.get(host).copied()
    }

    /// Original endpoint indices bound to `host`, in endpoint-list order.
    pub fn endpoints_for_host(&self, host: HostId) -> &[usize] {
        &self.endpoints_by_host[host.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roster_is_invalid() {
        let err = AffinityIndex::build(&[]).unwrap_err();
        assert_eq!(
            err,
            Error::invalid_input("endpoint roster must contain at least one endpoint")
        );
    }

    #[test]
    fn assigns_dense_indices_in_first_seen_order() {
        let endpoints = vec![
            Endpoint::new("h2", 1),
            Endpoint::new("h1", 1),
            Endpoint::new("h2", 2),
        ];
        let index = AffinityIndex::build(&endpoints).unwrap();

        assert_eq!(index.host_count(), 2);
        assert_eq!(index.resolve("h2"), Some(HostId(0)));
        assert_eq!(index.resolve("h1"), Some(HostId(1)));
        assert_eq!(index.resolve("unknown"), None);
        assert_eq!(index.endpoints_for_host(HostId(0)), &[0, 2]);
        assert_eq!(index.endpoints_for_host(HostId(1)), &[1]);
    }
}
