//! Forward and reverse edge tables for the bipartite matcher.
//!
//! Stored as two parallel arrays of arrays indexed by dense integer IDs —
//! the arena+index representation, no object graph, no pointers — so the
//! matcher's augmenting-path search can walk both directions without
//! allocating per traversal.

use crate::affinity_index::AffinityIndex;
use crate::partition_splitter::AffinityPartition;
use crate::types::HostId;

/// Edge table built from the affinity-bearing partitions and the resolved
/// host roster.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    /// `edges[a]` lists the resolved, deduplicated hosts partition `a`
    /// (local affinity index) prefers, in the order first seen.
    pub edges: Vec<Vec<HostId>>,
    /// `rev[b]` lists the local affinity indices that prefer host `b`, in
    /// ascending local-index order.
    pub rev: Vec<Vec<usize>>,
}

impl EdgeTable {
    /// Number of affinity-bearing partitions (`nA`).
    pub fn partition_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of hosts in the roster (`nB`).
    pub fn host_count(&self) -> usize {
        self.rev.len()
    }
}

/// Build the forward/reverse edge table. Hosts named by a partition but
/// absent from `index` are silently dropped, per the affinity contract: a
/// narrower endpoint roster than the filesystem's replication factor is
/// expected, not an error.
pub fn build(affinity_partitions: &[AffinityPartition], index: &AffinityIndex) -> EdgeTable {
    let n_a = affinity_partitions.len();
    let n_b = index.host_count();
    let mut edges: Vec<Vec<HostId>> = vec![Vec::new(); n_a];
    let mut rev: Vec<Vec<usize>> = vec![Vec::new(); n_b];

    for (local_idx, partition) in affinity_partitions.iter().enumerate() {
        for host in &partition.preferred_hosts {
            let Some(host_id) = index.resolve(host) else {
                continue;
            };
            if edges[local_idx].contains(&host_id) {
                continue;
            }
            edges[local_idx].push(host_id);
            rev[host_id.0].push(local_idx);
        }
    }

    EdgeTable { edges, rev }
}
