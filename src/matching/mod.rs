//! The bipartite matcher: the core of the assignment engine.
//!
//! Given the affinity-bearing partitions and the resolved host roster,
//! produces a balanced matching minimizing the maximum host load (subject
//! to what the affinity graph admits), via a seed assignment followed by
//! an iterative augmenting-path rebalance.

mod bipartite;
mod graph;

use tracing::{debug, info_span};

use crate::affinity_index::AffinityIndex;
use crate::cancellation::CancellationToken;
use crate::error::Result;
use crate::partition_splitter::AffinityPartition;
use crate::types::PartitionId;

/// Per-host matcher output, plus partitions the matcher could not place on
/// any host (an empty edge set — hosts named but absent from the roster).
#[derive(Debug, Clone)]
pub struct MatchedPartitions {
    /// `host_to_partitions[h]` lists the original partition indices matched
    /// to host `h`, in ascending local-affinity-index order.
    pub host_to_partitions: Vec<Vec<PartitionId>>,
    /// Affinity-bearing partitions with no viable host at all. These are
    /// folded into the bare/residual path rather than force-matched.
    pub unplaceable: Vec<PartitionId>,
    /// Number of outer rebalance passes performed, for logging.
    pub iterations: usize,
}

/// Match `affinity_partitions` against the hosts known to `index`.
pub fn match_partitions(
    affinity_partitions: &[AffinityPartition],
    index: &AffinityIndex,
    cancellation: Option<&CancellationToken>,
) -> Result<MatchedPartitions> {
    let span = info_span!(
        "bipartite_match",
        partitions = affinity_partitions.len(),
        hosts = index.host_count()
    );
    let _enter = span.enter();

    let table = graph::build(affinity_partitions, index);
    let output = bipartite::run(&table.edges, &table.rev, table.host_count(), cancellation)?;

    let mut host_to_partitions: Vec<Vec<PartitionId>> = vec![Vec::new(); index.host_count()];
    let mut unplaceable = Vec::new();

    for (local_idx, matched_host) in output.match_for.iter().enumerate() {
        let original = affinity_partitions[local_idx].original;
        match matched_host {
            Some(host) => host_to_partitions[host.0].push(original),
            None => unplaceable.push(original),
        }
    }

    debug!(
        iterations = output.iterations,
        unplaceable = unplaceable.len(),
        "bipartite match complete"
    );

    Ok(MatchedPartitions {
        host_to_partitions,
        unplaceable,
        iterations: output.iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Endpoint;

    fn partition(original: usize, hosts: &[&str]) -> AffinityPartition {
        AffinityPartition {
            original: PartitionId(original),
            preferred_hosts: hosts.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn s1_two_on_shared_host_one_on_other() {
        let endpoints = vec![Endpoint::new("h1", 1), Endpoint::new("h2", 1)];
        let index = AffinityIndex::build(&endpoints).unwrap();
        let partitions = vec![
            partition(0, &["h1"]),
            partition(1, &["h1"]),
            partition(2, &["h2"]),
        ];

        let out = match_partitions(&partitions, &index, None).unwrap();

        assert_eq!(out.host_to_partitions[0], vec![PartitionId(0), PartitionId(1)]);
        assert_eq!(out.host_to_partitions[1], vec![PartitionId(2)]);
        assert!(out.unplaceable.is_empty());
    }

    #[test]
    fn unknown_host_partition_is_unplaceable() {
        let endpoints = vec![Endpoint::new("h1", 1)];
        let index = AffinityIndex::build(&endpoints).unwrap();
        let partitions = vec![partition(0, &["hX"])];

        let out = match_partitions(&partitions, &index, None).unwrap();
        assert_eq!(out.unplaceable, vec![PartitionId(0)]);
        assert_eq!(out.host_to_partitions[0], Vec::<PartitionId>::new());
    }
}
