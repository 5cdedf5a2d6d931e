//! Separates input partitions into those carrying affinity and those
//! without, preserving original partition index in both streams.

use tracing::debug;

use crate::types::PartitionId;

/// A partition that listed at least one preferred host, together with its
/// original index. Hosts are kept as raw strings here; resolution against
/// the endpoint roster (and silent dropping of unknown hosts) happens when
/// the matcher builds its edge table.
#[derive(Debug, Clone)]
pub struct AffinityPartition {
    /// Index of this partition in the original `affinities` array.
    pub original: PartitionId,
    /// Raw preferred hostnames, in the order the caller supplied them.
    pub preferred_hosts: Vec<String>,
}

/// Result of splitting the input partitions by whether they carry
/// affinity.
#[derive(Debug, Clone, Default)]
pub struct SplitPartitions {
    /// Partitions with a non-empty preferred-host list, in ascending
    /// original-index order. Classification is based on the *raw* list
    /// being non-empty, even if none of the hosts are in the endpoint
    /// roster — see the matcher's handling of partitions with an empty
    /// resolved edge set.
    pub affinity_partitions: Vec<AffinityPartition>,
    /// Original indices of partitions with an empty preferred-host list,
    /// in ascending order.
    pub bare_partitions: Vec<PartitionId>,
}

/// Split `affinities` (one preferred-host list per partition, in partition
/// order) into affinity-bearing and bare partitions.
pub fn split(affinities: &[Vec<String>]) -> SplitPartitions {
    let mut result = SplitPartitions::default();

    for (idx, hosts) in affinities.iter().enumerate() {
        let original = PartitionId(idx);
        if hosts.is_empty() {
            result.bare_partitions.push(original);
        } else {
            result.affinity_partitions.push(AffinityPartition {
                original,
                preferred_hosts: hosts.clone(),
            });
        }
    }

    debug!(
        affinity_count = result.affinity_partitions.len(),
        bare_count = result.bare_partitions.len(),
        "split partitions by affinity"
    );

    result
}
