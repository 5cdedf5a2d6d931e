//! Distributes each host's matched partitions across the endpoints bound
//! to that host, keeping per-endpoint load even.

use tracing::debug;

use crate::affinity_index::AffinityIndex;
use crate::cancellation::CancellationToken;
use crate::error::{Error, Result};
use crate::types::{HostId, PartitionId};

/// Split each host's matched partitions across its bound endpoints.
///
/// Endpoint `j` of a host with `k` endpoints and `n` matched partitions
/// receives `n / k` partitions, plus one extra if `j` is among the first
/// `n % k` endpoints — so sizes within a host differ by at most one.
/// Partitions are sliced in the order the matcher produced them (ascending
/// local affinity-partition index, already translated to original
/// partition index by the matcher).
///
/// Cancellation is polled once per host, the natural unit of work here —
/// each host's endpoints are filled as a batch.
pub fn expand(
    host_to_partitions: &[Vec<PartitionId>],
    endpoint_count: usize,
    index: &AffinityIndex,
    cancellation: Option<&CancellationToken>,
) -> Result<Vec<Vec<PartitionId>>> {
    let mut per_endpoint: Vec<Vec<PartitionId>> = vec![Vec::new(); endpoint_count];

    for (host, partitions) in host_to_partitions.iter().enumerate() {
        if let Some(token) = cancellation {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }

        let endpoint_ids = index.endpoints_for_host(HostId(host));
        let k_h = endpoint_ids.len();
        if k_h == 0 {
            continue;
        }

        let n_h = partitions.len();
        let base = n_h / k_h;
        let extra = n_h % k_h;
        let mut offset = 0;

        for (j, &endpoint_idx) in endpoint_ids.iter().enumerate() {
            let take = base + usize::from(j < extra);
            per_endpoint[endpoint_idx].extend_from_slice(&partitions[offset..offset + take]);
            offset += take;
        }
    }

    debug!(
        endpoint_count,
        "expanded host assignments across bound endpoints"
    );

    Ok(per_endpoint)
}
