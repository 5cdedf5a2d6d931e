//! Folds affinity-less ("bare") partitions into the per-endpoint lists
//! produced by endpoint expansion, never disturbing what's already placed.

use tracing::debug;

use crate::types::PartitionId;

/// Merge two ascending-by-[`PartitionId`] sequences into one ascending
/// sequence. Used to combine the splitter's originally-bare partitions
/// with affinity-bearing partitions the matcher could never place — both
/// streams are individually ordered by original partition index.
pub fn merge_bare(bare: &[PartitionId], unplaceable: &[PartitionId]) -> Vec<PartitionId> {
    let mut merged = Vec::with_capacity(bare.len() + unplaceable.len());
    let mut i = 0;
    let mut j = 0;
    while i < bare.len() && j < unplaceable.len() {
        if bare[i].0 <= unplaceable[j].0 {
            merged.push(bare[i]);
            i += 1;
        } else {
            merged.push(unplaceable[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&bare[i..]);
    merged.extend_from_slice(&unplaceable[j..]);
    merged
}

/// Distribute `bare` partitions across `per_endpoint`, first levelling
/// every endpoint up to the post-expansion maximum size, then wrapping any
/// remainder round-robin starting at endpoint 0. Never removes a
/// previously placed partition — only appends.
pub fn distribute(mut per_endpoint: Vec<Vec<PartitionId>>, bare: &[PartitionId]) -> Vec<Vec<PartitionId>> {
    if bare.is_empty() {
        return per_endpoint;
    }

    let max_size = per_endpoint.iter().map(Vec::len).max().unwrap_or(0);
    let mut remaining = bare.iter().copied().peekable();

    for endpoint in per_endpoint.iter_mut() {
        if remaining.peek().is_none() {
            break;
        }
        let current = endpoint.len();
        if current >= max_size {
            continue;
        }
        let room = max_size - current;
        for _ in 0..room {
            match remaining.next() {
                Some(p) => endpoint.push(p),
                None => break,
            }
        }
    }

    let endpoint_count = per_endpoint.len();
    let mut next_endpoint = 0;
    let mut round_robin_count = 0;
    for p in remaining {
        per_endpoint[next_endpoint % endpoint_count].push(p);
        next_endpoint += 1;
        round_robin_count += 1;
    }

    debug!(
        bare_count = bare.len(),
        round_robin_count, "folded bare partitions into endpoint assignments"
    );

    per_endpoint
}
