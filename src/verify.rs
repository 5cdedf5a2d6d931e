//! Advisory post-assignment verification: how many partitions ended up on
//! an endpoint whose host is outside their own preferred set.
//!
//! This never turns a successful assignment into an error — a high
//! remote-read fraction is a placement-quality signal the caller's
//! scheduler may want to alert on, not a broken invariant. See
//! [`crate::config::VerificationConfig`].

use tracing::{debug, info};

use crate::types::{Endpoint, PartitionId};

/// Result of the advisory verification pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationReport {
    /// Partitions placed on an endpoint whose host isn't in their own
    /// preferred-host list. Bare partitions (empty preferred list) are
    /// never counted as remote — they have no locality preference to
    /// violate.
    pub remote_count: usize,
    /// Number of affinity-bearing partitions considered (the denominator
    /// for `remote_fraction`).
    pub considered_count: usize,
    /// `remote_count / considered_count`, or `0.0` if `considered_count`
    /// is zero.
    pub remote_fraction: f64,
    /// Set when [`crate::config::VerificationConfig::escalate_above`] is
    /// configured and `remote_fraction` exceeds it.
    pub exceeded_threshold: bool,
}

/// Verify the final per-endpoint assignment against each partition's
/// original preferred hosts.
pub fn verify(
    affinities: &[Vec<String>],
    endpoints: &[Endpoint],
    assignment: &[Vec<PartitionId>],
    escalate_above: Option<f64>,
) -> VerificationReport {
    let mut remote_count = 0usize;
    let mut considered_count = 0usize;

    for (endpoint_idx, partitions) in assignment.iter().enumerate() {
        let endpoint_host = &endpoints[endpoint_idx].host;
        for &partition in partitions {
            let preferred = &affinities[partition.0];
            if preferred.is_empty() {
                continue;
            }
            considered_count += 1;
            if !preferred.iter().any(|h| h == endpoint_host) {
                remote_count += 1;
            }
        }
    }

    let remote_fraction = if considered_count == 0 {
        0.0
    } else {
        remote_count as f64 / considered_count as f64
    };
    let exceeded_threshold = escalate_above
        .map(|threshold| remote_fraction > threshold)
        .unwrap_or(false);

    if exceeded_threshold {
        info!(
            remote_count,
            considered_count, remote_fraction, "remote-read fraction exceeded configured threshold"
        );
    } else {
        debug!(remote_count, considered_count, remote_fraction, "verified assignment locality");
    }

    VerificationReport {
        remote_count,
        considered_count,
        remote_fraction,
        exceeded_threshold,
    }
}
