//! Top-level orchestration of the four-stage assignment pipeline:
//! affinity indexing, partition splitting, bipartite matching, endpoint
//! expansion, and residual distribution.

use tracing::{debug, info, info_span};

use crate::affinity_index::AffinityIndex;
use crate::cancellation::CancellationToken;
use crate::config::AssignmentConfig;
use crate::error::Result;
use crate::expansion;
use crate::matching;
use crate::partition_splitter;
use crate::residual;
use crate::types::{Endpoint, PartitionId};
use crate::verify::{self, VerificationReport};

/// The outcome of a single [`assign_with`] call.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// `per_endpoint[i]` lists the original partition indices assigned to
    /// `endpoints[i]`, in the same order the endpoints were given.
    pub per_endpoint: Vec<Vec<PartitionId>>,
    /// Present when [`crate::config::VerificationConfig::enabled`] is set
    /// (the default).
    pub verification: Option<VerificationReport>,
}

/// Assign `affinities` to `endpoints` using the default configuration: no
/// cancellation support, verification enabled but never escalating.
///
/// `affinities[p]` is the ordered, possibly-empty list of preferred
/// hostnames for partition `p`. `endpoints` must be non-empty.
pub fn assign(affinities: &[Vec<String>], endpoints: &[Endpoint]) -> Result<Vec<Vec<PartitionId>>> {
    let result = assign_with(affinities, endpoints, &AssignmentConfig::default(), None)?;
    Ok(result.per_endpoint)
}

/// Assign `affinities` to `endpoints`, with explicit configuration and an
/// optional cooperative cancellation handle.
pub fn assign_with(
    affinities: &[Vec<String>],
    endpoints: &[Endpoint],
    config: &AssignmentConfig,
    cancellation: Option<&CancellationToken>,
) -> Result<Assignment> {
    let span = info_span!(
        "assign",
        partition_count = affinities.len(),
        endpoint_count = endpoints.len()
    );
    let _enter = span.enter();

    let index = AffinityIndex::build(endpoints)?;
    let split = partition_splitter::split(affinities);

    debug!(
        affinity_count = split.affinity_partitions.len(),
        bare_count = split.bare_partitions.len(),
        "partitions split by affinity"
    );

    let matched = matching::match_partitions(&split.affinity_partitions, &index, cancellation)?;

    info!(
        iterations = matched.iterations,
        unplaceable = matched.unplaceable.len(),
        "bipartite matching complete"
    );

    let bare = residual::merge_bare(&split.bare_partitions, &matched.unplaceable);

    let expanded = expansion::expand(
        &matched.host_to_partitions,
        endpoints.len(),
        &index,
        cancellation,
    )?;

    let per_endpoint = residual::distribute(expanded, &bare);

    let verification = config.verification.enabled.then(|| {
        verify::verify(
            affinities,
            endpoints,
            &per_endpoint,
            config.verification.escalate_above,
        )
    });

    Ok(Assignment {
        per_endpoint,
        verification,
    })
}
