//! The balanced bipartite matcher: seed assignment followed by an
//! augmenting-path rebalance that drives every host's load down to
//! `ceil(nA / nB)` whenever the affinity graph admits it.
//!
//! The augmenting-path search is iterative — an explicit work stack of
//! `(partition, edge_cursor)` frames — so it tolerates arbitrarily long
//! chains without growing the call stack.

use crate::cancellation::CancellationToken;
use crate::error::{Error, Result};
use crate::types::HostId;

/// Output of a single matcher run.
#[derive(Debug, Clone)]
pub struct MatchOutput {
    /// `match_for[a]` is the host local affinity-partition `a` landed on,
    /// or `None` if no viable host was ever available to it (an empty
    /// edge set — see the partition splitter's handling of hosts outside
    /// the roster).
    pub match_for: Vec<Option<HostId>>,
    /// Number of outer rebalance passes performed, for logging.
    pub iterations: usize,
}

/// Run the matcher over the given forward/reverse edge tables.
///
/// `n_b == 0` skips the matcher entirely: every partition comes back
/// unmatched and flows to residual distribution.
pub fn run(
    edges: &[Vec<HostId>],
    rev: &[Vec<usize>],
    n_b: usize,
    cancellation: Option<&CancellationToken>,
) -> Result<MatchOutput> {
    let n_a = edges.len();

    if n_b == 0 {
        return Ok(MatchOutput {
            match_for: vec![None; n_a],
            iterations: 0,
        });
    }

    let target = target_load(n_a, n_b);
    let mut match_for: Vec<Option<HostId>> = vec![None; n_a];
    let mut load = vec![0u32; n_b];

    seed(edges, &mut match_for, &mut load);

    let iterations = rebalance(edges, rev, &mut match_for, &mut load, target, cancellation)?;

    debug_assert!(
        match_for
            .iter()
            .enumerate()
            .all(|(a, m)| !edges[a].is_empty() == m.is_some()),
        "a partition must be matched iff it has at least one viable host"
    );

    Ok(MatchOutput {
        match_for,
        iterations,
    })
}

/// `target = ceil(nA / nB)`, the ideal upper bound on load per host.
fn target_load(n_a: usize, n_b: usize) -> u32 {
    if n_b == 0 {
        return 0;
    }
    ((n_a + n_b - 1) / n_b) as u32
}

/// Seed pass: assign each partition to the least-loaded of its preferred
/// hosts, breaking ties by lowest host index, in ascending partition order.
fn seed(edges: &[Vec<HostId>], match_for: &mut [Option<HostId>], load: &mut [u32]) {
    for (a, hosts) in edges.iter().enumerate() {
        if let Some(&best) = hosts.iter().min_by_key(|&&b| (load[b.0], b.0)) {
            reassign(match_for, load, a, best);
        }
    }
}

/// Rebalance pass: repeatedly scan overloaded hosts and attempt to move one
/// of their matched partitions onto an under-target host via an augmenting
/// path, until a full pass produces no change.
fn rebalance(
    edges: &[Vec<HostId>],
    rev: &[Vec<usize>],
    match_for: &mut [Option<HostId>],
    load: &mut [u32],
    target: u32,
    cancellation: Option<&CancellationToken>,
) -> Result<usize> {
    let n_a = match_for.len();
    let n_b = load.len();
    let mut cursor = vec![0usize; n_b];
    let mut visited = vec![false; n_a];
    let mut iterations = 0usize;

    loop {
        if let Some(token) = cancellation {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }

        visited.iter_mut().for_each(|v| *v = false);
        cursor.iter_mut().for_each(|c| *c = 0);
        let mut dirty = false;

        let overloaded: Vec<usize> = (0..n_b).filter(|&b| load[b] > target).collect();
        for b in overloaded {
            while load[b] > target && cursor[b] < rev[b].len() {
                let a = rev[b][cursor[b]];
                cursor[b] += 1;
                if match_for[a] == Some(HostId(b)) && !visited[a] {
                    if find_augmenting_path(
                        a,
                        edges,
                        rev,
                        match_for,
                        load,
                        &mut cursor,
                        &mut visited,
                        target,
                    ) {
                        dirty = true;
                    }
                }
            }
        }

        iterations += 1;
        if !dirty {
            break;
        }
    }

    Ok(iterations)
}

/// Reassign partition `a` to `new_host`, maintaining `load` for both the
/// host it's leaving (if any) and the one it's joining.
fn reassign(match_for: &mut [Option<HostId>], load: &mut [u32], a: usize, new_host: HostId) {
    if let Some(old) = match_for[a] {
        load[old.0] -= 1;
    }
    match_for[a] = Some(new_host);
    load[new_host.0] += 1;
}

/// Explicit-stack DFS for an augmenting path starting at `start`.
///
/// Stack frames are `(partition, next_edge_index_to_try)`, with `-1`
/// meaning "not yet visited". On success every frame popped after the
/// terminal success rewrites its partition's match to the edge it was
/// paused on, propagating the freed slot back up the chain to `start`.
fn find_augmenting_path(
    start: usize,
    edges: &[Vec<HostId>],
    rev: &[Vec<usize>],
    match_for: &mut [Option<HostId>],
    load: &mut [u32],
    cursor: &mut [usize],
    visited: &mut [bool],
    target: u32,
) -> bool {
    let mut stack: Vec<(usize, isize)> = vec![(start, -1)];
    let mut found = false;

    while let Some((a, afidx)) = stack.pop() {
        if found {
            let new_host = edges[a][afidx as usize];
            reassign(match_for, load, a, new_host);
            continue;
        }

        if afidx == -1 {
            visited[a] = true;
            if let Some(&free_host) = edges[a]
                .iter()
                .find(|&&b| Some(b) != match_for[a] && load[b.0] < target)
            {
                reassign(match_for, load, a, free_host);
                found = true;
                continue;
            }
        }

        let next_idx = afidx + 1;
        if (next_idx as usize) < edges[a].len() {
            let b_prime = edges[a][next_idx as usize];
            let candidates = &rev[b_prime.0];
            let mut next_a = None;
            while cursor[b_prime.0] < candidates.len() {
                let p = candidates[cursor[b_prime.0]];
                if !visited[p] && match_for[p] == Some(b_prime) {
                    next_a = Some(p);
                    break;
                }
                cursor[b_prime.0] += 1;
            }

            stack.push((a, next_idx));
            if let Some(p) = next_a {
                stack.push((p, -1));
            }
        }
    }

    found
}
