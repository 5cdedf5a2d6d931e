//! # locality-assign
//!
//! Locality-aware partition-to-endpoint assignment for distributed batch
//! jobs streaming into a clustered analytical database. Input partitions,
//! each annotated with a set of preferred hosts, are dispatched to
//! database-side network endpoints so that every endpoint receives a
//! balanced share of work while honoring host affinity whenever possible.
//!
//! ## Pipeline
//!
//! ```text
//! affinities + endpoints
//!   -> AffinityIndex        (dense host indexing)
//!   -> PartitionSplitter    (affinity-bearing vs. bare partitions)
//!   -> BipartiteMatcher     (balanced, affinity-respecting matching)
//!   -> EndpointExpander     (per-host -> per-endpoint)
//!   -> ResidualDistributor  (fold in bare partitions)
//! ```
//!
//! The matcher is a variant of Hopcroft-Karp-style augmenting-path
//! rebalancing: every host ends at or below `ceil(affinity_partitions /
//! hosts)`, unless the affinity graph itself makes that impossible.
//!
//! ## Quick start
//!
//! ```rust
//! use locality_assign::{assign, Endpoint};
//!
//! let affinities = vec![
//!     vec!["db1".to_string()],
//!     vec!["db1".to_string()],
//!     vec!["db2".to_string()],
//! ];
//! let endpoints = vec![Endpoint::new("db1", 5433), Endpoint::new("db2", 5433)];
//!
//! let per_endpoint = assign(&affinities, &endpoints).unwrap();
//! assert_eq!(per_endpoint[0].len(), 2);
//! assert_eq!(per_endpoint[1].len(), 1);
//! ```
//!
//! ## Scope
//!
//! This crate is the assignment core only. Database connectivity, columnar
//! encoders, wire-protocol framing, and the discovery of affinity metadata
//! from a distributed filesystem are external collaborators, not
//! implemented here.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

mod affinity_index;
mod cancellation;
mod config;
mod engine;
mod error;
mod expansion;
mod matching;
mod partition_splitter;
mod residual;
mod types;
mod verify;

pub use affinity_index::AffinityIndex;
pub use cancellation::CancellationToken;
pub use config::{AssignmentConfig, VerificationConfig};
pub use engine::{assign, assign_with, Assignment};
pub use error::{Error, Result};
pub use partition_splitter::{split, AffinityPartition, SplitPartitions};
pub use types::{Endpoint, HostId, PartitionId};
pub use verify::VerificationReport;
