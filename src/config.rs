//! Ambient configuration for the assignment engine.
//!
//! The matcher itself takes no configuration — `target` is derived from
//! the input sizes and must not be parameterized. What's configurable here
//! is strictly non-algorithmic: whether the post-assignment verification
//! pass runs, and at what threshold it escalates.

use serde::{Deserialize, Serialize};

/// Top-level configuration for a single [`crate::assign_with`] call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentConfig {
    /// Controls the post-assignment `verifyMatching` pass.
    pub verification: VerificationConfig,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            verification: VerificationConfig::default(),
        }
    }
}

/// Configuration for the advisory post-assignment verification pass.
///
/// Verification never turns a successful assignment into an error on its
/// own: a high remote-read fraction is a placement-quality signal, not a
/// broken invariant. `escalate_above` only controls whether that signal is
/// surfaced in the returned [`crate::VerificationReport`] as
/// `exceeded_threshold`, for callers who want to alert on it themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Whether to run the verification pass at all. Defaults to `true`;
    /// the pass is cheap (`O(P)`) relative to the matcher.
    pub enabled: bool,

    /// If set, a remote-partition fraction strictly above this value
    /// causes the returned report to flag `exceeded_threshold = true`.
    /// `None` (the default) disables escalation entirely.
    pub escalate_above: Option<f64>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            escalate_above: None,
        }
    }
}
