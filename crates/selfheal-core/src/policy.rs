//! Block Public Access policy values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four Block Public Access switches of a bucket, applied in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccessPolicy {
    pub block_public_acls: bool,
    pub ignore_public_acls: bool,
    pub block_public_policy: bool,
    pub restrict_public_buckets: bool,
}

impl PublicAccessPolicy {
    /// Every protection disabled.
    pub const OPEN: Self = Self::uniform(false);

    /// Every protection enabled.
    pub const LOCKED: Self = Self::uniform(true);

    const fn uniform(value: bool) -> Self {
        Self {
            block_public_acls: value,
            ignore_public_acls: value,
            block_public_policy: value,
            restrict_public_buckets: value,
        }
    }

    /// Canonical state of this policy, `None` for mixed switches.
    pub fn state(&self) -> Option<PolicyState> {
        match *self {
            Self::OPEN => Some(PolicyState::Open),
            Self::LOCKED => Some(PolicyState::Locked),
            _ => None,
        }
    }
}

/// The two canonical policies the benchmark ever requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyState {
    Open,
    Locked,
}

impl PolicyState {
    pub fn policy(self) -> PublicAccessPolicy {
        match self {
            PolicyState::Open => PublicAccessPolicy::OPEN,
            PolicyState::Locked => PublicAccessPolicy::LOCKED,
        }
    }
}

impl From<PolicyState> for PublicAccessPolicy {
    fn from(state: PolicyState) -> Self {
        state.policy()
    }
}

impl fmt::Display for PolicyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyState::Open => write!(f, "open"),
            PolicyState::Locked => write!(f, "locked"),
        }
    }
}
