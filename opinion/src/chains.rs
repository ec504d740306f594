//! Chains the Opinion adapter reports on.
//!
//! The exchange is deployed on BNB Smart Chain only. The enum is
//! non-exhaustive so further deployments can be added without a breaking
//! change.

use serde::Serialize;

use crate::contracts::{Deployment, OPINION_EXCHANGE, OPINION_FEE_MANAGER};

/// A chain with an Opinion deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Chain {
    /// BNB Smart Chain Mainnet (chain ID 56).
    Bsc,
}

impl Chain {
    /// All supported chains.
    pub const ALL: &[Self] = &[Self::Bsc];

    /// Returns the EIP-155 chain ID.
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Bsc => 56,
        }
    }

    /// Returns the identifier the aggregation host uses for this chain.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Bsc => "bsc",
        }
    }

    /// Returns the Opinion contract addresses on this chain.
    #[must_use]
    pub const fn deployment(self) -> Deployment {
        match self {
            Self::Bsc => Deployment {
                exchange: OPINION_EXCHANGE,
                fee_manager: OPINION_FEE_MANAGER,
            },
        }
    }

    /// Look up a [`Chain`] by its EIP-155 chain ID.
    #[must_use]
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::ALL.iter().find(|c| c.chain_id() == chain_id).copied()
    }

    /// Look up a [`Chain`] by its host identifier (e.g. `"bsc"`).
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
            .copied()
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
