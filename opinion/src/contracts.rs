//! Known Opinion contract addresses.

use alloy::primitives::{Address, address};

/// The Opinion exchange, emitter of `OrderFilled`.
pub const OPINION_EXCHANGE: Address = address!("5F45344126D6488025B0b84A3A8189F2487a7246");

/// The Opinion fee manager, emitter of `RebateEarned`.
pub const OPINION_FEE_MANAGER: Address = address!("C9063Dc52dEEfb518E5b6634A6b8D624bc5d7c36");

/// Contract addresses for a single chain deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// The exchange contract.
    pub exchange: Address,
    /// The fee manager contract.
    pub fee_manager: Address,
}
