//! Opinion contract events and the queries used to retrieve them.

use alloy::primitives::{Address, B256, U256};
use alloy::rpc::types::Log;
use alloy::sol_types::SolEvent;

use crate::error::Result;

alloy::sol! {
    /// Emitted by the exchange for every order execution.
    #[derive(Debug, PartialEq, Eq)]
    event OrderFilled(
        bytes32 indexed orderHash,
        address indexed maker,
        address indexed taker,
        uint256 makerAssetId,
        uint256 takerAssetId,
        uint256 makerAmountFilled,
        uint256 takerAmountFilled,
        uint256 fee
    );

    /// Emitted by the fee manager when a trader earns a fee rebate.
    #[derive(Debug, PartialEq, Eq)]
    event RebateEarned(
        address indexed referrer,
        address indexed trader,
        address indexed collateralToken,
        uint256 amount
    );
}

/// One side of an order fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The account that posted the order.
    Maker,
    /// The account that filled it.
    Taker,
}

impl OrderFilled {
    /// The side paying collateral, i.e. the one whose asset id is zero.
    ///
    /// Only the maker side is inspected: when the maker asset id is non-zero
    /// the taker side is taken to be the collateral leg.
    #[must_use]
    pub fn collateral_side(&self) -> Side {
        if self.makerAssetId.is_zero() {
            Side::Maker
        } else {
            Side::Taker
        }
    }

    /// Raw filled amount on the collateral leg.
    #[must_use]
    pub fn collateral_amount(&self) -> U256 {
        match self.collateral_side() {
            Side::Maker => self.makerAmountFilled,
            Side::Taker => self.takerAmountFilled,
        }
    }

    /// Maker and taker, in that order.
    #[must_use]
    pub const fn counterparties(&self) -> [Address; 2] {
        [self.maker, self.taker]
    }
}

/// A log retrieval request handed to the host.
///
/// Mirrors the host's `getLogs({ eventAbi, target })` call: the event is
/// identified both by its human-readable signature and by its topic0 hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    /// Contract emitting the event.
    pub target: Address,
    /// Canonical event signature, e.g. `RebateEarned(address,address,address,uint256)`.
    pub event_signature: &'static str,
    /// `keccak256` of [`Self::event_signature`].
    pub topic0: B256,
}

impl LogQuery {
    /// Build a query for event `E` emitted by `target`.
    #[must_use]
    pub const fn for_event<E: SolEvent>(target: Address) -> Self {
        Self {
            target,
            event_signature: E::SIGNATURE,
            topic0: E::SIGNATURE_HASH,
        }
    }

    /// Whether `log` was emitted by the target and carries the event's topic0.
    #[must_use]
    pub fn matches(&self, log: &Log) -> bool {
        log.address() == self.target && log.topics().first() == Some(&self.topic0)
    }
}

/// Decode raw RPC logs into events of type `E`.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::Error::Decode) on the first log whose
/// topics or data do not match `E`.
pub fn decode_logs<E: SolEvent>(logs: &[Log]) -> Result<Vec<E>> {
    logs.iter()
        .map(|log| Ok(log.log_decode::<E>()?.inner.data))
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Bytes, LogData, address, b256};

    use super::*;
    use crate::contracts::{OPINION_EXCHANGE, OPINION_FEE_MANAGER};

    fn fill(maker_asset: u64, maker_amount: u64, taker_amount: u64) -> OrderFilled {
        OrderFilled {
            orderHash: B256::repeat_byte(0x11),
            maker: address!("00000000000000000000000000000000000000aa"),
            taker: address!("00000000000000000000000000000000000000bb"),
            makerAssetId: U256::from(maker_asset),
            takerAssetId: U256::from(if maker_asset == 0 { 7 } else { 0 }),
            makerAmountFilled: U256::from(maker_amount),
            takerAmountFilled: U256::from(taker_amount),
            fee: U256::from(1),
        }
    }

    fn rpc_log<E: SolEvent>(address: Address, event: &E) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn collateral_leg_follows_maker_asset_id() {
        let buy = fill(0, 40, 100);
        assert_eq!(buy.collateral_side(), Side::Maker, "maker pays collateral");
        assert_eq!(buy.collateral_amount(), U256::from(40), "maker amount");

        let sell = fill(7, 100, 60);
        assert_eq!(sell.collateral_side(), Side::Taker, "taker pays collateral");
        assert_eq!(sell.collateral_amount(), U256::from(60), "taker amount");
    }

    #[test]
    fn taker_asset_id_is_never_consulted() {
        let both_zero = OrderFilled {
            takerAssetId: U256::ZERO,
            ..fill(0, 10, 20)
        };
        assert_eq!(both_zero.collateral_side(), Side::Maker, "maker id zero wins");
        assert_eq!(both_zero.collateral_amount(), U256::from(10), "maker amount");

        let neither_zero = OrderFilled {
            makerAssetId: U256::from(3),
            takerAssetId: U256::from(4),
            ..fill(3, 100, 200)
        };
        assert_eq!(neither_zero.collateral_side(), Side::Taker, "falls back to taker");
        assert_eq!(neither_zero.collateral_amount(), U256::from(200), "taker amount");
    }

    #[test]
    fn signatures_match_the_deployed_abi() {
        assert_eq!(
            OrderFilled::SIGNATURE,
            "OrderFilled(bytes32,address,address,uint256,uint256,uint256,uint256,uint256)",
            "order filled signature"
        );
        assert_eq!(
            RebateEarned::SIGNATURE,
            "RebateEarned(address,address,address,uint256)",
            "rebate earned signature"
        );
        // Same event as the CTF exchange family.
        assert_eq!(
            OrderFilled::SIGNATURE_HASH,
            b256!("d0a08e8c493f9c94f29311604c9de1b4e8c8d4c06bd0c789af57f2d65bfec0f6"),
            "order filled topic0"
        );
    }

    #[test]
    fn query_matches_target_and_topic() {
        let query = LogQuery::for_event::<OrderFilled>(OPINION_EXCHANGE);
        let event = fill(0, 1, 1);

        assert!(query.matches(&rpc_log(OPINION_EXCHANGE, &event)), "same contract and event");
        assert!(
            !query.matches(&rpc_log(OPINION_FEE_MANAGER, &event)),
            "other contract"
        );

        let rebate = RebateEarned {
            referrer: Address::ZERO,
            trader: Address::ZERO,
            collateralToken: Address::ZERO,
            amount: U256::from(5),
        };
        assert!(!query.matches(&rpc_log(OPINION_EXCHANGE, &rebate)), "other event");
    }

    #[test]
    fn decode_round_trips_and_rejects_garbage() {
        let event = fill(0, 2, 3);
        let decoded = decode_logs::<OrderFilled>(&[rpc_log(OPINION_EXCHANGE, &event)]).unwrap();
        assert_eq!(decoded, vec![event], "decoded event");

        let truncated = Log {
            inner: alloy::primitives::Log {
                address: OPINION_EXCHANGE,
                data: LogData::new_unchecked(
                    vec![OrderFilled::SIGNATURE_HASH, B256::ZERO, B256::ZERO, B256::ZERO],
                    Bytes::from_static(&[0u8; 8]),
                ),
            },
            ..Default::default()
        };
        assert!(
            matches!(
                decode_logs::<OrderFilled>(&[truncated]),
                Err(crate::Error::Decode(_))
            ),
            "short data must fail"
        );
    }
}
