//! The Opinion adapter: metadata, result shape and the daily fetch.
//!
//! Fees are taker fees charged by the exchange minus rebates paid out by
//! the fee manager. All fees are revenue and all revenue goes to the
//! protocol, so the three fee dimensions are always equal.

use std::future::Future;

use chrono::NaiveDate;
use serde::Serialize;

use crate::balances::{Balances, COLLATERAL_DECIMALS};
use crate::blacklist;
use crate::chains::Chain;
use crate::error::Result;
use crate::events::{LogQuery, OrderFilled, RebateEarned, decode_logs};
use crate::options::FetchOptions;

/// Human-readable description of how each dimension is derived.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Methodology {
    /// How volume is counted.
    #[serde(rename = "Volume")]
    pub volume: &'static str,

    /// How fees are counted.
    #[serde(rename = "Fees")]
    pub fees: &'static str,

    /// How revenue relates to fees.
    #[serde(rename = "Revenue")]
    pub revenue: &'static str,

    /// How protocol revenue relates to revenue.
    #[serde(rename = "ProtocolRevenue")]
    pub protocol_revenue: &'static str,
}

/// Static description of an adapter as registered with the host.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdapterMetadata {
    /// Host adapter interface version.
    pub version: u8,

    /// Per-dimension methodology.
    pub methodology: Methodology,

    /// Chains the adapter reports on.
    pub chains: &'static [Chain],

    /// First day with data, as `YYYY-MM-DD`.
    pub start: &'static str,
}

impl AdapterMetadata {
    /// [`Self::start`] as a calendar date.
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.start, "%Y-%m-%d").ok()
    }
}

/// The dimensions returned to the host for one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    /// Collateral volume, excluding wash trading.
    pub daily_volume: Balances,

    /// Trade fees minus rebates.
    pub daily_fees: Balances,

    /// Equal to [`Self::daily_fees`].
    pub daily_revenue: Balances,

    /// Equal to [`Self::daily_fees`].
    pub daily_protocol_revenue: Balances,
}

/// An adapter the host can register and run once per window.
pub trait Adapter {
    /// Static registration data.
    fn metadata(&self) -> &AdapterMetadata;

    /// Compute the dimensions for the window described by `options`.
    ///
    /// # Errors
    ///
    /// Propagates any log retrieval or decoding failure; no partial result
    /// is returned.
    fn fetch<O: FetchOptions + Sync>(
        &self,
        options: &O,
    ) -> impl Future<Output = Result<FetchResult>> + Send;
}

/// Volume and fees for the Opinion prediction market.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpinionAdapter;

impl OpinionAdapter {
    /// Registration data for the Opinion adapter.
    pub const METADATA: AdapterMetadata = AdapterMetadata {
        version: 2,
        methodology: Methodology {
            volume: "Opinion prediction market trading volume, excluding identified wash trading wallets",
            fees: "Taker fees collected by opinion minus rebate earned to traders.",
            revenue: "All the fees are revenue",
            protocol_revenue: "All the revenue goes to protocol",
        },
        chains: Chain::ALL,
        start: "2025-10-22",
    };
}

impl Adapter for OpinionAdapter {
    fn metadata(&self) -> &AdapterMetadata {
        &Self::METADATA
    }

    async fn fetch<O: FetchOptions + Sync>(&self, options: &O) -> Result<FetchResult> {
        let chain = options.chain();
        let window = options.window();
        let deployment = chain.deployment();

        let mut daily_volume = options.create_balances();
        let mut trade_fees = options.create_balances();
        let mut rebate_fees = options.create_balances();

        let (fill_logs, rebate_logs) = tokio::try_join!(
            options.get_logs(LogQuery::for_event::<OrderFilled>(deployment.exchange)),
            options.get_logs(LogQuery::for_event::<RebateEarned>(deployment.fee_manager))
        )?;
        tracing::debug!(
            %chain,
            %window,
            fills = fill_logs.len(),
            rebates = rebate_logs.len(),
            "logs retrieved"
        );

        let fills = decode_logs::<OrderFilled>(&fill_logs)?;
        let rebates = decode_logs::<RebateEarned>(&rebate_logs)?;

        let mut excluded = 0usize;
        for fill in &fills {
            trade_fees.add_scaled(fill.fee, COLLATERAL_DECIMALS)?;

            if blacklist::any_blacklisted(&fill.counterparties()) {
                excluded += 1;
                continue;
            }
            // Both legs of a fill are reported, so each counts for half.
            daily_volume.add_scaled_half(fill.collateral_amount(), COLLATERAL_DECIMALS)?;
        }

        for rebate in &rebates {
            rebate_fees.add_scaled(rebate.amount, COLLATERAL_DECIMALS)?;
        }

        let mut daily_fees = trade_fees.clone();
        daily_fees.subtract(&rebate_fees);

        tracing::info!(
            %chain,
            %window,
            fills = fills.len(),
            excluded,
            rebates = rebates.len(),
            volume = %daily_volume,
            trade_fees = %trade_fees,
            rebate_fees = %rebate_fees,
            fees = %daily_fees,
            "fetch complete"
        );

        Ok(FetchResult {
            daily_volume,
            daily_revenue: daily_fees.clone(),
            daily_protocol_revenue: daily_fees.clone(),
            daily_fees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_matches_registration() {
        let adapter = OpinionAdapter;
        let meta = adapter.metadata();
        assert_eq!(meta.version, 2, "adapter version");
        assert_eq!(meta.chains, &[Chain::Bsc], "bsc only");
        assert_eq!(
            meta.start_date(),
            NaiveDate::from_ymd_opt(2025, 10, 22),
            "start date parses"
        );
        assert!(
            meta.methodology.volume.contains("excluding identified wash trading"),
            "volume methodology mentions the blacklist"
        );
    }

    #[test]
    fn metadata_serializes_with_host_keys() {
        let json = serde_json::to_value(OpinionAdapter::METADATA).unwrap();
        assert_eq!(json["chains"][0], "bsc", "chain slug");
        assert_eq!(json["start"], "2025-10-22", "start");
        assert_eq!(
            json["methodology"]["ProtocolRevenue"],
            "All the revenue goes to protocol",
            "methodology key casing"
        );
    }
}
