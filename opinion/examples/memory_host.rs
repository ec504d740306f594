#![allow(clippy::print_stdout)]
//! Implement a minimal host and run the Opinion adapter against it.
//!
//! Usage:
//!   cargo run --example `memory_host`
//!
//! The host serves two synthetic logs: one order fill between ordinary
//! wallets and one fill involving a known wash trader. Only the first
//! contributes volume; both contribute fees.

use alloy::primitives::{Address, B256, U256, address};
use alloy::rpc::types::Log;
use alloy::sol_types::SolEvent;
use chrono::NaiveDate;
use opinion::contracts::OPINION_EXCHANGE;
use opinion::{Adapter, Chain, FetchOptions, LogQuery, OpinionAdapter, OrderFilled, TimeWindow};

struct MemoryHost {
    day: NaiveDate,
    logs: Vec<Log>,
}

impl FetchOptions for MemoryHost {
    fn chain(&self) -> Chain {
        Chain::Bsc
    }

    fn window(&self) -> TimeWindow {
        TimeWindow::for_day(self.day)
    }

    async fn get_logs(&self, query: LogQuery) -> opinion::Result<Vec<Log>> {
        Ok(self.logs.iter().filter(|l| query.matches(l)).cloned().collect())
    }
}

fn fill(maker: Address, taker: Address, collateral: u64, fee: u64) -> Log {
    let unit = U256::from(10u64).pow(U256::from(18));
    let event = OrderFilled {
        orderHash: B256::with_last_byte(u8::try_from(fee).unwrap_or(u8::MAX)),
        maker,
        taker,
        makerAssetId: U256::ZERO,
        takerAssetId: U256::from(1),
        makerAmountFilled: U256::from(collateral) * unit,
        takerAmountFilled: U256::from(collateral * 2) * unit,
        fee: U256::from(fee) * unit,
    };
    Log {
        inner: alloy::primitives::Log {
            address: OPINION_EXCHANGE,
            data: event.encode_log_data(),
        },
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let honest = address!("1111111111111111111111111111111111111111");
    let wash = address!("d006482147f77970ef07a91cd84b532433d57400");

    let host = MemoryHost {
        day: NaiveDate::from_ymd_opt(2026, 1, 15).ok_or("bad date")?,
        logs: vec![fill(honest, honest, 100, 1), fill(wash, honest, 5_000, 2)],
    };

    let result = OpinionAdapter.fetch(&host).await?;
    println!("window:  {}", host.window());
    println!("volume:  {}", result.daily_volume);
    println!("fees:    {}", result.daily_fees);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
