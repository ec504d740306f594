//! Opinion prediction-market volume, fee and revenue adapter.
//!
//! Computes the daily dimensions a data-aggregation host expects
//! (`dailyVolume`, `dailyFees`, `dailyRevenue`, `dailyProtocolRevenue`)
//! from the `OrderFilled` and `RebateEarned` events of the Opinion exchange
//! on BNB Smart Chain. Fills that involve a known wash-trading wallet are
//! left out of volume but still count towards fees.
//!
//! Log retrieval is the host's job: implement [`FetchOptions`] and hand it
//! to [`OpinionAdapter::fetch`](Adapter::fetch).
//!
//! ```no_run
//! use opinion::{Adapter, FetchOptions, OpinionAdapter};
//!
//! async fn daily<O: FetchOptions + Sync>(host: &O) -> opinion::Result<()> {
//!     let result = OpinionAdapter.fetch(host).await?;
//!     println!("volume: {}", result.daily_volume);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod balances;
pub mod blacklist;
pub mod chains;
pub mod contracts;
pub mod error;
pub mod events;
pub mod options;

pub use adapter::{Adapter, AdapterMetadata, FetchResult, Methodology, OpinionAdapter};
pub use balances::{Balances, COLLATERAL_DECIMALS};
pub use chains::Chain;
pub use error::{Error, Result};
pub use events::{LogQuery, OrderFilled, RebateEarned, Side};
pub use options::{FetchOptions, TimeWindow};
