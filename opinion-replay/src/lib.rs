//! Replay driver for the Opinion adapter.
//!
//! Runs [`opinion::OpinionAdapter`] over `eth_getLogs` responses captured
//! ahead of time, so the daily dimensions can be reproduced offline.

pub mod config;
pub mod source;
