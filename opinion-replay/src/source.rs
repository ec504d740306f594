//! Captured log sources and the replay host built on them.
//!
//! A capture file holds either the bare `eth_getLogs` result array or the
//! full JSON-RPC response wrapping it. Files are read in order; a log that
//! appears in more than one file (same transaction hash and log index) is
//! kept once, and logs flagged `removed` by a reorg are dropped.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use alloy::primitives::B256;
use alloy::rpc::types::Log;
use anyhow::{Context, Result};
use opinion::{Chain, FetchOptions, LogQuery, TimeWindow};
use serde::Deserialize;

/// Accepted capture file shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum Capture {
    Logs(Vec<Log>),
    Response { result: Vec<Log> },
}

impl Capture {
    fn into_logs(self) -> Vec<Log> {
        match self {
            Self::Logs(logs) | Self::Response { result: logs } => logs,
        }
    }
}

/// Parse a single capture from JSON text.
///
/// # Errors
///
/// Returns an error if the text is neither a log array nor a JSON-RPC
/// response carrying one.
pub fn parse_capture(text: &str) -> Result<Vec<Log>> {
    let capture: Capture = serde_json::from_str(text)
        .context("expected an eth_getLogs result array or JSON-RPC response")?;
    Ok(capture.into_logs())
}

/// Read and merge capture files.
///
/// # Errors
///
/// Returns an error if any file cannot be read or parsed.
pub fn load_logs(paths: &[PathBuf]) -> Result<Vec<Log>> {
    let mut seen: HashSet<(B256, u64)> = HashSet::new();
    let mut logs = Vec::new();
    let mut duplicates = 0usize;
    let mut removed = 0usize;

    for path in paths {
        let parsed = read_capture(path)?;
        tracing::debug!(path = %path.display(), logs = parsed.len(), "capture loaded");

        for log in parsed {
            if log.removed {
                removed += 1;
                continue;
            }
            if let (Some(tx), Some(index)) = (log.transaction_hash, log.log_index) {
                if !seen.insert((tx, index)) {
                    duplicates += 1;
                    continue;
                }
            }
            logs.push(log);
        }
    }

    tracing::info!(
        files = paths.len(),
        logs = logs.len(),
        duplicates,
        removed,
        "captures merged"
    );
    Ok(logs)
}

fn read_capture(path: &Path) -> Result<Vec<Log>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_capture(&text).with_context(|| format!("parsing {}", path.display()))
}

/// A [`FetchOptions`] host serving captured logs.
///
/// Logs carrying `blockTimestamp` are restricted to the window. Logs
/// without one are assumed to have been captured for the window already.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    chain: Chain,
    window: TimeWindow,
    logs: Vec<Log>,
}

impl ReplayOptions {
    /// Serve `logs` for `chain` over `window`.
    #[must_use]
    pub const fn new(chain: Chain, window: TimeWindow, logs: Vec<Log>) -> Self {
        Self {
            chain,
            window,
            logs,
        }
    }

    /// Serve the merged contents of `paths`.
    ///
    /// # Errors
    ///
    /// See [`load_logs`].
    pub fn from_files(chain: Chain, window: TimeWindow, paths: &[PathBuf]) -> Result<Self> {
        Ok(Self::new(chain, window, load_logs(paths)?))
    }

    fn in_window(&self, log: &Log) -> bool {
        log.block_timestamp
            .is_none_or(|ts| self.window.contains_timestamp(ts))
    }
}

impl FetchOptions for ReplayOptions {
    fn chain(&self) -> Chain {
        self.chain
    }

    fn window(&self) -> TimeWindow {
        self.window
    }

    async fn get_logs(&self, query: LogQuery) -> opinion::Result<Vec<Log>> {
        let logs: Vec<Log> = self
            .logs
            .iter()
            .filter(|log| query.matches(log) && self.in_window(log))
            .cloned()
            .collect();
        tracing::debug!(
            target_contract = %query.target,
            event = query.event_signature,
            logs = logs.len(),
            "serving captured logs"
        );
        Ok(logs)
    }
}
