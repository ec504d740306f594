//! Runtime configuration loaded from `config.toml`.
//!
//! Lists, per chain, the captured log files a replay reads:
//!
//! ```toml
//! [chains.56]
//! logs = ["captures/exchange.json", "captures/fee-manager.json"]
//! ```
//!
//! Relative paths are resolved against the directory holding the config
//! file. Files given on the command line take precedence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Per-chain log sources, keyed by chain ID.
    #[serde(default)]
    pub chains: HashMap<u64, ChainLogs>,
}

/// Captured log files for a single chain.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLogs {
    /// Files holding `eth_getLogs` results, read in order.
    pub logs: Vec<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns [`Config::default`] if the file does not exist,
    /// allowing the binary to work without any config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut config: Self =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_relative(base);
        }
        Ok(config)
    }

    fn resolve_relative(&mut self, base: &Path) {
        for chain in self.chains.values_mut() {
            for file in &mut chain.logs {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }
    }

    /// Return the log files for a chain.
    ///
    /// A non-empty `overrides` list wins over whatever the config holds.
    #[must_use]
    pub fn logs_for(&self, chain_id: u64, overrides: &[PathBuf]) -> Vec<PathBuf> {
        if !overrides.is_empty() {
            return overrides.to_vec();
        }
        self.chains
            .get(&chain_id)
            .map(|c| c.logs.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Config {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn missing_file_yields_default() {
        let config = Config::load(Path::new("/nonexistent/opinion-replay.toml")).unwrap();
        assert!(config.chains.is_empty(), "no chains configured");
    }

    #[test]
    fn overrides_win_over_config() {
        let config = parse("[chains.56]\nlogs = [\"a.json\", \"b.json\"]\n");

        assert_eq!(
            config.logs_for(56, &[]),
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
            "configured files in order"
        );
        assert_eq!(
            config.logs_for(56, &[PathBuf::from("cli.json")]),
            vec![PathBuf::from("cli.json")],
            "cli override"
        );
        assert!(config.logs_for(97, &[]).is_empty(), "unconfigured chain");
    }

    #[test]
    fn relative_paths_follow_the_config_file() {
        let mut config = parse("[chains.56]\nlogs = [\"captures/day.json\", \"/abs/day.json\"]\n");
        config.resolve_relative(Path::new("/etc/opinion"));

        assert_eq!(
            config.logs_for(56, &[]),
            vec![
                PathBuf::from("/etc/opinion/captures/day.json"),
                PathBuf::from("/abs/day.json"),
            ],
            "only relative paths are rebased"
        );
    }
}
