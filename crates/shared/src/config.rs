use serde::Deserialize;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub symbols: SymbolConfig,
    pub inflation: InflationConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

/// Display symbols for the network's assets
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolConfig {
    pub liquid: String,
    pub stable: String,
    /// Suffix used when vesting shares are shown as their liquid equivalent
    pub staked: String,
    pub vests: String,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            liquid: "STEEM".to_string(),
            stable: "SBD".to_string(),
            staked: "SP".to_string(),
            vests: "VESTS".to_string(),
        }
    }
}

/// Piecewise inflation decay schedule used for the staking APR
#[derive(Debug, Clone, Deserialize)]
pub struct InflationConfig {
    /// Inflation percent at `initial_block`
    pub initial_rate: f64,
    pub initial_block: u64,
    /// Blocks between each decrement
    pub decrease_blocks: u64,
    /// Percent removed per decrement
    pub decrease_percent: f64,
    /// Inflation never drops below this percent
    pub floor_rate: f64,
}

impl Default for InflationConfig {
    fn default() -> Self {
        Self {
            initial_rate: 9.5,
            initial_block: 7_000_000,
            decrease_blocks: 250_000,
            decrease_percent: 0.01,
            floor_rate: 0.95,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Dynamic props refresh interval in seconds (default: 60)
    pub props_refresh_interval_secs: u64,
    /// Ledger history page size (default: 100)
    pub history_page_size: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            props_refresh_interval_secs: 60,
            history_page_size: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(crate::Error::Config(format!("unknown log format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
        }
    }
}

fn var_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid value for {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Config::default();

        Ok(Config {
            symbols: SymbolConfig {
                liquid: env::var("WALLET_LIQUID_SYMBOL").unwrap_or(defaults.symbols.liquid),
                stable: env::var("WALLET_STABLE_SYMBOL").unwrap_or(defaults.symbols.stable),
                staked: env::var("WALLET_STAKED_SYMBOL").unwrap_or(defaults.symbols.staked),
                vests: env::var("WALLET_VESTS_SYMBOL").unwrap_or(defaults.symbols.vests),
            },
            inflation: InflationConfig {
                initial_rate: var_or("INFLATION_INITIAL_RATE", defaults.inflation.initial_rate)?,
                initial_block: var_or("INFLATION_INITIAL_BLOCK", defaults.inflation.initial_block)?,
                decrease_blocks: var_or(
                    "INFLATION_DECREASE_BLOCKS",
                    defaults.inflation.decrease_blocks,
                )?,
                decrease_percent: var_or(
                    "INFLATION_DECREASE_PERCENT",
                    defaults.inflation.decrease_percent,
                )?,
                floor_rate: var_or("INFLATION_FLOOR_RATE", defaults.inflation.floor_rate)?,
            },
            sync: SyncConfig {
                props_refresh_interval_secs: var_or(
                    "PROPS_REFRESH_INTERVAL_SECS",
                    defaults.sync.props_refresh_interval_secs,
                )?,
                history_page_size: var_or("HISTORY_PAGE_SIZE", defaults.sync.history_page_size)?,
            },
            logging: LoggingConfig {
                format: var_or("LOG_FORMAT", defaults.logging.format)?,
            },
        })
    }
}
