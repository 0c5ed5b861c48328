use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::Deserialize;
use serde_json::json;
use shared::models::{
    AccountRecord, AccountState, DynamicGlobalProperties, EntryRecord, FeedHistory, LedgerRecord,
    RewardFund,
};
use shared::{logging, Config};
use std::path::{Path, PathBuf};
use tracing::info;

use wallet::datetime::parse_date;
use wallet::{
    build_wallet_snapshot, compute_apr_with, compute_entry_payout_with, estimate_savings_interest,
    vote_value, voting_power, DynamicProps, TransactionFormatter,
};

/// Derive a wallet report from chain JSON dumps
#[derive(Parser, Debug)]
#[command(name = "wallet-report", version)]
struct Args {
    /// Account record as returned by get_accounts
    #[arg(long)]
    account: PathBuf,

    /// Object with `globals`, `feed_history` and `reward_fund`
    #[arg(long)]
    props: PathBuf,

    /// Array of flattened account history records
    #[arg(long)]
    history: Option<PathBuf>,

    /// Content entry to compute a payout breakdown for
    #[arg(long)]
    entry: Option<PathBuf>,

    /// Stable currency locked in pending conversions
    #[arg(long)]
    converting: Option<f64>,

    /// Reference time (chain format), defaults to now
    #[arg(long)]
    now: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChainProps {
    globals: DynamicGlobalProperties,
    feed_history: FeedHistory,
    reward_fund: RewardFund,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;
    logging::init_from_config(&config.logging);

    let now = match &args.now {
        Some(raw) => parse_date(raw).context("Invalid --now")?,
        None => Utc::now().naive_utc(),
    };

    let chain: ChainProps = read_json(&args.props)?;
    let props = DynamicProps::from_chain(&chain.globals, &chain.feed_history, &chain.reward_fund);

    let account: AccountRecord = read_json(&args.account)?;
    let name = account.name.clone();
    info!("Building report for {}", name);

    let power = voting_power(&account, now);
    let vote = vote_value(&account, &props, power * 100.0, 10_000.0);
    let interest = estimate_savings_interest(&account, &props, now);
    let wallet = build_wallet_snapshot(&AccountState::loaded(account), &props, args.converting);

    let history = match &args.history {
        Some(path) => {
            let records: Vec<LedgerRecord> = read_json(path)?;
            TransactionFormatter::new(&props, &config.symbols, &name).classify(&records)
        }
        None => Vec::new(),
    };

    let entry = match &args.entry {
        Some(path) => {
            let entry: EntryRecord = read_json(path)?;
            Some(compute_entry_payout_with(&entry, &props, &config.symbols))
        }
        None => None,
    };

    let report = json!({
        "account": name,
        "wallet": wallet,
        "apr": compute_apr_with(&props, &config.inflation),
        "voting_power": power,
        "vote_value": vote,
        "savings_interest": interest,
        "history": history,
        "entry_payout": entry,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
